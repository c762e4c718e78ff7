// src/scrape/meets.rs

use crate::config::consts::RESULTS_INDEX_URL;
use crate::core::{html, net};
use crate::error::{Result, ScrapeError};

/// Fetch the results index and return every meet URL it links to.
/// No dedup here; the caller decides.
pub fn fetch() -> Result<Vec<String>> {
    let doc = net::http_get(RESULTS_INDEX_URL)?;
    parse_doc(&doc)
}

/// Split out for unit tests.
pub fn parse_doc(doc: &str) -> Result<Vec<String>> {
    let table = find_results_table(doc)
        .ok_or_else(|| ScrapeError::Lookup(s!("results table not found on index page")))?;

    let mut meets = Vec::new();
    let mut pos = 0usize;
    while let Some((a_s, a_e)) = html::next_tag_block_ci(table, "<a", "</a>", pos) {
        let block = &table[a_s..a_e];
        pos = a_e;
        let Some(url) = html::attr_value_ci(block, "href") else { continue };
        if url.ends_with("results") {
            meets.push(url);
        } else {
            log::warn!("Skipping url {url}, doesn't look like race results");
        }
    }
    Ok(meets)
}

fn find_results_table(doc: &str) -> Option<&str> {
    let mut pos = 0usize;
    while let Some((t_s, t_e)) = html::next_tag_block_ci(doc, "<table", "</table>", pos) {
        let table = &doc[t_s..t_e];
        pos = t_e;
        if html::tag_has_class_ci(table, "results") {
            return Some(table);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_results_suffixed_anchors() {
        let doc = r#"
            <html><body>
              <table class="other"><tr><td><a href="https://x/ignored/results">no</a></td></tr></table>
              <table class="results">
                <tr><td><a href="https://x/meets/100/results">A</a></td></tr>
                <tr><td><a href="https://x/meets/100/photos">P</a></td></tr>
                <tr><td><a href="https://x/meets/101/results">B</a></td></tr>
                <tr><td><a href="https://x/meets/102/videos">V</a></td></tr>
                <tr><td><a href="https://x/meets/102/results">C</a></td></tr>
              </table>
            </body></html>
        "#;
        let meets = parse_doc(doc).unwrap();
        assert_eq!(
            meets,
            vec![
                "https://x/meets/100/results",
                "https://x/meets/101/results",
                "https://x/meets/102/results",
            ]
        );
    }

    #[test]
    fn missing_results_table_is_lookup_error() {
        let doc = "<html><body><table class=\"schedule\"></table></body></html>";
        assert!(matches!(
            parse_doc(doc).unwrap_err(),
            ScrapeError::Lookup(_)
        ));
    }
}
