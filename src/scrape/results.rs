// src/scrape/results.rs

use crate::config::consts::RAW_SEGMENT;
use crate::core::{html, net};
use crate::error::{Result, ScrapeError};
use crate::parse::{block, fwf};
use crate::table::Table;

/// Fetch one race and parse its raw dump into (team, individual)
/// tables, both tagged with a `race` column.
pub fn fetch_race(race_url: &str) -> Result<(Table, Table)> {
    let raw_url = raw_url_for(race_url);
    log::info!("Loading race url: {raw_url}");
    let doc = net::http_get(&raw_url)?;
    let text = extract_raw_text(&doc)
        .ok_or_else(|| ScrapeError::Lookup(format!("{raw_url}: no <pre> results body")))?;
    log::debug!("Data has {} lines", text.lines().count());
    parse_raw_doc(&text, &raw_url)
}

/// Split out for unit tests.
pub fn parse_raw_doc(text: &str, url: &str) -> Result<(Table, Table)> {
    let (team_section, individual_section) = block::locate_sections(text, url)?;
    log::info!("Parsing result data for event '{}'", team_section.race_name);

    let team = fwf::build_table(&team_section)?;
    let individual = fwf::build_table(&individual_section)?;
    log::info!(
        "Race {}: team shape {}x{}, individual shape {}x{}",
        team_section.race_name,
        team.height(),
        team.width(),
        individual.height(),
        individual.width(),
    );
    Ok((team, individual))
}

/// The raw page lives beside the formatted one: swap the final path
/// segment for `raw`.
pub fn raw_url_for(race_url: &str) -> String {
    let trimmed = race_url.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(i) => join!(&trimmed[..i], "/", RAW_SEGMENT),
        None => join!(trimmed, "/", RAW_SEGMENT),
    }
}

/// The dump is the text of the `<pre>` inside the results body element.
fn extract_raw_text(doc: &str) -> Option<String> {
    let body = html::block_by_id_ci(doc, "meetResultsBody")?;
    let (p_s, p_e) = html::next_tag_block_ci(body, "<pre", "</pre>", 0)?;
    Some(html::inner_after_open_tag(&body[p_s..p_e]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_url_replaces_final_segment() {
        assert_eq!(
            raw_url_for("https://x/meets/100/results/901/formatted"),
            "https://x/meets/100/results/901/raw"
        );
        assert_eq!(
            raw_url_for("https://x/meets/100/results/901/formatted/"),
            "https://x/meets/100/results/901/raw"
        );
    }

    #[test]
    fn extracts_pre_text() {
        let doc = "<html><body><div id=\"meetResultsBody\">\n<pre>line one\nline two</pre>\n</div></body></html>";
        let text = extract_raw_text(doc).unwrap();
        assert_eq!(text, "line one\nline two");
    }

    #[test]
    fn missing_pre_is_none() {
        assert!(extract_raw_text("<html><div id=\"meetResultsBody\"></div></html>").is_none());
        assert!(extract_raw_text("<html><pre>x</pre></html>").is_none());
    }
}
