// src/scrape/races.rs

use crate::core::{html, net};
use crate::error::{Result, ScrapeError};

/// Fetch a meet page and return its race result page URLs in document
/// order.
pub fn fetch(meet_url: &str) -> Result<Vec<String>> {
    log::info!("Listing races for meet: {meet_url}");
    let doc = net::http_get(meet_url)?;
    let races = parse_doc(&doc)?;
    log::info!("Found {} races.", races.len());
    log::debug!("Races: {:?}", races);
    Ok(races)
}

/// Split out for unit tests.
pub fn parse_doc(doc: &str) -> Result<Vec<String>> {
    let list = html::block_by_id_ci(doc, "resultFileList")
        .ok_or_else(|| ScrapeError::Lookup(s!("resultFileList element not found on meet page")))?;

    let mut races = Vec::new();
    let mut pos = 0usize;
    while let Some((a_s, a_e)) = html::next_tag_block_ci(list, "<a", "</a>", pos) {
        if let Some(url) = html::attr_value_ci(&list[a_s..a_e], "href") {
            races.push(url);
        }
        pos = a_e;
    }
    Ok(races)
}
