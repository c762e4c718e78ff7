// src/crawl.rs
//
// Meet-level crawling: enumerate races, parse each one, coerce the
// numeric columns and accumulate into one team table and one
// individual table per meet.

use crate::config::consts::{MEET_ID_SEGMENT, SPURIOUS_COLUMN};
use crate::config::options::{CrawlOptions, MeetPolicy};
use crate::error::{Result, ScrapeError};
use crate::scrape::{races, results};
use crate::table::Table;

/// Team columns that must coerce to integers: rank, score and the
/// seven scoring positions.
pub const TEAM_INT_COLUMNS: [&str; 9] = ["Rank", "Score", "1", "2", "3", "4", "5", "6", "7"];
/// Individual columns that must coerce to integers.
pub const INDIVIDUAL_INT_COLUMNS: [&str; 3] = ["Pl", "#", "Score"];

/// Crawl one meet into a team table and an individual table.
///
/// Race-list discovery failures propagate as `Err`. Per-race failures
/// are logged; under `MeetPolicy::AllOrNothing` the first one
/// invalidates the whole meet (`Ok(None)`), under
/// `MeetPolicy::PartialSuccess` the race is skipped. A meet with
/// nothing accumulated is also `Ok(None)`.
pub fn crawl_meet(meet_url: &str, opts: &CrawlOptions) -> Result<Option<(Table, Table)>> {
    let meet_name = meet_id_from_url(meet_url)?;
    log::info!("Loading races at meet {meet_name}, meet_url={meet_url}");

    let race_urls = races::fetch(meet_url)?;
    Ok(crawl_races(&race_urls, meet_name, opts, |race_url| {
        results::fetch_race(race_url)
    }))
}

/// Race loop shared by the live crawler and the synthetic-document
/// tests: `fetch` turns a race URL into its two parsed tables.
pub fn crawl_races<F>(
    race_urls: &[String],
    meet_name: &str,
    opts: &CrawlOptions,
    fetch: F,
) -> Option<(Table, Table)>
where
    F: Fn(&str) -> Result<(Table, Table)>,
{
    let mut team_acc: Vec<Table> = Vec::new();
    let mut individual_acc: Vec<Table> = Vec::new();

    for race_url in race_urls {
        log::info!("Loading race results for: {race_url}");
        let loaded = fetch(race_url).and_then(|(team, individual)| {
            Ok((
                normalize(team, meet_name, &TEAM_INT_COLUMNS)?,
                normalize(individual, meet_name, &INDIVIDUAL_INT_COLUMNS)?,
            ))
        });
        match loaded {
            Ok((team, individual)) => {
                log::debug!(
                    "Loaded race: team rows={}, individual rows={}",
                    team.height(),
                    individual.height()
                );
                team_acc.push(team);
                individual_acc.push(individual);
            }
            Err(e) => {
                log::warn!("Could not load results for meet {meet_name}, race={race_url}: {e}");
                match opts.policy {
                    MeetPolicy::AllOrNothing => return None,
                    MeetPolicy::PartialSuccess => continue,
                }
            }
        }
    }

    if team_acc.is_empty() {
        return None;
    }
    match (concat(team_acc), concat(individual_acc)) {
        (Ok(team), Ok(individual)) => Some((team, individual)),
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("Could not assemble meet {meet_name}: {e}");
            None
        }
    }
}

/// Crawl every meet in the list, skipping failures, and concatenate
/// the survivors. Not wired into the CLI (which crawls one meet); this
/// is the multi-meet aggregation the library supports.
pub fn crawl_meet_list(meet_urls: &[String], opts: &CrawlOptions) -> Option<(Table, Table)> {
    let mut team_acc: Vec<Table> = Vec::new();
    let mut individual_acc: Vec<Table> = Vec::new();

    for meet_url in meet_urls {
        log::info!("Crawling meet {meet_url}");
        match crawl_meet(meet_url, opts) {
            Ok(Some((team, individual))) => {
                log::info!(
                    "Loaded {meet_url}: {} team rows, {} individual rows",
                    team.height(),
                    individual.height()
                );
                team_acc.push(team);
                individual_acc.push(individual);
            }
            Ok(None) => log::warn!("No results for meet {meet_url}"),
            Err(e) => log::warn!("Error crawling meet {meet_url}: {e}"),
        }
    }

    if team_acc.is_empty() {
        return None;
    }
    match (concat(team_acc), concat(individual_acc)) {
        (Ok(team), Ok(individual)) => Some((team, individual)),
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("Could not concatenate meet results: {e}");
            None
        }
    }
}

/// Shared tail of race ingestion: spurious inference columns dropped,
/// meet tag appended, numeric columns coerced.
pub fn normalize(mut table: Table, meet_name: &str, int_columns: &[&str]) -> Result<Table> {
    table.drop_column(SPURIOUS_COLUMN);
    table.push_literal("meet", meet_name);
    for column in int_columns {
        table.cast_int(column)?;
    }
    Ok(table)
}

/// The meet identifier is a fixed path segment of the meet URL, e.g.
/// `https://sc.milesplit.com/meets/12345-relays/results` -> `12345-relays`.
pub fn meet_id_from_url(meet_url: &str) -> Result<&str> {
    meet_url
        .split('/')
        .nth(MEET_ID_SEGMENT)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| ScrapeError::Lookup(format!("meet url has no id segment: {meet_url}")))
}

fn concat(tables: Vec<Table>) -> Result<Table> {
    let mut iter = tables.into_iter();
    let mut out = iter.next().unwrap_or_default();
    for table in iter {
        out.vstack(table)?;
    }
    Ok(out)
}
