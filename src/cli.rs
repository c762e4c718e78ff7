// src/cli.rs

use crate::config::options::CrawlOptions;
use crate::crawl;
use crate::csv;
use crate::error::Result;
use crate::scrape::meets;
use crate::table::Table;

/// No-argument entry point: list the meets on the index, crawl the
/// first one, print both result tables.
pub fn run() -> Result<()> {
    let mut meet_urls = meets::fetch()?;
    meet_urls.sort();
    meet_urls.dedup();
    println!("{}", meet_urls.join("\n"));

    let Some(first) = meet_urls.first() else {
        log::warn!("No meets found on the index page");
        return Ok(());
    };

    match crawl::crawl_meet(first, &CrawlOptions::default())? {
        Some((team, individual)) => {
            print_table(&individual);
            print_table(&team);
        }
        None => log::warn!("Meet {first} produced no results"),
    }
    Ok(())
}

fn print_table(table: &Table) {
    print!(
        "{}",
        csv::rows_to_string(&table.header_row(), &table.to_text_rows(), '\t')
    );
}
