// src/parse/block.rs

use crate::config::consts::{DIVIDER_CHAR, DIVIDER_MIN_LEN, TRAILING_ROWS_TO_IGNORE};
use crate::error::{Result, ScrapeError};

/// Which of the two scoring tables a section holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Team,
    Individual,
}

/// One sliced span of a raw results dump. The first line is the
/// fixed-width header; the rest are data rows.
#[derive(Clone, Debug)]
pub struct RaceSection {
    pub kind: SectionKind,
    pub race_name: String,
    pub lines: Vec<String>,
}

fn is_divider(line: &str) -> bool {
    line.len() >= DIVIDER_MIN_LEN && line.chars().all(|c| c == DIVIDER_CHAR)
}

fn malformed(url: &str, reason: impl AsRef<str>) -> ScrapeError {
    ScrapeError::Malformed(format!("{}: {}", url, reason.as_ref()))
}

/// Slice a raw results dump into its team and individual sections.
///
/// A well-formed dump carries four divider lines: race name, divider,
/// team header, divider, team data rows plus a junk tail, divider,
/// individual header, divider, individual data rows, final junk line.
/// `url` is used for error context only.
pub fn locate_sections(text: &str, url: &str) -> Result<(RaceSection, RaceSection)> {
    let lines: Vec<&str> = text.lines().collect();

    let dividers: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_divider(line))
        .map(|(i, _)| i)
        .collect();
    log::debug!("Divider rows: {:?}", dividers);
    if dividers.len() < 4 {
        return Err(malformed(
            url,
            format!("expected 4 divider lines, found {}", dividers.len()),
        ));
    }
    let (d0, d1, d2, d3) = (dividers[0], dividers[1], dividers[2], dividers[3]);

    if d0 == 0 {
        return Err(malformed(url, "no race name line before the first divider"));
    }
    let race_name = lines[d0 - 1].trim_end().to_string();

    // Team: header right after d0, data between d1 and the junk tail
    // preceding d2.
    if d0 + 1 >= d1 {
        return Err(malformed(url, "team header line missing"));
    }
    let team_end = d2
        .checked_sub(TRAILING_ROWS_TO_IGNORE)
        .filter(|&end| end >= d1 + 1)
        .ok_or_else(|| malformed(url, "team data bounds are invalid"))?;
    let mut team_lines = vec![lines[d0 + 1].to_string()];
    team_lines.extend(lines[d1 + 1..team_end].iter().map(|l| l.to_string()));

    // Individual: header right after d2, data between d3 and the final
    // line (always excluded).
    if d2 + 1 >= d3 {
        return Err(malformed(url, "individual header line missing"));
    }
    if d3 + 1 >= lines.len() {
        return Err(malformed(url, "individual data bounds are invalid"));
    }
    let mut individual_lines = vec![lines[d2 + 1].to_string()];
    individual_lines.extend(lines[d3 + 1..lines.len() - 1].iter().map(|l| l.to_string()));

    Ok((
        RaceSection {
            kind: SectionKind::Team,
            race_name: race_name.clone(),
            lines: team_lines,
        },
        RaceSection {
            kind: SectionKind::Individual,
            race_name,
            lines: individual_lines,
        },
    ))
}
