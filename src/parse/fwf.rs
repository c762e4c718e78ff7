// src/parse/fwf.rs
//
// Fixed-width schema inference. A column exists wherever any sampled
// line has ink; gaps that stay blank across the whole sample separate
// fields. Header and data align by character position, not by any
// delimiter character.

use crate::config::consts::INFER_SAMPLE_ROWS;
use crate::error::{Result, ScrapeError};
use crate::parse::block::RaceSection;
use crate::table::Table;

/// Build a string-typed table from a fixed-width section and tag every
/// row with the section's race name.
pub fn build_table(section: &RaceSection) -> Result<Table> {
    let header = section
        .lines
        .first()
        .ok_or_else(|| ScrapeError::Malformed(s!("section has no header line")))?;

    let spans = infer_spans(&section.lines);
    if spans.is_empty() {
        return Err(ScrapeError::Malformed(format!(
            "no columns inferable for race '{}'",
            section.race_name
        )));
    }
    let names = column_names(header, &spans);

    let sampled = section.lines.len().min(INFER_SAMPLE_ROWS);
    let mut rows = Vec::with_capacity(section.lines.len().saturating_sub(1));
    for (i, line) in section.lines.iter().enumerate().skip(1) {
        // lines inside the sample window shaped the spans; later ones
        // must still fit them
        if i >= sampled {
            if let Err(offset) = check_alignment(line, &spans) {
                return Err(ScrapeError::Malformed(format!(
                    "row {} of race '{}' has text at offset {} outside every inferred column",
                    i, section.race_name, offset
                )));
            }
        }
        rows.push(slice_row(line, &spans));
    }

    let mut table = Table::from_rows(names, &rows);
    table.push_literal("race", &section.race_name);
    Ok(table)
}

/// Character spans `[start, end)` holding ink anywhere in the sample.
fn infer_spans(lines: &[String]) -> Vec<(usize, usize)> {
    let sample = &lines[..lines.len().min(INFER_SAMPLE_ROWS)];
    let width = sample.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut ink = vec![false; width];
    for line in sample {
        for (i, ch) in line.chars().enumerate() {
            if !ch.is_whitespace() {
                ink[i] = true;
            }
        }
    }

    let mut spans = Vec::new();
    let mut open = None;
    for (i, &on) in ink.iter().enumerate() {
        match (on, open) {
            (true, None) => open = Some(i),
            (false, Some(start)) => {
                spans.push((start, i));
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        spans.push((start, width));
    }
    spans
}

/// Header text over each span; spans the header leaves blank get the
/// positional `Unnamed: <i>` name.
fn column_names(header: &str, spans: &[(usize, usize)]) -> Vec<String> {
    let chars: Vec<char> = header.chars().collect();
    spans
        .iter()
        .enumerate()
        .map(|(i, &(start, end))| {
            let name = slice_chars(&chars, start, end);
            if name.is_empty() { format!("Unnamed: {}", i) } else { name }
        })
        .collect()
}

fn slice_row(line: &str, spans: &[(usize, usize)]) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    spans
        .iter()
        .map(|&(start, end)| slice_chars(&chars, start, end))
        .collect()
}

fn slice_chars(chars: &[char], start: usize, end: usize) -> String {
    if start >= chars.len() {
        return s!();
    }
    chars[start..end.min(chars.len())]
        .iter()
        .collect::<String>()
        .trim()
        .to_string()
}

/// Ink inside an inter-span gap means the row is not aligned with the
/// inferred table; ink past the last span is tolerated and truncated.
/// Returns the first offending offset.
fn check_alignment(line: &str, spans: &[(usize, usize)]) -> std::result::Result<(), usize> {
    let last_end = spans.last().map_or(0, |&(_, end)| end);
    for (i, ch) in line.chars().enumerate() {
        if i >= last_end {
            break;
        }
        if ch.is_whitespace() {
            continue;
        }
        if !spans.iter().any(|&(start, end)| start <= i && i < end) {
            return Err(i);
        }
    }
    Ok(())
}
