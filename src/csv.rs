// src/csv.rs
use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single delimiter-separated row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Render a header row plus data rows as one delimiter-separated string.
pub fn rows_to_string(headers: &[String], rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let _ = write_row(&mut buf, headers, sep);
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_cells_containing_the_separator() {
        let out = rows_to_string(
            &[s!("Team"), s!("Score")],
            &[vec![s!("Central, East Campus"), s!("25")]],
            ',',
        );
        assert_eq!(out, "Team,Score\n\"Central, East Campus\",25\n");
    }

    #[test]
    fn tab_separated_rows() {
        let out = rows_to_string(&[s!("a"), s!("b")], &[vec![s!("1"), s!("2")]], '\t');
        assert_eq!(out, "a\tb\n1\t2\n");
    }
}
