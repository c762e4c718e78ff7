// src/table.rs
//
// Column-major table for parsed results. Values come out of the
// fixed-width parser as strings; the crawler rewrites specific columns
// to integers before accumulating races into meet tables.

use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnData {
    Str(Vec<String>),
    Int(Vec<i64>),
}

impl ColumnData {
    fn len(&self) -> usize {
        match self {
            ColumnData::Str(v) => v.len(),
            ColumnData::Int(v) => v.len(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// Ordered named columns, all the same length.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a string-typed table from a header and row-major values.
    /// Short rows are padded with empty cells.
    pub fn from_rows(names: Vec<String>, rows: &[Vec<String>]) -> Self {
        let mut columns: Vec<Column> = names
            .into_iter()
            .map(|name| Column {
                name,
                data: ColumnData::Str(Vec::with_capacity(rows.len())),
            })
            .collect();
        for row in rows {
            for (i, col) in columns.iter_mut().enumerate() {
                if let ColumnData::Str(v) = &mut col.data {
                    v.push(row.get(i).cloned().unwrap_or_default());
                }
            }
        }
        Self { columns }
    }

    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, |c| c.data.len())
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Remove a column by name; no-op when absent.
    pub fn drop_column(&mut self, name: &str) {
        self.columns.retain(|c| c.name != name);
    }

    /// Append a constant string column, one value per existing row.
    pub fn push_literal(&mut self, name: &str, value: &str) {
        let n = self.height();
        self.columns.push(Column {
            name: s!(name),
            data: ColumnData::Str(vec![s!(value); n]),
        });
    }

    /// Rewrite a string column as integers. The column must exist and
    /// every value must parse as base-10.
    pub fn cast_int(&mut self, name: &str) -> Result<()> {
        let col = self
            .columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| ScrapeError::Malformed(format!("no column named '{name}'")))?;
        let values = match &col.data {
            ColumnData::Int(_) => return Ok(()),
            ColumnData::Str(v) => v,
        };
        let mut parsed = Vec::with_capacity(values.len());
        for v in values {
            match v.parse::<i64>() {
                Ok(n) => parsed.push(n),
                Err(_) => {
                    return Err(ScrapeError::Coercion {
                        column: s!(name),
                        value: v.clone(),
                    });
                }
            }
        }
        col.data = ColumnData::Int(parsed);
        Ok(())
    }

    /// Append the rows of `other`. Column names and types must match.
    pub fn vstack(&mut self, other: Table) -> Result<()> {
        if self.column_names() != other.column_names() {
            return Err(ScrapeError::Malformed(format!(
                "cannot stack tables: columns {:?} vs {:?}",
                self.column_names(),
                other.column_names()
            )));
        }
        for (a, b) in self.columns.iter_mut().zip(other.columns) {
            match (&mut a.data, b.data) {
                (ColumnData::Str(va), ColumnData::Str(vb)) => va.extend(vb),
                (ColumnData::Int(va), ColumnData::Int(vb)) => va.extend(vb),
                _ => {
                    return Err(ScrapeError::Malformed(format!(
                        "cannot stack tables: column '{}' differs in type",
                        a.name
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn header_row(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Rows re-stringified; integer columns format back to base-10.
    pub fn to_text_rows(&self) -> Vec<Vec<String>> {
        (0..self.height())
            .map(|r| {
                self.columns
                    .iter()
                    .map(|c| match &c.data {
                        ColumnData::Str(v) => v[r].clone(),
                        ColumnData::Int(v) => v[r].to_string(),
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows(
            vec![s!("Pl"), s!("Name"), s!("Score")],
            &[
                vec![s!("1"), s!("Ada"), s!("10")],
                vec![s!("2"), s!("Bo"), s!("8")],
            ],
        )
    }

    #[test]
    fn drop_column_keeps_rows() {
        let mut t = sample();
        t.drop_column("Name");
        assert_eq!(t.width(), 2);
        assert_eq!(t.height(), 2);
        t.drop_column("Nope"); // absent: no-op
        assert_eq!(t.width(), 2);
    }

    #[test]
    fn cast_int_round_trips() {
        let mut t = sample();
        t.cast_int("Score").unwrap();
        assert_eq!(
            t.column("Score").unwrap().data,
            ColumnData::Int(vec![10, 8])
        );
        let rows = t.to_text_rows();
        assert_eq!(rows[0][2], "10");
        assert_eq!(rows[1][2], "8");
    }

    #[test]
    fn cast_int_rejects_non_numeric() {
        let mut t = Table::from_rows(
            vec![s!("Score")],
            &[vec![s!("42")], vec![s!("DNF")]],
        );
        let err = t.cast_int("Score").unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::Coercion { ref column, ref value } if column == "Score" && value == "DNF"
        ));
    }

    #[test]
    fn cast_int_missing_column_is_malformed() {
        let mut t = sample();
        assert!(matches!(
            t.cast_int("Rank").unwrap_err(),
            ScrapeError::Malformed(_)
        ));
    }

    #[test]
    fn vstack_appends_matching_schema() {
        let mut a = sample();
        let b = sample();
        a.vstack(b).unwrap();
        assert_eq!(a.height(), 4);
        assert_eq!(a.width(), 3);
    }

    #[test]
    fn vstack_rejects_schema_mismatch() {
        let mut a = sample();
        let mut b = sample();
        b.drop_column("Name");
        assert!(a.vstack(b).is_err());

        let mut c = sample();
        let mut d = sample();
        d.cast_int("Score").unwrap();
        assert!(c.vstack(d).is_err());
    }

    #[test]
    fn push_literal_tags_every_row() {
        let mut t = sample();
        t.push_literal("race", "Boys 5000m");
        assert_eq!(t.width(), 4);
        let rows = t.to_text_rows();
        assert!(rows.iter().all(|r| r[3] == "Boys 5000m"));
    }
}
