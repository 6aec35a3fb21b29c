use super::model::{CandidateProfile, Cell, Column};
use std::collections::HashSet as Set;

/// The candidate spreadsheet: rows in source order, and only the columns that appear in at
/// least one row, in [`Column::ALL`] order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<CandidateProfile>,
}

impl Table {
    pub fn new(rows: Vec<CandidateProfile>) -> Self {
        let columns = Column::ALL
            .into_iter()
            .filter(|column| rows.iter().any(|row| row.contains(*column)))
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[CandidateProfile] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Each row's cell for every table column; `None` where a row lacks the column.
    pub fn records(&self) -> impl Iterator<Item = Vec<Option<&Cell>>> + '_ {
        self.rows.iter().map(|row| {
            self.columns
                .iter()
                .map(|column| row.get(*column))
                .collect()
        })
    }

    /// Number of distinct text values in `column`.
    pub fn distinct(&self, column: Column) -> usize {
        self.rows
            .iter()
            .filter_map(|row| row.get(column).and_then(Cell::as_text))
            .collect::<Set<&str>>()
            .len()
    }

    /// Occurrences of each text value in `column`, most frequent first; ties keep the order
    /// of first appearance.
    pub fn value_counts(&self, column: Column) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for value in self
            .rows
            .iter()
            .filter_map(|row| row.get(column).and_then(Cell::as_text))
        {
            match counts.iter_mut().find(|(seen, _)| seen == value) {
                Some((_, n)) => *n += 1,
                None => counts.push((value.to_string(), 1)),
            }
        }
        // stable sort, so first appearance breaks ties
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::extract::row;
    use crate::candidates::CandidateRecord;
    use serde_json::{json, Value};

    const A: CandidateRecord = CandidateRecord::new("PARTIDO A", "Ana", "Presidente", 1);
    const B: CandidateRecord = CandidateRecord::new("PARTIDO A", "Beto", "1er Vicepresidente", 2);
    const C: CandidateRecord = CandidateRecord::new("PARTIDO C", "Carla", "Presidente", 3);

    #[test]
    fn failed_fetches_only_keep_source_columns() {
        let table = Table::new(vec![row(&A, &Value::Null), row(&B, &Value::Null)]);
        assert_eq!(
            table.columns(),
            &[
                Column::Partido,
                Column::Candidatura,
                Column::Persona,
                Column::IdHojaVida
            ]
        );
    }

    #[test]
    fn columns_are_the_union_in_preferred_order() {
        let table = Table::new(vec![
            row(&A, &Value::Null),
            row(&B, &json!({ "datoGeneral": { "nombres": "BETO" } })),
        ]);

        let columns = table.columns();
        assert_eq!(columns.len(), Column::ALL.len());
        assert_eq!(columns, &Column::ALL);

        // the failed row has holes where the other row has data
        let records: Vec<_> = table.records().collect();
        assert_eq!(records[0][3], None);
        assert_eq!(records[1][3], Some(&Cell::from("BETO")));
    }

    #[test]
    fn summaries() {
        let table = Table::new(vec![
            row(&A, &Value::Null),
            row(&B, &Value::Null),
            row(&C, &Value::Null),
        ]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.distinct(Column::Partido), 2);
        assert_eq!(
            table.value_counts(Column::Candidatura),
            vec![
                ("Presidente".to_string(), 2),
                ("1er Vicepresidente".to_string(), 1)
            ]
        );
    }
}
