//! Helpers for the validation results table returned by the server.
//!
//! The table is sorted on the first column by default. Column 1 holds star
//! ratings whose sort value lives in the cell's `data-score` attribute
//! rather than its text. Columns with a blank header carry no data for the
//! current input type and are hidden, except chart columns.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const STAR_SCORE_COLUMN: usize = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    /// Chart columns are never hidden, even with a blank header
    #[serde(default)]
    pub chart: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    #[default]
    Plain,
    Success,
    Danger,
    PlotButton,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell {
    pub text: String,
    pub title: Option<String>,
    /// `data-score` attribute
    pub score: Option<f64>,
    pub status: CellStatus,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn scored(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score: Some(score),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: CellStatus, title: Option<&str>) -> Self {
        self.status = status;
        self.title = title.map(str::to_string);
        self
    }

    /// Key of the plot a click on this cell should show.
    ///
    /// Validation result cells map to their title with spaces and slashes
    /// removed; the plot button shows every plot.
    pub fn plot_key(&self) -> Option<String> {
        match self.status {
            CellStatus::Success | CellStatus::Danger => self
                .title
                .as_ref()
                .map(|t| t.chars().filter(|c| *c != ' ' && *c != '/').collect()),
            CellStatus::PlotButton => Some("all".to_string()),
            CellStatus::Plain => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
}

impl SortKey<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl ResultsTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn sort_key(row: &[Cell], column: usize) -> SortKey<'_> {
        let Some(cell) = row.get(column) else {
            return SortKey::Text("");
        };
        let text = cell.text.trim();

        if column == STAR_SCORE_COLUMN {
            if let Some(score) = cell.score {
                return SortKey::Number(score);
            }
        }
        match text.parse::<f64>() {
            Ok(n) if !n.is_nan() => SortKey::Number(n),
            _ => SortKey::Text(text),
        }
    }

    /// Stable sort of the rows on one column.
    pub fn sort_by(&mut self, column: usize, order: SortOrder) {
        self.rows.sort_by(|a, b| {
            let ord = Self::sort_key(a, column).compare(&Self::sort_key(b, column));
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
    }

    /// Initial ordering of a freshly rendered table
    pub fn sort_default(&mut self) {
        self.sort_by(0, SortOrder::Ascending);
    }

    /// Columns to hide: blank header text and not a chart column.
    pub fn empty_columns(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.chart && c.title.trim().is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn visible_columns(&self) -> Vec<usize> {
        let hidden = self.empty_columns();
        (0..self.columns.len()).filter(|i| !hidden.contains(i)).collect()
    }

    /// Copy of the table with the empty columns dropped from header and rows.
    pub fn without_empty_columns(&self) -> ResultsTable {
        let visible = self.visible_columns();
        ResultsTable {
            columns: visible.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| visible.iter().filter_map(|&i| row.get(i).cloned()).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(title: &str) -> Column {
        Column {
            title: title.to_string(),
            chart: false,
        }
    }

    fn sample_table() -> ResultsTable {
        let mut table = ResultsTable::new(vec![
            column("No"),
            column("Score"),
            column("Description"),
            column(" "),
            Column {
                title: String::new(),
                chart: true,
            },
        ]);
        table.push_row(vec![
            Cell::text("2"),
            Cell::scored("★★★", 60.0),
            Cell::text("beta"),
            Cell::text(""),
            Cell::default().with_status(CellStatus::PlotButton, None),
        ]);
        table.push_row(vec![
            Cell::text("10"),
            Cell::scored("★★★★★", 90.0),
            Cell::text("Alpha"),
            Cell::text(""),
            Cell::default(),
        ]);
        table.push_row(vec![
            Cell::text("1"),
            Cell::scored("★", 15.0),
            Cell::text("gamma"),
            Cell::text(""),
            Cell::default(),
        ]);
        table
    }

    fn column_text(table: &ResultsTable, column: usize) -> Vec<String> {
        table.rows.iter().map(|r| r[column].text.clone()).collect()
    }

    #[test]
    fn test_default_sort_is_numeric_on_first_column() {
        let mut table = sample_table();
        table.sort_default();
        assert_eq!(column_text(&table, 0), vec!["1", "2", "10"]);
    }

    #[test]
    fn test_star_column_sorts_on_score() {
        let mut table = sample_table();
        table.sort_by(STAR_SCORE_COLUMN, SortOrder::Descending);
        let scores: Vec<f64> = table.rows.iter().map(|r| r[1].score.unwrap()).collect();
        assert_eq!(scores, vec![90.0, 60.0, 15.0]);
    }

    #[test]
    fn test_nan_score_sorts_without_panicking() {
        let mut table = ResultsTable::new(vec![column("No"), column("Score")]);
        for (i, score) in [f64::NAN, 40.0, f64::NAN, 10.0, 70.0, f64::NAN, 25.0]
            .into_iter()
            .enumerate()
        {
            table.push_row(vec![Cell::text(i.to_string()), Cell::scored("★", score)]);
        }

        table.sort_by(STAR_SCORE_COLUMN, SortOrder::Ascending);
        let scores: Vec<f64> = table.rows.iter().map(|r| r[1].score.unwrap()).collect();
        assert_eq!(&scores[..4], &[10.0, 25.0, 40.0, 70.0]);
        assert!(scores[4..].iter().all(|s| s.is_nan()));
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let mut table = sample_table();
        table.sort_by(2, SortOrder::Ascending);
        assert_eq!(column_text(&table, 2), vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_empty_columns_skip_charts() {
        let table = sample_table();
        assert_eq!(table.empty_columns(), vec![3]);
        assert_eq!(table.visible_columns(), vec![0, 1, 2, 4]);

        let trimmed = table.without_empty_columns();
        assert_eq!(trimmed.columns.len(), 4);
        assert!(trimmed.rows.iter().all(|r| r.len() == 4));
    }

    #[test]
    fn test_plot_keys() {
        let cell = Cell::text("").with_status(CellStatus::Success, Some("Length Cluster"));
        assert_eq!(cell.plot_key().as_deref(), Some("LengthCluster"));

        let cell = Cell::text("").with_status(CellStatus::Danger, Some("Gene Merge / Dup"));
        assert_eq!(cell.plot_key().as_deref(), Some("GeneMergeDup"));

        let cell = Cell::default().with_status(CellStatus::PlotButton, None);
        assert_eq!(cell.plot_key().as_deref(), Some("all"));

        assert_eq!(Cell::text("x").plot_key(), None);
    }
}
