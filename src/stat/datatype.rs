use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display name of an account. Carries no identity beyond the label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account(pub String);

impl Account {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FileType {
    #[default]
    #[serde(rename = "PDF")]
    Pdf,
    Excel,
}

impl FileType {
    pub const ALL: [FileType; 2] = [FileType::Pdf, FileType::Excel];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "PDF",
            FileType::Excel => "Excel",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Start and end are independent; nothing checks that start <= end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Amount")]
    pub amount: i64,
}

impl TransactionRow {
    /// Column names in display order.
    pub const COLUMNS: [&'static str; 3] = ["Date", "Description", "Amount"];

    pub fn new(date: impl Into<String>, description: impl Into<String>, amount: i64) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount,
        }
    }

    pub fn columns() -> Vec<Column> {
        Self::COLUMNS.iter().map(|name| Column::new(*name)).collect()
    }

    pub fn cell(&self, column_id: &str) -> Option<String> {
        match column_id {
            "Date" => Some(self.date.clone()),
            "Description" => Some(self.description.clone()),
            "Amount" => Some(self.amount.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub id: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_type_defaults_to_pdf() {
        assert_eq!(FileType::default(), FileType::Pdf);
        assert_eq!(FileType::default().to_string(), "PDF");
    }

    #[test]
    fn file_type_serializes_as_display_label() {
        let json = serde_json::to_string(&FileType::ALL).unwrap();
        assert_eq!(json, r#"["PDF","Excel"]"#);
    }

    #[test]
    fn row_serializes_with_column_names() {
        let row = TransactionRow::new("2023-09-02", "Transaction 2", -50);
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"Date": "2023-09-02", "Description": "Transaction 2", "Amount": -50})
        );
    }

    #[test]
    fn cells_follow_column_ids() {
        let row = TransactionRow::new("2023-09-01", "Transaction 1", 100);
        let cells: Vec<_> = TransactionRow::columns()
            .iter()
            .map(|c| row.cell(&c.id))
            .collect();
        assert_eq!(
            cells,
            vec![
                Some("2023-09-01".to_string()),
                Some("Transaction 1".to_string()),
                Some("100".to_string()),
            ]
        );
        assert_eq!(row.cell("Balance"), None);
    }

    #[test]
    fn date_range_allows_both_ends_unset() {
        let range = DateRange::default();
        assert!(range.start.is_none() && range.end.is_none());
    }
}
