use crate::stat::{FileType, TransactionRow};

use super::model::DashboardModel;
use super::widget::{Style, Widget};

pub const ACCOUNT_DROPDOWN_ID: &str = "account-dropdown";
pub const START_DATE_ID: &str = "start-date-picker";
pub const END_DATE_ID: &str = "end-date-picker";
pub const FILE_TYPE_ID: &str = "file-type-radio";
pub const DOWNLOAD_BUTTON_ID: &str = "download-btn";
pub const TRANSACTION_TABLE_ID: &str = "transaction-table";

fn card_style(min_width: bool) -> Style {
    if min_width {
        Style::from([
            ("width", "100%"),
            ("border-radius", "10px"),
            ("padding", "15px"),
            ("border", "1px solid #000"),
            ("min-width", "300px"),
        ])
    } else {
        Style::from([
            ("width", "100%"),
            ("border-radius", "10px"),
            ("padding", "15px"),
            ("border", "1px solid #000"),
        ])
    }
}

fn title(text: &str) -> Widget {
    Widget::Title {
        text: text.to_string(),
        style: Style::from([
            ("font-weight", "bold"),
            ("font-size", "24px"),
            ("color", "#000"),
        ]),
    }
}

fn label(text: &str, for_id: &str, class: &str) -> Widget {
    Widget::Label {
        text: text.to_string(),
        for_id: Some(for_id.to_string()),
        class: class.to_string(),
        style: Style::from([("font-size", "16px"), ("color", "#000")]),
    }
}

fn date_picker(id: &str, placeholder: &str, date: Option<chrono::NaiveDate>) -> Widget {
    Widget::DatePicker {
        id: id.to_string(),
        placeholder: placeholder.to_string(),
        date,
        style: Style::from([
            ("width", "50%"),
            ("min-width", "300px"),
            ("font-size", "12px"),
            ("padding", "10px"),
            ("border-radius", "5px"),
            ("border", "1px solid #ccc"),
            ("box-sizing", "border-box"),
        ]),
    }
}

fn configuration_pane(model: &DashboardModel) -> Widget {
    let selections = &model.selections;
    Widget::Card {
        style: card_style(true),
        children: vec![
            title("Download Statement"),
            label("Select Account", ACCOUNT_DROPDOWN_ID, "mt-2"),
            Widget::Dropdown {
                id: ACCOUNT_DROPDOWN_ID.to_string(),
                options: model.accounts.iter().map(|a| a.0.clone()).collect(),
                value: selections.account.as_ref().map(|a| a.0.clone()),
                style: Style::from([("font-size", "14px")]),
            },
            label("Start Date", START_DATE_ID, ""),
            date_picker(START_DATE_ID, "Start date", selections.dates.start),
            label("End Date", END_DATE_ID, ""),
            date_picker(END_DATE_ID, "End date", selections.dates.end),
            label("File Type", FILE_TYPE_ID, ""),
            Widget::RadioItems {
                id: FILE_TYPE_ID.to_string(),
                options: FileType::ALL.to_vec(),
                value: selections.file_type,
                inline: true,
                style: Style::from([("font-size", "14px")]),
            },
            Widget::Button {
                id: DOWNLOAD_BUTTON_ID.to_string(),
                label: "Download".to_string(),
                color: "dark".to_string(),
                style: Style::from([
                    ("font-size", "16px"),
                    ("padding", "10px"),
                    ("box-shadow", "0 4px 6px rgba(0,0,0,0.1)"),
                    ("border-radius", "5px"),
                ]),
            },
        ],
    }
}

fn transactions_pane(model: &DashboardModel) -> Widget {
    Widget::Card {
        style: card_style(false),
        children: vec![
            title("Transactions"),
            Widget::DataTable {
                id: TRANSACTION_TABLE_ID.to_string(),
                columns: TransactionRow::columns(),
                rows: model.rows.clone(),
                header_style: Style::from([
                    ("background-color", "black"),
                    ("color", "white"),
                    ("font-weight", "bold"),
                ]),
                cell_style: Style::from([
                    ("text-align", "left"),
                    ("padding", "10px"),
                    ("border", "1px solid #ddd"),
                    ("font-size", "14px"),
                    ("color", "#000"),
                ]),
            },
        ],
    }
}

/// Builds the two-pane dashboard. Pure: equal models give equal trees.
pub fn build_layout(model: &DashboardModel) -> Widget {
    Widget::Container {
        children: vec![Widget::Row {
            class: "mt-4".to_string(),
            children: vec![
                Widget::Col {
                    width: 4,
                    children: vec![configuration_pane(model)],
                },
                Widget::Col {
                    width: 8,
                    children: vec![transactions_pane(model)],
                },
            ],
        }],
    }
}
