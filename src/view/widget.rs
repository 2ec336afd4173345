//! Declarative widget tree for the dashboard page.
//!
//! A `Widget` is plain data: it can be compared, serialized to JSON for the
//! layout endpoint, and rendered to HTML by [`super::render`].

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::stat::{Column, FileType, TransactionRow};

/// Inline CSS declarations, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style(Vec<(&'static str, &'static str)>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(key, _)| *key == property)
            .map(|(_, value)| *value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{key}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<const N: usize> From<[(&'static str, &'static str); N]> for Style {
    fn from(pairs: [(&'static str, &'static str); N]) -> Self {
        Self(pairs.to_vec())
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    Container {
        children: Vec<Widget>,
    },
    Row {
        class: String,
        children: Vec<Widget>,
    },
    /// Grid column spanning `width` of 12 units.
    Col {
        width: u8,
        children: Vec<Widget>,
    },
    Card {
        style: Style,
        children: Vec<Widget>,
    },
    Title {
        text: String,
        style: Style,
    },
    Label {
        text: String,
        for_id: Option<String>,
        class: String,
        style: Style,
    },
    Dropdown {
        id: String,
        options: Vec<String>,
        value: Option<String>,
        style: Style,
    },
    DatePicker {
        id: String,
        placeholder: String,
        date: Option<NaiveDate>,
        style: Style,
    },
    RadioItems {
        id: String,
        options: Vec<FileType>,
        value: FileType,
        inline: bool,
        style: Style,
    },
    /// Plain button. Has no action attached.
    Button {
        id: String,
        label: String,
        color: String,
        style: Style,
    },
    DataTable {
        id: String,
        columns: Vec<Column>,
        rows: Vec<TransactionRow>,
        header_style: Style,
        cell_style: Style,
    },
}

impl Widget {
    pub fn children(&self) -> &[Widget] {
        match self {
            Widget::Container { children }
            | Widget::Row { children, .. }
            | Widget::Col { children, .. }
            | Widget::Card { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Widget::Dropdown { id, .. }
            | Widget::DatePicker { id, .. }
            | Widget::RadioItems { id, .. }
            | Widget::Button { id, .. }
            | Widget::DataTable { id, .. } => Some(id.as_str()),
            _ => None,
        }
    }

    /// Depth-first, pre-order search by widget id.
    pub fn find(&self, id: &str) -> Option<&Widget> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    /// All widgets in pre-order, including `self`.
    pub fn walk(&self) -> Vec<&Widget> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.walk());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(id: &str) -> Widget {
        Widget::Button {
            id: id.to_string(),
            label: "Go".to_string(),
            color: "dark".to_string(),
            style: Style::new(),
        }
    }

    #[test]
    fn style_renders_in_insertion_order() {
        let style = Style::from([("padding", "10px"), ("color", "#000")]);
        assert_eq!(style.to_css(), "padding: 10px; color: #000;");
        assert_eq!(style.get("color"), Some("#000"));
        assert_eq!(style.get("border"), None);
    }

    #[test]
    fn find_descends_into_nested_children() {
        let tree = Widget::Container {
            children: vec![Widget::Col {
                width: 4,
                children: vec![button("a"), button("b")],
            }],
        };
        assert_eq!(tree.find("b"), Some(&button("b")));
        assert_eq!(tree.find("c"), None);
        assert_eq!(tree.walk().len(), 4);
    }

    #[test]
    fn serializes_with_type_tag() {
        let value = serde_json::to_value(button("x")).unwrap();
        assert_eq!(value["type"], "button");
        assert_eq!(value["id"], "x");
        assert_eq!(value["style"], serde_json::json!({}));
    }
}
