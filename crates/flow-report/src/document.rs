//! Renderer-independent report structure.
//!
//! A [`Document`] holds every string that ends up in the report, already
//! formatted. Renderers only decide markup.

use serde::Serialize;

/// A complete report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    pub sections: Vec<Section>,
}

/// Visual role of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStyle {
    /// File summary at the top.
    Header,
    /// Per-check results.
    Check,
    /// Score and numeric analysis panels.
    Analysis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub style: SectionStyle,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(style: SectionStyle, title: impl Into<String>) -> Self {
        Self {
            style,
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn with(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStyle {
    Data,
    Score,
}

/// One labelled value in a facts table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
    /// Value is a comma-joined column list.
    pub list: bool,
}

impl Fact {
    pub fn value(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            list: false,
        }
    }

    /// Joins `items` with `, `, or `None` when empty.
    pub fn list(label: impl Into<String>, items: &[String]) -> Self {
        Self {
            label: label.into(),
            value: if items.is_empty() {
                "None".to_string()
            } else {
                items.join(", ")
            },
            list: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        text: String,
    },
    Heading {
        text: String,
    },
    /// Headline number.
    Score {
        text: String,
    },
    Facts {
        rows: Vec<Fact>,
    },
    Table {
        style: TableStyle,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    List {
        items: Vec<String>,
    },
    /// Shown in place of an empty table or list.
    Placeholder {
        text: String,
    },
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    pub fn placeholder(text: impl Into<String>) -> Self {
        Block::Placeholder { text: text.into() }
    }

    /// A data table, or `placeholder` when there are no rows.
    pub fn table_or(headers: &[&str], rows: Vec<Vec<String>>, placeholder: &str) -> Self {
        if rows.is_empty() {
            return Block::placeholder(placeholder);
        }
        Block::Table {
            style: TableStyle::Data,
            headers: headers.iter().copied().map(String::from).collect(),
            rows,
        }
    }

    /// A bullet list, or `placeholder` when empty.
    pub fn list_or(items: &[String], placeholder: &str) -> Self {
        if items.is_empty() {
            Block::placeholder(placeholder)
        } else {
            Block::List {
                items: items.to_vec(),
            }
        }
    }
}
