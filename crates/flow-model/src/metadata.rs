//! Per-column metadata supplied by the schema catalog.
//!
//! One [`MetadataRow`] describes one (file, column) pair. Flags are two-valued
//! after normalization; a flag whose column is absent from the source table
//! is stored as `None` and never matches a filter.

use serde::{Deserialize, Serialize};

/// Normalized YES/NO metadata flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Flag {
    Yes,
    No,
}

impl Flag {
    pub fn is_yes(self) -> bool {
        matches!(self, Flag::Yes)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Flag::Yes => "YES",
            Flag::No => "NO",
        }
    }
}

/// The five metadata flag columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    Mandatory,
    Unique,
    Sensitive,
    Encrypted,
    Currency,
}

impl FlagKind {
    pub const ALL: [FlagKind; 5] = [
        FlagKind::Mandatory,
        FlagKind::Unique,
        FlagKind::Sensitive,
        FlagKind::Encrypted,
        FlagKind::Currency,
    ];

    /// Header of this flag in the metadata table.
    pub fn header(self) -> &'static str {
        match self {
            FlagKind::Mandatory => "Is Mandatory",
            FlagKind::Unique => "Is Unique",
            FlagKind::Sensitive => "Sensitive",
            FlagKind::Encrypted => "Encrypted",
            FlagKind::Currency => "Currency",
        }
    }
}

/// Metadata for a single column of a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRow {
    /// File stem the row belongs to (`File Name`).
    pub file_name: String,
    /// Column header the row describes (`Column Name`), whitespace-normalized.
    pub column_name: String,
    pub mandatory: Option<Flag>,
    pub unique: Option<Flag>,
    pub sensitive: Option<Flag>,
    pub encrypted: Option<Flag>,
    pub currency: Option<Flag>,
}

impl MetadataRow {
    pub fn new(file_name: impl Into<String>, column_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            column_name: column_name.into(),
            mandatory: None,
            unique: None,
            sensitive: None,
            encrypted: None,
            currency: None,
        }
    }

    /// Builder-style flag setter.
    #[must_use]
    pub fn with_flag(mut self, kind: FlagKind, flag: Flag) -> Self {
        self.set_flag(kind, Some(flag));
        self
    }

    pub fn set_flag(&mut self, kind: FlagKind, flag: Option<Flag>) {
        match kind {
            FlagKind::Mandatory => self.mandatory = flag,
            FlagKind::Unique => self.unique = flag,
            FlagKind::Sensitive => self.sensitive = flag,
            FlagKind::Encrypted => self.encrypted = flag,
            FlagKind::Currency => self.currency = flag,
        }
    }

    pub fn flag(&self, kind: FlagKind) -> Option<Flag> {
        match kind {
            FlagKind::Mandatory => self.mandatory,
            FlagKind::Unique => self.unique,
            FlagKind::Sensitive => self.sensitive,
            FlagKind::Encrypted => self.encrypted,
            FlagKind::Currency => self.currency,
        }
    }

    /// True only when the flag is present and set to YES.
    pub fn is_flagged(&self, kind: FlagKind) -> bool {
        self.flag(kind).is_some_and(Flag::is_yes)
    }
}

/// The full normalized metadata table, read-only for the duration of a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataTable {
    rows: Vec<MetadataRow>,
    flags: Vec<FlagKind>,
}

impl MetadataTable {
    /// Creates a table from rows; `flags` lists the flag columns the source carried.
    pub fn new(rows: Vec<MetadataRow>, flags: Vec<FlagKind>) -> Self {
        Self { rows, flags }
    }

    pub fn rows(&self) -> &[MetadataRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the source metadata had a column for `kind`.
    pub fn has_flag(&self, kind: FlagKind) -> bool {
        self.flags.contains(&kind)
    }

    /// Distinct file names in first-seen order.
    pub fn file_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for row in &self.rows {
            let name = row.file_name.as_str();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Rows whose `File Name` matches `file_stem`, trimmed and case-insensitive.
    pub fn rows_for_file(&self, file_stem: &str) -> Vec<&MetadataRow> {
        let wanted = file_stem.to_lowercase();
        self.rows
            .iter()
            .filter(|row| row.file_name.trim().to_lowercase() == wanted)
            .collect()
    }
}
