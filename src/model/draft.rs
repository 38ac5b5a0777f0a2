use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata of the document being uploaded, indexed and reviewed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDraft {
    pub title: String,
    pub category: String,
    pub document_type: String,
    pub date: String,
    /// Ordered, duplicate-free
    pub tags: Vec<String>,
    pub description: String,
    pub file_name: String,
    pub file_size: String,
}

impl DocumentDraft {
    pub fn is_empty(&self) -> bool {
        *self == DocumentDraft::default()
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Category => &self.category,
            DraftField::DocumentType => &self.document_type,
            DraftField::Date => &self.date,
            DraftField::Description => &self.description,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Category => self.category = value,
            DraftField::DocumentType => self.document_type = value,
            DraftField::Date => self.date = value,
            DraftField::Description => self.description = value,
        }
    }
}

/// Editable free-text attributes of a draft (tags have their own operations)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Category,
    DocumentType,
    Date,
    Description,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::Title,
        DraftField::Category,
        DraftField::DocumentType,
        DraftField::Date,
        DraftField::Description,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Category => "category",
            DraftField::DocumentType => "type",
            DraftField::Date => "date",
            DraftField::Description => "description",
        }
    }

    pub fn from_key(key: &str) -> Option<DraftField> {
        DraftField::ALL.iter().copied().find(|f| f.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::Category => "Category",
            DraftField::DocumentType => "Document Type",
            DraftField::Date => "Date",
            DraftField::Description => "Description",
        }
    }

    /// Conventionally filled in before review
    pub fn is_required(self) -> bool {
        matches!(
            self,
            DraftField::Title | DraftField::Category | DraftField::Date
        )
    }
}

/// A file handed to the pipeline by the upload or scan collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        SourceFile {
            name: name.into(),
            size,
        }
    }
}

/// A committed, immutable document record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instance {
    id: String,
    created: DateTime<Utc>,
    document: DocumentDraft,
}

impl Instance {
    pub fn new(seq: u32, created: DateTime<Utc>, document: DocumentDraft) -> Self {
        Instance {
            id: format!("DOC-{:06}", seq),
            created,
            document,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn document(&self) -> &DocumentDraft {
        &self.document
    }
}

/// Byte count as whole kilobytes, e.g. `20480` → `"20 KB"`
pub fn format_file_size(bytes: u64) -> String {
    format!("{} KB", (bytes as f64 / 1024.0).round() as u64)
}

/// File name without its final extension: `Invoice_Jan.pdf` → `Invoice_Jan`
pub fn title_from_file_name(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() && !ext.contains('/') => stem,
        _ => name,
    }
}
