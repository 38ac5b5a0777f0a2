use chrono::{DateTime, Utc};

use crate::model::{
    DocumentDraft, DraftField, Instance, SourceFile, format_file_size, title_from_file_name,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("no files selected")]
    EmptySelection,
}

/// The in-progress draft and the files it was started from
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    draft: DocumentDraft,
    files: Vec<SourceFile>,
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline::default()
    }

    pub fn draft(&self) -> &DocumentDraft {
        &self.draft
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Populate the draft from the first of `files`. The category comes from
    /// the selected department.
    pub fn start_upload(
        &mut self,
        files: Vec<SourceFile>,
        department: Option<&str>,
    ) -> Result<(), PipelineError> {
        let first = files.first().ok_or(PipelineError::EmptySelection)?;
        self.draft.file_name = first.name.clone();
        self.draft.file_size = format_file_size(first.size);
        self.draft.title = title_from_file_name(&first.name).to_string();
        self.draft.category = department.unwrap_or_default().to_string();
        log::debug!(
            "pipeline: {} file(s), first {:?} ({})",
            files.len(),
            first.name,
            self.draft.file_size
        );
        self.files = files;
        Ok(())
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set_field(field, value.into());
    }

    /// Append a trimmed tag. Empty and duplicate tags are ignored.
    /// Returns whether the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.draft.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.draft.tags.push(tag.to_string());
        true
    }

    /// Returns whether the tag was present
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.draft.tags.len();
        self.draft.tags.retain(|t| t != tag);
        self.draft.tags.len() != before
    }

    /// Freeze the draft into an instance and start over with an empty draft
    pub fn commit(&mut self, seq: u32, now: DateTime<Utc>) -> Instance {
        let document = std::mem::take(&mut self.draft);
        self.files.clear();
        Instance::new(seq, now, document)
    }

    pub fn reset(&mut self) {
        self.draft = DocumentDraft::default();
        self.files.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn upload_then_commit_without_edits() {
        let mut pipeline = Pipeline::new();
        pipeline
            .start_upload(vec![SourceFile::new("Invoice_Jan.pdf", 20480)], Some("HR"))
            .unwrap();
        let instance = pipeline.commit(1, Utc::now());

        let doc = instance.document();
        assert_eq!(doc.title, "Invoice_Jan");
        assert_eq!(doc.file_name, "Invoice_Jan.pdf");
        assert_eq!(doc.file_size, "20 KB");
        assert_eq!(doc.category, "HR");
        assert!(pipeline.draft().is_empty());
        assert!(pipeline.files().is_empty());
    }

    #[test]
    fn empty_upload_is_rejected() {
        let mut pipeline = Pipeline::new();
        pipeline.update_field(DraftField::Title, "kept");
        assert_eq!(
            pipeline.start_upload(vec![], Some("HR")),
            Err(PipelineError::EmptySelection)
        );
        assert_eq!(pipeline.draft().title, "kept");
    }

    #[test]
    fn first_file_wins() {
        let mut pipeline = Pipeline::new();
        pipeline
            .start_upload(
                vec![
                    SourceFile::new("a.png", 2048),
                    SourceFile::new("b.pdf", 999_999),
                ],
                None,
            )
            .unwrap();
        assert_eq!(pipeline.draft().title, "a");
        assert_eq!(pipeline.draft().file_size, "2 KB");
        assert_eq!(pipeline.draft().category, "");
        assert_eq!(pipeline.files().len(), 2);
    }

    #[test]
    fn tag_add_remove_restores_sequence() {
        let mut pipeline = Pipeline::new();
        pipeline.add_tag("budget");
        pipeline.add_tag("2024");
        let before = pipeline.draft().tags.clone();

        assert!(pipeline.add_tag("Q3"));
        assert!(pipeline.remove_tag("Q3"));
        assert_eq!(pipeline.draft().tags, before);
    }

    #[test]
    fn tags_are_trimmed_and_unique() {
        let mut pipeline = Pipeline::new();
        assert!(pipeline.add_tag("  Q3 "));
        assert!(!pipeline.add_tag("Q3"));
        assert!(!pipeline.add_tag("   "));
        assert!(pipeline.add_tag("budget"));
        assert_eq!(pipeline.draft().tags, vec!["Q3", "budget"]);
        assert!(!pipeline.remove_tag("missing"));
    }

    #[test]
    fn remove_keeps_order_of_rest() {
        let mut pipeline = Pipeline::new();
        for tag in ["a", "b", "c", "d"] {
            pipeline.add_tag(tag);
        }
        pipeline.remove_tag("b");
        assert_eq!(pipeline.draft().tags, vec!["a", "c", "d"]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut pipeline = Pipeline::new();
        pipeline
            .start_upload(vec![SourceFile::new("x.pdf", 1024)], Some("Legal"))
            .unwrap();
        pipeline.add_tag("urgent");
        pipeline.reset();
        assert!(pipeline.draft().is_empty());
        assert!(pipeline.files().is_empty());
    }
}
