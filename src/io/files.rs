use std::fs;
use std::path::{Path, PathBuf};

use crate::model::SourceFile;

/// The upload collaborator: hands back the files the user picked
pub trait FileSource {
    /// Zero or more chosen files whose extension is in `accept`
    fn choose(&self, accept: &[String]) -> Vec<SourceFile>;
}

/// Whether `name` has one of the `accept` extensions (case-insensitive)
pub fn accepts(name: &str, accept: &[String]) -> bool {
    let ext = match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some(ext) => ext,
        None => return false,
    };
    accept.iter().any(|a| a.eq_ignore_ascii_case(ext))
}

/// Picks files by path, reading name and size from filesystem metadata.
/// Missing paths, directories and unaccepted extensions are skipped.
#[derive(Debug, Clone, Default)]
pub struct PathFileSource {
    pub paths: Vec<PathBuf>,
}

impl PathFileSource {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        PathFileSource {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a prompt line into paths (whitespace-separated)
    pub fn from_input(input: &str) -> Self {
        PathFileSource::new(input.split_whitespace())
    }
}

impl FileSource for PathFileSource {
    fn choose(&self, accept: &[String]) -> Vec<SourceFile> {
        let mut files = Vec::new();
        for path in &self.paths {
            let meta = match fs::metadata(path) {
                Ok(m) if m.is_file() => m,
                Ok(_) => {
                    log::debug!("files: skipping non-file {}", path.display());
                    continue;
                }
                Err(e) => {
                    log::debug!("files: skipping {}: {}", path.display(), e);
                    continue;
                }
            };
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(n) => n.to_string(),
                None => continue,
            };
            if !accepts(&name, accept) {
                log::debug!("files: extension not accepted: {}", name);
                continue;
            }
            files.push(SourceFile::new(name, meta.len()));
        }
        files
    }
}

/// A fixed list of files, used by the CLI and in tests
#[derive(Debug, Clone, Default)]
pub struct ListedFiles(pub Vec<SourceFile>);

impl FileSource for ListedFiles {
    fn choose(&self, accept: &[String]) -> Vec<SourceFile> {
        self.0
            .iter()
            .filter(|f| accepts(&f.name, accept))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UploadConfig;
    use tempfile::TempDir;

    fn accept() -> Vec<String> {
        UploadConfig::default().accept
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(accepts("scan.PDF", &accept()));
        assert!(accepts("photo.Tiff", &accept()));
        assert!(!accepts("notes.txt", &accept()));
        assert!(!accepts("noext", &accept()));
    }

    #[test]
    fn path_source_reads_sizes_and_filters() {
        let tmp = TempDir::new().unwrap();
        let pdf = tmp.path().join("Invoice_Jan.pdf");
        let txt = tmp.path().join("notes.txt");
        fs::write(&pdf, vec![0u8; 20480]).unwrap();
        fs::write(&txt, "hello").unwrap();
        let missing = tmp.path().join("missing.pdf");

        let source = PathFileSource::new([pdf, txt, missing, tmp.path().to_path_buf()]);
        let files = source.choose(&accept());
        assert_eq!(files, vec![SourceFile::new("Invoice_Jan.pdf", 20480)]);
    }

    #[test]
    fn from_input_splits_on_whitespace() {
        let source = PathFileSource::from_input("  a.pdf   b.png ");
        assert_eq!(
            source.paths,
            vec![PathBuf::from("a.pdf"), PathBuf::from("b.png")]
        );
    }

    #[test]
    fn listed_files_respect_accept() {
        let source = ListedFiles(vec![
            SourceFile::new("a.pdf", 1),
            SourceFile::new("b.exe", 1),
        ]);
        assert_eq!(source.choose(&accept()), vec![SourceFile::new("a.pdf", 1)]);
    }
}
