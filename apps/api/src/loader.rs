//! Document Loader — reads a file from disk and returns its plain text.
//!
//! Supported: `.pdf` (pdf-extract), `.docx` (docx-rs), `.txt` / `.md`.
//! Loading is blocking IO plus parsing; async callers go through `spawn_blocking`.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported format '{extension}' for {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("no text could be extracted from {}", path.display())]
    Empty { path: PathBuf },

    #[error("document loading task failed: {0}")]
    Task(String),
}

/// `load(path) -> Text`. Implementations must be cheap to share across tasks.
pub trait DocumentLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<String, LoadError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" | "md" => Ok(DocumentFormat::PlainText),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Loads documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl DocumentLoader for FileLoader {
    fn load(&self, path: &Path) -> Result<String, LoadError> {
        let format = DocumentFormat::from_path(path)?;

        let text = match format {
            DocumentFormat::Pdf => pdf_extract::extract_text(path).map_err(|e| LoadError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            DocumentFormat::Docx => {
                let bytes = read_bytes(path)?;
                docx_text(&bytes).map_err(|message| LoadError::Parse {
                    path: path.to_path_buf(),
                    message,
                })?
            }
            DocumentFormat::PlainText => {
                std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                })?
            }
        };

        if text.trim().is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!("Loaded {} chars from {}", text.len(), path.display());
        Ok(text)
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, LoadError> {
    std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Collects the text of every paragraph, one line per paragraph. Paragraphs inside
/// table cells (nested tables included) and runs inside hyperlinks are kept.
fn docx_text(bytes: &[u8]) -> Result<String, String> {
    use docx_rs::DocumentChild;

    let docx = docx_rs::read_docx(bytes).map_err(|e| e.to_string())?;

    let mut text = String::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => push_paragraph(&paragraph.children, &mut text),
            DocumentChild::Table(table) => push_table(table, &mut text),
            _ => {}
        }
    }
    Ok(text)
}

fn push_paragraph(children: &[docx_rs::ParagraphChild], text: &mut String) {
    push_runs(children, text);
    text.push('\n');
}

fn push_runs(children: &[docx_rs::ParagraphChild], text: &mut String) {
    use docx_rs::{ParagraphChild, RunChild};

    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    if let RunChild::Text(t) = run_child {
                        text.push_str(&t.text);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_runs(&link.children, text),
            _ => {}
        }
    }
}

fn push_table(table: &docx_rs::Table, text: &mut String) {
    use docx_rs::{TableCellContent, TableChild, TableRowChild};

    for TableChild::TableRow(row) in &table.rows {
        for TableRowChild::TableCell(cell) in &row.cells {
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => {
                        push_paragraph(&paragraph.children, text)
                    }
                    TableCellContent::Table(nested) => push_table(nested, text),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_load_plain_text() {
        let file = temp_file(".txt", b"A. Dahari\nML Engineer");
        let text = FileLoader.load(file.path()).unwrap();
        assert_eq!(text, "A. Dahari\nML Engineer");
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let file = temp_file(".MD", b"# Acme AI");
        assert!(FileLoader.load(file.path()).is_ok());
    }

    #[test]
    fn test_unknown_extension_is_unsupported_format() {
        let file = temp_file(".odt", b"whatever");
        let err = FileLoader.load(file.path()).unwrap_err();
        match err {
            LoadError::UnsupportedFormat { extension, .. } => assert_eq!(extension, "odt"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_extension_is_unsupported_format() {
        let err = FileLoader.load(Path::new("/tmp/no_extension")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FileLoader
            .load(Path::new("/definitely/not/here/resume.txt"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_whitespace_only_file_is_empty() {
        let file = temp_file(".txt", b"  \n\t\n");
        let err = FileLoader.load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    fn docx_bytes(docx: docx_rs::Docx) -> Vec<u8> {
        let mut cursor = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_docx_keeps_hyperlink_and_table_text() {
        use docx_rs::{
            Docx, Hyperlink, HyperlinkType, Paragraph, Run, Table, TableCell, TableRow,
        };

        let docx = Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("A. Dahari")))
            .add_paragraph(Paragraph::new().add_hyperlink(
                Hyperlink::new("contact", HyperlinkType::Anchor)
                    .add_run(Run::new().add_text("dahari@example.com")),
            ))
            .add_table(Table::new(vec![TableRow::new(vec![TableCell::new()
                .add_paragraph(
                    Paragraph::new().add_run(Run::new().add_text("Skills: Python, PyTorch")),
                )])]));
        let file = temp_file(".docx", &docx_bytes(docx));

        let text = FileLoader.load(file.path()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.contains(&"A. Dahari"), "{text:?}");
        assert!(lines.contains(&"dahari@example.com"), "{text:?}");
        assert!(lines.contains(&"Skills: Python, PyTorch"), "{text:?}");
    }

    #[test]
    fn test_docx_with_only_a_table_is_not_empty() {
        use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

        let docx = Docx::new().add_table(Table::new(vec![TableRow::new(vec![
            TableCell::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Education"))),
            TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("MCS"))),
        ])]));
        let file = temp_file(".docx", &docx_bytes(docx));

        let text = FileLoader.load(file.path()).unwrap();

        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["Education", "MCS"]);
    }

    #[test]
    fn test_corrupt_docx_is_parse_error() {
        let file = temp_file(".docx", b"not a zip archive");
        let err = FileLoader.load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
