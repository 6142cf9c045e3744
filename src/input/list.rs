//! Newline-delimited URL list reader.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};

use crate::input::Target;

/// Errors raised while reading a target list.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {} after line {line}: {source}", .path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// An open list file yielding targets in file order.
#[derive(Debug)]
pub struct TargetList {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl TargetList {
    pub async fn open(path: &Path) -> Result<Self, InputError> {
        let file = File::open(path).await.map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Target list opened");

        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }

    /// Next non-blank line as a target, or `None` at end of file.
    pub async fn next_target(&mut self) -> Result<Option<Target>, InputError> {
        loop {
            let line = self
                .lines
                .next_line()
                .await
                .map_err(|source| InputError::Read {
                    path: self.path.clone(),
                    line: self.line_no,
                    source,
                })?;

            let Some(line) = line else {
                return Ok(None);
            };
            self.line_no += 1;

            if let Some(target) = Target::new(&line) {
                return Ok(Some(target));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    async fn collect(list: &mut TargetList) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(target) = list.next_target().await.unwrap() {
            out.push(target.to_string());
        }
        out
    }

    #[tokio::test]
    async fn test_reads_in_order_skipping_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\nhttps://a.test\r\n  \nhttps://b.test\n\nhttps://c.test").unwrap();

        let mut list = TargetList::open(file.path()).await.unwrap();
        assert_eq!(
            collect(&mut list).await,
            vec!["https://a.test", "https://b.test", "https://c.test"]
        );
    }

    #[tokio::test]
    async fn test_empty_file_has_no_targets() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut list = TargetList::open(file.path()).await.unwrap();
        assert!(list.next_target().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_open_failure_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = TargetList::open(&path).await.unwrap_err();
        assert!(matches!(err, InputError::Open { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[tokio::test]
    async fn test_non_utf8_line_is_read_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"https://a.test\n\xff\xfe\n").unwrap();

        let mut list = TargetList::open(file.path()).await.unwrap();
        assert!(list.next_target().await.unwrap().is_some());
        let err = list.next_target().await.unwrap_err();
        assert!(matches!(err, InputError::Read { line: 1, .. }));
    }
}
