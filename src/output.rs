use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Where merged template output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `File(save_path)` when saving, stdout otherwise
    pub fn select(save: bool, save_path: &Path) -> Self {
        if save {
            Self::File(save_path.to_path_buf())
        } else {
            Self::Stdout
        }
    }

    /// Open the sink; files are created if absent and truncated
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout().lock())),
            Self::File(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)?;
                Ok(Box::new(io::BufWriter::new(file)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_select() {
        let path = Path::new(".gitignore");
        assert_eq!(OutputTarget::select(false, path), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::select(true, path),
            OutputTarget::File(PathBuf::from(".gitignore"))
        );
    }

    #[test]
    fn test_file_is_truncated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".gitignore");
        std::fs::write(&path, "a much longer previous content\n").unwrap();

        let target = OutputTarget::File(path.clone());
        {
            let mut sink = target.open().unwrap();
            sink.write_all(b"new\n").unwrap();
            sink.flush().unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let target = OutputTarget::File(temp_dir.path().join("missing/.gitignore"));
        assert!(target.open().is_err());
    }
}
