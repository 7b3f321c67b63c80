//! File destination implementation

use crate::core::{Destination, Result, SinkError};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends rendered lines to a single log file.
///
/// The file is opened lazily on the first write, so a sink that never
/// emits leaves nothing on disk. Missing parent directories are created
/// at open time (the conventional `logs/app.log` destination needs it).
pub struct FileDestination {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileDestination {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: None,
        }
    }

    /// Get the destination file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn writer(&mut self) -> Result<&mut BufWriter<File>> {
        if self.writer.is_none() {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        SinkError::io_operation(
                            "creating log directory",
                            parent.display().to_string(),
                            e,
                        )
                    })?;
                }
            }

            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .map_err(|e| {
                    SinkError::io_operation("opening log file", self.path.display().to_string(), e)
                })?;
            self.writer = Some(BufWriter::new(file));
        }

        self.writer
            .as_mut()
            .ok_or_else(|| SinkError::destination(self.path.display().to_string(), "file writer not initialized"))
    }
}

impl Destination for FileDestination {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let writer = self.writer()?;

        let mut output = String::with_capacity(line.len() + 1);
        output.push_str(line);
        output.push('\n');

        writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileDestination {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
