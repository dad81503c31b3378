//! Multi-page document sinks.
//!
//! A session renders one page at a time and hands it to a [`PageSink`]. The
//! sink is owned by the caller: sessions never open or finish it.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Result;

/// Destination for rendered SVG pages.
pub trait PageSink {
    /// Append one page.
    fn add_page(&mut self, svg: String) -> Result<()>;

    /// Pages accepted so far.
    fn page_count(&self) -> usize;
}

/// Writes each page to `<dir>/<prefix>-NNN.svg`, numbered from 001.
#[derive(Debug)]
pub struct SvgPageWriter {
    dir: PathBuf,
    prefix: String,
    force: bool,
    written: Vec<PathBuf>,
}

impl SvgPageWriter {
    /// Create a writer, creating `dir` if it does not exist.
    pub fn new(dir: impl AsRef<Path>, prefix: impl Into<String>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.exists() {
            info!("Creating output directory: {:?}", dir);
            fs::create_dir_all(dir)?;
        }
        Ok(SvgPageWriter {
            dir: dir.to_path_buf(),
            prefix: prefix.into(),
            force: false,
            written: Vec::new(),
        })
    }

    /// Overwrite existing page files instead of failing.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Path the next page will be written to.
    pub fn next_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}-{:03}.svg", self.prefix, self.written.len() + 1))
    }

    /// Files written so far, in page order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.written
    }
}

impl PageSink for SvgPageWriter {
    fn add_page(&mut self, svg: String) -> Result<()> {
        let path = self.next_path();
        if !self.force && path.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!(
                    "Output file {} already exists. Use --force to overwrite.",
                    path.display()
                ),
            )
            .into());
        }
        fs::write(&path, svg)?;
        debug!("Wrote page {}", path.display());
        self.written.push(path);
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.written.len()
    }
}

/// Keeps pages in memory.
#[derive(Debug, Default, Clone)]
pub struct PageBuffer {
    pages: Vec<String>,
}

impl PageBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<String> {
        self.pages
    }
}

impl PageSink for PageBuffer {
    fn add_page(&mut self, svg: String) -> Result<()> {
        self.pages.push(svg);
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_numbers_pages() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pages");
        let mut writer = SvgPageWriter::new(&out, "wells").unwrap();
        writer.add_page("<svg/>".to_string()).unwrap();
        writer.add_page("<svg></svg>".to_string()).unwrap();
        assert_eq!(writer.page_count(), 2);
        assert_eq!(writer.paths()[1], out.join("wells-002.svg"));
        assert_eq!(fs::read_to_string(out.join("wells-001.svg")).unwrap(), "<svg/>");
    }

    #[test]
    fn test_writer_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("p-001.svg"), "old").unwrap();

        let mut writer = SvgPageWriter::new(dir.path(), "p").unwrap();
        assert!(writer.add_page("new".to_string()).is_err());
        assert_eq!(writer.page_count(), 0);

        let mut writer = SvgPageWriter::new(dir.path(), "p").unwrap().force(true);
        writer.add_page("new".to_string()).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("p-001.svg")).unwrap(), "new");
    }

    #[test]
    fn test_buffer() {
        let mut buffer = PageBuffer::new();
        buffer.add_page("a".to_string()).unwrap();
        assert_eq!(buffer.page_count(), 1);
        assert_eq!(buffer.into_pages(), vec!["a".to_string()]);
    }
}
