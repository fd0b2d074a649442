use crate::io;
use crate::model::Assignment;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait ResultSink {
    /// Écrit la liste complète des affectations, de manière atomique.
    fn write(&self, assignments: &[Assignment]) -> anyhow::Result<()>;
}

/// Feuille de surveillance au format CSV (titre, en-tête, lignes).
pub struct SheetSink {
    path: PathBuf,
    title: String,
}

impl SheetSink {
    pub fn new<P: AsRef<Path>, T: Into<String>>(path: P, title: T) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            title: title.into(),
        }
    }
}

impl ResultSink for SheetSink {
    fn write(&self, assignments: &[Assignment]) -> anyhow::Result<()> {
        persist_atomic(&self.path, |tmp| {
            io::write_invigilation_sheet(tmp, &self.title, assignments)
        })
    }
}

/// Liste JSON des affectations, relisible par `check`.
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ResultSink for JsonSink {
    fn write(&self, assignments: &[Assignment]) -> anyhow::Result<()> {
        persist_atomic(&self.path, |tmp| io::write_assignments_json(tmp, assignments))
    }
}

fn persist_atomic<F>(path: &Path, render: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> anyhow::Result<()>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    render(&mut tmp).with_context(|| format!("rendering {}", path.display()))?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}
