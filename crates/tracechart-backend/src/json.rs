//! JSON backend.
//!
//! Emits the chart specification itself. Useful for handing layouts to an
//! out-of-process renderer and for inspecting what the pipeline produced.

use crate::backend::RenderBackend;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracechart_core::chart::CompositeLayout;
use tracechart_core::{Error, Result};

/// Backend that writes layouts as pretty-printed JSON.
///
/// `show` writes to the wrapped writer (stdout by default); `save` writes a
/// file at the destination path.
pub struct JsonBackend<W: Write + Send> {
    writer: Mutex<W>,
}

impl JsonBackend<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonBackend<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> RenderBackend for JsonBackend<W> {
    fn name(&self) -> &'static str {
        "json"
    }

    fn show(&self, layout: &CompositeLayout) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| Error::Other("JSON backend writer lock poisoned".into()))?;
        serde_json::to_writer_pretty(&mut *writer, layout)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    fn save(&self, layout: &CompositeLayout, destination: &Path) -> Result<()> {
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = BufWriter::new(File::create(destination)?);
        serde_json::to_writer_pretty(&mut file, layout)?;
        file.flush()?;
        tracing::debug!(path = %destination.display(), charts = layout.charts.len(), "saved chart layout");
        Ok(())
    }

    fn default_destination(&self) -> PathBuf {
        PathBuf::from("profile.json")
    }
}
