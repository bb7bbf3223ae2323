use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use maumau::Event;

/// Collects the match's event stream and writes it out as one JSON file.
pub struct Recorder {
    path: PathBuf,
    events: Vec<Event>,
}

impl Recorder {
    pub fn new(path: PathBuf) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                anyhow::bail!("Directory '{}' does not exist", parent.display());
            }
        }
        Ok(Self {
            path,
            events: Vec::new(),
        })
    }

    pub fn store(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn write(&self) -> anyhow::Result<()> {
        let writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(writer, &self.events)?;
        Ok(())
    }
}
