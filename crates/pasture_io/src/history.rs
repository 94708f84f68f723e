use crate::error::{IoError, Result};
use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use pasture_data::{EcoEvent, PopulationSnapshot, Species};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

pub const CSV_HEADER: &str = "tick,sheep,wolves,grass";

const SNAPSHOT_LOG: &str = "population.jsonl";
const EVENT_LOG: &str = "events.jsonl";

/// Append-only series of per-tick population snapshots.
///
/// This is the data behind the population-over-time chart. It is cleared on
/// reset and otherwise only grows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationHistory {
    samples: Vec<PopulationSnapshot>,
}

impl PopulationHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: PopulationSnapshot) {
        debug_assert!(
            self.samples.last().map_or(true, |s| s.tick < snapshot.tick),
            "history ticks must increase"
        );
        self.samples.push(snapshot);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn samples(&self) -> &[PopulationSnapshot] {
        &self.samples
    }

    #[must_use]
    pub fn latest(&self) -> Option<&PopulationSnapshot> {
        self.samples.last()
    }

    /// Head count of one species at every recorded tick.
    #[must_use]
    pub fn series(&self, species: Species) -> Vec<usize> {
        self.samples.iter().map(|s| s.count_of(species)).collect()
    }

    #[must_use]
    pub fn grass_series(&self) -> Vec<usize> {
        self.samples.iter().map(|s| s.grass).collect()
    }

    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::with_capacity(CSV_HEADER.len() + 1 + self.samples.len() * 16);
        out.push_str(CSV_HEADER);
        out.push('\n');
        for sample in &self.samples {
            out.push_str(&sample.to_csv_row());
            out.push('\n');
        }
        out
    }

    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_csv())
            .map_err(|e| IoError::from(e).with_context(format!("writing {}", path.display())))?;
        tracing::info!(path = %path.display(), rows = self.len(), "Exported population CSV");
        Ok(())
    }

    fn checksum(&self) -> Result<String> {
        let json = serde_json::to_vec(&self.samples)?;
        Ok(hex::encode(Sha256::digest(&json)))
    }

    /// Writes a gzip-compressed JSON archive of the whole series.
    pub fn save_archive<P: AsRef<Path>>(&self, path: P, config_fingerprint: &str) -> Result<()> {
        let archive = HistoryArchive {
            saved_at: Utc::now(),
            config_fingerprint: config_fingerprint.to_string(),
            checksum: self.checksum()?,
            history: self.clone(),
        };
        let file = File::create(path.as_ref())?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        serde_json::to_writer(&mut encoder, &archive)?;
        encoder.finish()?;
        Ok(())
    }

    /// Reads an archive written by [`PopulationHistory::save_archive`],
    /// rejecting it if the stored checksum does not match its samples.
    pub fn load_archive<P: AsRef<Path>>(path: P) -> Result<HistoryArchive> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::not_found(path.display().to_string()));
        }
        let mut decoded = Vec::new();
        GzDecoder::new(File::open(path)?)
            .read_to_end(&mut decoded)
            .map_err(|e| IoError::compression(e.to_string()))?;
        let archive: HistoryArchive = serde_json::from_slice(&decoded)?;
        if archive.history.checksum()? != archive.checksum {
            return Err(IoError::validation(format!(
                "checksum mismatch in {}",
                path.display()
            )));
        }
        Ok(archive)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryArchive {
    pub saved_at: DateTime<Utc>,
    /// Fingerprint of the configuration the run used.
    pub config_fingerprint: String,
    pub checksum: String,
    pub history: PopulationHistory,
}

/// Appends snapshots and ecosystem events to JSONL files under a log
/// directory, one JSON object per line.
pub struct HistoryLogger {
    live_file: Option<BufWriter<File>>,
    event_file: Option<BufWriter<File>>,
    log_dir: PathBuf,
}

impl HistoryLogger {
    pub fn new_at<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
        Ok(Self {
            live_file: Some(Self::open_append(&dir.join(SNAPSHOT_LOG))?),
            event_file: Some(Self::open_append(&dir.join(EVENT_LOG))?),
            log_dir: dir.to_path_buf(),
        })
    }

    /// A logger that accepts everything and writes nothing.
    #[must_use]
    pub fn new_dummy() -> Self {
        Self {
            live_file: None,
            event_file: None,
            log_dir: PathBuf::new(),
        }
    }

    fn open_append(path: &Path) -> Result<BufWriter<File>> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(BufWriter::new(file))
    }

    pub fn log_snapshot(&mut self, snapshot: &PopulationSnapshot) -> Result<()> {
        if let Some(ref mut file) = self.live_file {
            let json = serde_json::to_string(snapshot)?;
            writeln!(file, "{}", json)?;
            file.flush()?;
        }
        Ok(())
    }

    pub fn log_event(&mut self, event: &EcoEvent) -> Result<()> {
        if let Some(ref mut file) = self.event_file {
            let json = serde_json::to_string(event)?;
            writeln!(file, "{}", json)?;
            file.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Reads back every snapshot line, skipping lines that fail to parse.
    pub fn read_snapshots(&self) -> Result<Vec<PopulationSnapshot>> {
        self.read_lines(SNAPSHOT_LOG)
    }

    pub fn read_events(&self) -> Result<Vec<EcoEvent>> {
        self.read_lines(EVENT_LOG)
    }

    fn read_lines<T: serde::de::DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        if self.live_file.is_none() {
            return Ok(vec![]);
        }
        let file = match File::open(self.log_dir.join(name)) {
            Ok(f) => f,
            Err(_) => return Ok(vec![]),
        };
        let reader = BufReader::new(file);
        let mut out = Vec::new();
        for l in reader.lines().map_while(std::result::Result::ok) {
            if let Ok(item) = serde_json::from_str::<T>(&l) {
                out.push(item);
            }
        }
        Ok(out)
    }
}
