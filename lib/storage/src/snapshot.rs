// Whole-store snapshot: gzip-compressed JSON, written atomically.
use anyhow::{anyhow, Result};
use artrec_core::{Level, Rating};
use atomicwrites::{AllowOverwrite, AtomicFile};
use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

const SNAPSHOT_FILE: &str = "artrec.snapshot";

/// Snapshot description for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDescription {
    pub name: String,
    pub creation_time: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

/// Full store snapshot - catalog, preferences and explanation index
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSnapshotData {
    pub vector_dim: usize,
    pub artworks: Vec<ArtworkData>,
    pub users: Vec<UserPreferencesData>,
    pub explanations: Vec<ExplanationData>,
    pub created_at: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArtworkData {
    pub artwork_id: String,
    pub name: String,
    pub museum_id: String,
    pub museum_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserPreferencesData {
    pub user_id: String,
    pub ratings: Vec<Rating>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExplanationData {
    pub artwork_id: String,
    pub level: Level,
    pub explanation_id: String,
}

#[derive(Debug, Clone)]
pub struct SnapshotManager {
    data_dir: PathBuf,
}

impl SnapshotManager {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(SNAPSHOT_FILE)
    }

    /// Write the snapshot. The file is replaced atomically so a crash
    /// mid-save never leaves a truncated snapshot behind.
    pub fn save(&self, data: &StoreSnapshotData) -> Result<SnapshotDescription> {
        let json_data = serde_json::to_vec(data)?;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&json_data)?;
        let compressed = encoder.finish()?;

        let path = self.snapshot_path();
        AtomicFile::new(&path, AllowOverwrite)
            .write(|f| f.write_all(&compressed))
            .map_err(|e| anyhow!("atomic snapshot write failed: {}", e))?;

        let checksum = format!("{:x}", Sha256::digest(&compressed));
        let now: DateTime<Utc> = Utc::now();

        Ok(SnapshotDescription {
            name: SNAPSHOT_FILE.to_string(),
            creation_time: now.to_rfc3339(),
            size: compressed.len() as u64,
            checksum: Some(checksum),
        })
    }

    /// Load the snapshot if one exists.
    pub fn load(&self) -> Result<Option<StoreSnapshotData>> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(&path)?;
        let mut decoder = GzDecoder::new(BufReader::new(file));
        let mut json_data = Vec::new();
        decoder.read_to_end(&mut json_data)?;

        let data: StoreSnapshotData = serde_json::from_slice(&json_data)
            .map_err(|e| anyhow!("corrupt snapshot {}: {}", path.display(), e))?;
        Ok(Some(data))
    }
}
