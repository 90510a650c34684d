use crate::preferences::PreferenceStore;
use crate::snapshot::{
    ArtworkData, ExplanationData, SnapshotDescription, SnapshotManager, StoreSnapshotData,
    UserPreferencesData,
};
use artrec_core::{
    Artwork, Catalog, CatalogConfig, Error, ExplanationIndex, Result, Vector,
};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Owns the three collaborator stores and their persistence.
pub struct StorageManager {
    catalog: Arc<Catalog>,
    preferences: Arc<PreferenceStore>,
    explanations: Arc<RwLock<ExplanationIndex>>,
    snapshots: SnapshotManager,
    #[allow(dead_code)]
    data_dir: PathBuf,
    save_interval: Option<Duration>,
}

impl StorageManager {
    /// Open the store, restoring the on-disk snapshot when one exists.
    ///
    /// `default_vector_dim` applies to a fresh data directory; a restored
    /// snapshot carries its own dimension.
    pub fn new<P: AsRef<Path>>(data_dir: P, default_vector_dim: usize) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        let snapshots =
            SnapshotManager::new(&data_dir).map_err(|e| Error::Persistence(e.to_string()))?;

        let snapshot = snapshots
            .load()
            .map_err(|e| Error::Persistence(e.to_string()))?;

        let vector_dim = snapshot
            .as_ref()
            .map(|s| s.vector_dim)
            .unwrap_or(default_vector_dim);

        let catalog = Arc::new(Catalog::new(CatalogConfig { vector_dim }));
        let preferences = Arc::new(PreferenceStore::new());
        let explanations = Arc::new(RwLock::new(ExplanationIndex::new()));

        if let Some(snapshot) = snapshot {
            eprintln!("Loading snapshot from disk...");

            for artwork_data in snapshot.artworks {
                let mut artwork = Artwork::new(
                    artwork_data.artwork_id.clone(),
                    artwork_data.name,
                    artwork_data.museum_id,
                    artwork_data.museum_name,
                );
                if let Some(embedding) = artwork_data.embedding {
                    artwork = artwork.with_embedding(Vector::new(embedding));
                }
                if let Err(e) = catalog.upsert(artwork) {
                    eprintln!(
                        "Warning: Failed to restore artwork {}: {}",
                        artwork_data.artwork_id, e
                    );
                }
            }

            preferences.restore(
                snapshot
                    .users
                    .into_iter()
                    .map(|user| (user.user_id, user.ratings))
                    .collect(),
            );

            let mut index = explanations.write();
            for entry in snapshot.explanations {
                index.insert(entry.artwork_id, entry.level, entry.explanation_id);
            }
            drop(index);

            eprintln!("Snapshot loaded: {} artworks", catalog.count());
        }

        let manager = Self {
            catalog,
            preferences,
            explanations,
            snapshots,
            data_dir,
            save_interval: Some(Duration::from_secs(300)),
        };

        manager.start_background_save();

        Ok(manager)
    }

    /// Start background save thread
    fn start_background_save(&self) {
        let catalog = self.catalog.clone();
        let preferences = self.preferences.clone();
        let explanations = self.explanations.clone();
        let snapshots = self.snapshots.clone();
        let interval = self.save_interval.unwrap_or(Duration::from_secs(300));

        std::thread::spawn(move || loop {
            std::thread::sleep(interval);

            let data = export_snapshot(&catalog, &preferences, &explanations);
            if let Err(e) = snapshots.save(&data) {
                eprintln!("Background save error: {}", e);
            }
        });
    }

    /// Save a snapshot now.
    pub fn save(&self) -> Result<SnapshotDescription> {
        let data = export_snapshot(&self.catalog, &self.preferences, &self.explanations);
        self.snapshots
            .save(&data)
            .map_err(|e| Error::Persistence(e.to_string()))
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn preferences(&self) -> &Arc<PreferenceStore> {
        &self.preferences
    }

    pub fn explanations(&self) -> &Arc<RwLock<ExplanationIndex>> {
        &self.explanations
    }
}

fn export_snapshot(
    catalog: &Catalog,
    preferences: &PreferenceStore,
    explanations: &RwLock<ExplanationIndex>,
) -> StoreSnapshotData {
    let artworks = catalog
        .iter()
        .into_iter()
        .map(|artwork| ArtworkData {
            artwork_id: artwork.artwork_id,
            name: artwork.name,
            museum_id: artwork.museum_id,
            museum_name: artwork.museum_name,
            embedding: artwork
                .embedding
                .map(|embedding| embedding.as_slice().to_vec()),
        })
        .collect();

    let users = preferences
        .export()
        .into_iter()
        .map(|(user_id, ratings)| UserPreferencesData { user_id, ratings })
        .collect();

    let explanations = explanations
        .read()
        .entries()
        .into_iter()
        .map(|entry| ExplanationData {
            artwork_id: entry.artwork_id,
            level: entry.level,
            explanation_id: entry.explanation_id,
        })
        .collect();

    StoreSnapshotData {
        vector_dim: catalog.vector_dim(),
        artworks,
        users,
        explanations,
        created_at: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0),
    }
}
