pub mod manager;
pub mod preferences;
pub mod snapshot;

pub use manager::StorageManager;
pub use preferences::PreferenceStore;
pub use snapshot::{SnapshotDescription, SnapshotManager, StoreSnapshotData};
