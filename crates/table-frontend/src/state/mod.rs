//! Application state module

mod viewport;

pub use viewport::{PendingGeometry, SharedViewportState, ViewportState, connect_viewport};

use std::sync::Arc;

use parking_lot::Mutex;

use table_core::{TableParameters, TableStore};

/// Shared table store handle
pub type SharedTableStore = Arc<Mutex<TableStore>>;

/// Create a new shared store holding `initial`
pub fn create_shared_store(initial: TableParameters) -> SharedTableStore {
    Arc::new(Mutex::new(TableStore::new(initial)))
}
