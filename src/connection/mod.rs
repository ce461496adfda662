use std::sync::Arc;

use crate::core::Result;
use crate::store::DocumentStore;

/// Shared handle to the backing document store.
///
/// Every operation takes a `Connections` explicitly; there is no global
/// registry of live stores. Construct one per backing store, share clones
/// across tasks, and close it when the owning process shuts down.
///
/// # Examples
///
/// ```ignore
/// let connections = Connections::new(Arc::new(MemoryStore::new()));
/// let form = ops::forms::get_form(&connections, options).await?;
/// connections.close().await?;
/// ```
#[derive(Clone)]
pub struct Connections {
    store: Arc<dyn DocumentStore>,
}

impl Connections {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// The adapter behind this handle.
    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    /// Asks the adapter to release its resources. Clones of this handle
    /// share one adapter, so close once, at shutdown.
    pub async fn close(&self) -> Result<()> {
        self.store.close().await?;
        Ok(())
    }
}
