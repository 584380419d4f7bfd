use std::sync::{Arc, PoisonError, RwLock};

use crate::storage::types::document::Document;

/// Process-wide snapshot of the loaded documents.
///
/// The snapshot is an `Arc<Vec<_>>` so readers get a point-in-time view with
/// one atomic pointer clone, and a reload never tears an in-flight ranking
/// call. Load order is preserved: the ranker breaks score ties by corpus
/// position.
#[derive(Debug, Default)]
pub struct CorpusIndex {
    documents: RwLock<Arc<Vec<Document>>>,
}

impl CorpusIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current snapshot. Cheap: clones the Arc, not the texts.
    pub fn documents(&self) -> Arc<Vec<Document>> {
        Arc::clone(
            &self
                .documents
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Replaces the whole corpus. Readers holding an older snapshot keep it
    /// until they drop it.
    pub fn replace(&self, documents: Vec<Document>) {
        *self
            .documents
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(documents);
    }

    pub fn len(&self) -> usize {
        self.documents().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents().is_empty()
    }
}
