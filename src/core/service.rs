use crate::core::store::TaxonomyStore;

/// Entry point for every query.
///
/// Operations are split by layer across `lookup`, `composition` and
/// `narrative`; each layer only calls the one below it. All of them are
/// synchronous reads over the shared [`TaxonomyStore`].
#[derive(Debug, Clone)]
pub struct CockpitService {
    store: TaxonomyStore,
}

impl CockpitService {
    pub fn new(store: TaxonomyStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TaxonomyStore {
        &self.store
    }
}
