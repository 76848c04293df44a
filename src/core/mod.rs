pub mod composition;
pub mod lookup;
pub mod narrative;
pub mod normalize;
pub mod service;
pub mod store;

pub use crate::domain::results::{Composition, CompositionInvalid, Lookup, NotFound};
pub use crate::utils::error::Result;
pub use narrative::PromptOptions;
pub use service::CockpitService;
pub use store::TaxonomyStore;
