// Adapters layer: concrete implementations of the domain ports.

pub mod taxonomy;

pub use taxonomy::{source_for, EmbeddedTaxonomy, FileTaxonomy};
