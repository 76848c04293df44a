//! Taxonomy store: parse once, freeze, share.
//!
//! The store is an `Arc` around immutable data. Cloning it hands out another
//! read-only view; there is no write path and no reload.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::adapters::taxonomy::EmbeddedTaxonomy;
use crate::domain::model::{InstrumentSpec, Taxonomy};
use crate::domain::ports::TaxonomySource;
use crate::utils::error::{CockpitError, Result};
use crate::utils::validation::{validate_canonical_keys, validate_non_empty_section, Validate};

#[derive(Debug)]
struct StoreInner {
    origin: String,
    taxonomy: Taxonomy,
    /// All categories merged. Later categories (sorted order) shadow earlier ones.
    flat_instruments: BTreeMap<String, InstrumentSpec>,
}

#[derive(Debug, Clone)]
pub struct TaxonomyStore {
    inner: Arc<StoreInner>,
}

impl TaxonomyStore {
    pub fn load<S: TaxonomySource + ?Sized>(source: &S) -> Result<Self> {
        let origin = source.origin();
        tracing::debug!("Reading taxonomy from {}", origin);
        let content = source.read_to_string()?;
        Self::from_toml_str(&content, &origin)
    }

    /// The dataset compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::load(&EmbeddedTaxonomy)
    }

    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self> {
        let taxonomy: Taxonomy =
            toml::from_str(content).map_err(|e| CockpitError::TaxonomyParseError {
                origin: origin.to_string(),
                message: e.to_string(),
            })?;
        Self::from_taxonomy(taxonomy, origin)
    }

    pub fn from_taxonomy(taxonomy: Taxonomy, origin: &str) -> Result<Self> {
        taxonomy.validate()?;
        let flat_instruments = flatten_instruments(&taxonomy);

        tracing::info!(
            "Loaded taxonomy v{} from {}: {} aircraft types, {} instruments in {} categories, {} eras",
            taxonomy.version,
            origin,
            taxonomy.aircraft_types.len(),
            flat_instruments.len(),
            taxonomy.instruments.len(),
            taxonomy.eras.len()
        );

        Ok(Self {
            inner: Arc::new(StoreInner {
                origin: origin.to_string(),
                taxonomy,
                flat_instruments,
            }),
        })
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.inner.taxonomy
    }

    pub fn instruments(&self) -> &BTreeMap<String, InstrumentSpec> {
        &self.inner.flat_instruments
    }

    pub fn origin(&self) -> &str {
        &self.inner.origin
    }

    pub fn version(&self) -> &str {
        &self.inner.taxonomy.version
    }
}

fn flatten_instruments(taxonomy: &Taxonomy) -> BTreeMap<String, InstrumentSpec> {
    let mut flat: BTreeMap<String, InstrumentSpec> = BTreeMap::new();
    let mut owner: BTreeMap<&str, &str> = BTreeMap::new();

    for (category, instruments) in &taxonomy.instruments {
        for (key, spec) in instruments {
            if let Some(previous) = owner.insert(key.as_str(), category.as_str()) {
                tracing::warn!(
                    "Instrument '{}' in category '{}' shadows the entry from '{}'",
                    key,
                    category,
                    previous
                );
            }
            flat.insert(key.clone(), spec.clone());
        }
    }

    flat
}

impl Validate for Taxonomy {
    fn validate(&self) -> Result<()> {
        validate_non_empty_section("aircraft_types", self.aircraft_types.len())?;
        validate_non_empty_section("instruments", self.instruments.len())?;
        validate_non_empty_section("eras", self.eras.len())?;

        validate_canonical_keys("aircraft_types", self.aircraft_types.keys())?;
        validate_canonical_keys("eras", self.eras.keys())?;
        for (category, instruments) in &self.instruments {
            validate_canonical_keys(&format!("instruments.{}", category), instruments.keys())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
version = "test"

[aircraft_types.trainer]
instrument_configuration = "six_pack"
panel_complexity = "basic"

[aircraft_types.trainer.typical_instruments]
essential = ["altimeter"]

[instruments.alpha.altimeter]
name = "Altimeter (alpha)"

[instruments.beta.altimeter]
name = "Altimeter (beta)"

[eras.analog]
period = "old"
"#;

    #[test]
    fn test_embedded_taxonomy_loads() {
        let store = TaxonomyStore::embedded().unwrap();
        let taxonomy = store.taxonomy();
        assert!(taxonomy.aircraft_types.contains_key("general_aviation_singles"));
        assert!(taxonomy.eras.contains_key("glass_cockpit"));
        assert!(taxonomy.positioning.contains_key("primary_scan_area"));
        assert!(taxonomy.color_standards.contains_key("warning"));
        assert!(store.instruments().contains_key("attitude_indicator"));
    }

    #[test]
    fn test_later_category_shadows_earlier() {
        let store = TaxonomyStore::from_toml_str(MINIMAL, "inline").unwrap();
        assert_eq!(store.instruments().len(), 1);
        assert_eq!(
            store.instruments()["altimeter"].name.as_deref(),
            Some("Altimeter (beta)")
        );
    }

    #[test]
    fn test_clones_share_data() {
        let store = TaxonomyStore::from_toml_str(MINIMAL, "inline").unwrap();
        let view = store.clone();
        assert!(std::ptr::eq(store.taxonomy(), view.taxonomy()));
        assert_eq!(view.version(), "test");
        assert_eq!(view.origin(), "inline");
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = TaxonomyStore::from_toml_str("[aircraft_types", "broken").unwrap_err();
        assert!(matches!(err, CockpitError::TaxonomyParseError { .. }));
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let content = r#"
[aircraft_types.trainer]
[instruments.flight.altimeter]
name = "Altimeter"
"#;
        let err = TaxonomyStore::from_toml_str(content, "no-eras").unwrap_err();
        match err {
            CockpitError::TaxonomyValidationError { section, .. } => assert_eq!(section, "eras"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_canonical_key_is_rejected() {
        let content = MINIMAL.replace("[eras.analog]", "[eras.Analog-Era]");
        let err = TaxonomyStore::from_toml_str(&content, "bad-key").unwrap_err();
        assert!(matches!(err, CockpitError::TaxonomyValidationError { .. }));
    }
}
