use std::fs;
use std::path::PathBuf;

use crate::domain::ports::TaxonomySource;
use crate::utils::error::Result;

const EMBEDDED_TAXONOMY: &str = include_str!("../../data/instruments.toml");

/// The copy of `data/instruments.toml` compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTaxonomy;

impl TaxonomySource for EmbeddedTaxonomy {
    fn origin(&self) -> String {
        "embedded:data/instruments.toml".to_string()
    }

    fn read_to_string(&self) -> Result<String> {
        Ok(EMBEDDED_TAXONOMY.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct FileTaxonomy {
    path: PathBuf,
}

impl FileTaxonomy {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaxonomySource for FileTaxonomy {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn read_to_string(&self) -> Result<String> {
        let content = fs::read_to_string(&self.path)?;
        Ok(content)
    }
}

/// Picks the file source when a path is configured, otherwise the embedded one.
pub fn source_for(path: Option<&str>) -> Box<dyn TaxonomySource> {
    match path {
        Some(path) => Box::new(FileTaxonomy::new(path)),
        None => Box::new(EmbeddedTaxonomy),
    }
}
