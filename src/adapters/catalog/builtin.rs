//! Catalog source backed by the compiled-in default catalog.

use crate::domain::assessment::validate_allocation_table;
use crate::domain::catalog::{default_catalog, QuestionCatalog};
use crate::ports::{CatalogError, CatalogSource};

/// Serves the catalog shipped with the engine.
///
/// `load` still runs the full validation pass so a defective build is
/// caught at startup, like any other configuration error.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Result<QuestionCatalog, CatalogError> {
        let catalog = default_catalog().clone();
        catalog.validate()?;
        validate_allocation_table()?;
        Ok(catalog)
    }
}
