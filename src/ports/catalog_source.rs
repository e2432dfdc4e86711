//! CatalogSource port - supplier of validated question catalogs.

use thiserror::Error;

use crate::domain::assessment::AssessmentError;
use crate::domain::catalog::QuestionCatalog;
use crate::domain::foundation::ValidationError;

/// Errors raised while loading or validating a catalog.
///
/// All of these are deployment-configuration defects: they should abort
/// startup, not surface as per-request failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog source: {0}")]
    Io(String),

    #[error("Failed to parse catalog document: {0}")]
    Parse(String),

    #[error("Catalog failed validation: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Allocation policy is invalid: {0}")]
    Allocation(#[from] AssessmentError),
}

/// Supplies the question catalog for one deployed revision.
///
/// Implementations must return a catalog that has already passed
/// structural validation and the allocation-table closure check.
/// Callers hot-swapping catalogs must treat the swap as atomic.
pub trait CatalogSource {
    /// Loads and validates the catalog.
    fn load(&self) -> Result<QuestionCatalog, CatalogError>;
}
