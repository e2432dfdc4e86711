//! AssessmentService - orchestrates profile computation and storage.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::assessment::{compute_risk_profile, AssessmentError, RiskProfileResult};
use crate::domain::catalog::{AnswerSet, QuestionCatalog};
use crate::domain::foundation::{CatalogVersion, Timestamp, UserId};
use crate::ports::{ProfileStore, ProfileStoreError, StoredProfile};

/// Errors raised while handling an assessment submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error(transparent)]
    Store(#[from] ProfileStoreError),
}

/// Application service wiring the engine to a profile store.
///
/// The engine itself stays pure; this is where a submission gains a
/// timestamp and a storage key.
pub struct AssessmentService {
    store: Arc<dyn ProfileStore>,
}

impl AssessmentService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Computes a profile from a completed questionnaire and stores it
    /// keyed by user and catalog version, replacing any prior profile.
    pub fn submit(
        &self,
        user_id: UserId,
        catalog: &QuestionCatalog,
        answers: &AnswerSet,
    ) -> Result<RiskProfileResult, SubmitError> {
        debug!(%user_id, catalog_version = %catalog.version, answers = answers.len(), "computing risk profile");

        let result = compute_risk_profile(catalog, answers)?;

        self.store.save(StoredProfile {
            user_id,
            catalog_version: catalog.version.clone(),
            computed_at: Timestamp::now(),
            result: result.clone(),
        })?;

        info!(%user_id, category = %result.category, final_score = result.final_score, "risk profile stored");
        Ok(result)
    }

    /// Returns the stored profile for a user under a catalog version.
    pub fn profile(
        &self,
        user_id: &UserId,
        catalog_version: &CatalogVersion,
    ) -> Result<StoredProfile, ProfileStoreError> {
        self.store.get(user_id, catalog_version)
    }

    /// Whether the user has completed the assessment under this catalog
    /// version. Downstream report generation gates on this.
    pub fn has_completed(
        &self,
        user_id: &UserId,
        catalog_version: &CatalogVersion,
    ) -> Result<bool, ProfileStoreError> {
        self.store.has_completed_assessment(user_id, catalog_version)
    }

    /// Invalidates every profile computed under an old catalog version.
    pub fn invalidate_version(
        &self,
        catalog_version: &CatalogVersion,
    ) -> Result<(), ProfileStoreError> {
        info!(%catalog_version, "invalidating profiles for catalog version");
        self.store.invalidate_version(catalog_version)
    }
}
