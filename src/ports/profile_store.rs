//! ProfileStore port - persistence boundary for computed profiles.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::assessment::RiskProfileResult;
use crate::domain::foundation::{CatalogVersion, Timestamp, UserId};

/// A computed profile as persisted: the immutable result plus the keys
/// and timestamp the engine itself does not carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub user_id: UserId,
    pub catalog_version: CatalogVersion,
    pub computed_at: Timestamp,
    pub result: RiskProfileResult,
}

/// Errors raised by profile storage backends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileStoreError {
    #[error("No stored profile for user {user_id} under catalog version '{catalog_version}'")]
    NotFound {
        user_id: UserId,
        catalog_version: CatalogVersion,
    },

    #[error("Profile storage failed: {0}")]
    Backend(String),
}

/// Stores computed profiles keyed by user identity and catalog version.
///
/// A retaken assessment replaces the stored profile wholesale; a catalog
/// version change invalidates profiles computed under the old version.
pub trait ProfileStore: Send + Sync {
    /// Saves a profile, replacing any prior profile under the same key.
    fn save(&self, profile: StoredProfile) -> Result<(), ProfileStoreError>;

    /// Loads the profile stored for a user under a catalog version.
    fn get(
        &self,
        user_id: &UserId,
        catalog_version: &CatalogVersion,
    ) -> Result<StoredProfile, ProfileStoreError>;

    /// Whether the user has a completed assessment under this catalog
    /// version. Gates personalized-report generation downstream.
    fn has_completed_assessment(
        &self,
        user_id: &UserId,
        catalog_version: &CatalogVersion,
    ) -> Result<bool, ProfileStoreError>;

    /// Drops every profile computed under the given catalog version.
    fn invalidate_version(&self, catalog_version: &CatalogVersion)
        -> Result<(), ProfileStoreError>;
}
