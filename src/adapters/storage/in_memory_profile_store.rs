//! In-Memory Profile Store Adapter
//!
//! Stores computed profiles in memory, keyed by user and catalog
//! version. Useful for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::foundation::{CatalogVersion, UserId};
use crate::ports::{ProfileStore, ProfileStoreError, StoredProfile};

type Key = (UserId, CatalogVersion);

/// In-memory storage for computed risk profiles.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<RwLock<HashMap<Key, StoredProfile>>>,
}

impl InMemoryProfileStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles.
    pub fn len(&self) -> usize {
        self.profiles.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all stored profiles (useful for tests).
    pub fn clear(&self) {
        if let Ok(mut map) = self.profiles.write() {
            map.clear();
        }
    }
}

fn poisoned() -> ProfileStoreError {
    ProfileStoreError::Backend("profile store lock poisoned".to_string())
}

impl ProfileStore for InMemoryProfileStore {
    fn save(&self, profile: StoredProfile) -> Result<(), ProfileStoreError> {
        let mut map = self.profiles.write().map_err(|_| poisoned())?;
        map.insert(
            (profile.user_id, profile.catalog_version.clone()),
            profile,
        );
        Ok(())
    }

    fn get(
        &self,
        user_id: &UserId,
        catalog_version: &CatalogVersion,
    ) -> Result<StoredProfile, ProfileStoreError> {
        let map = self.profiles.read().map_err(|_| poisoned())?;
        map.get(&(*user_id, catalog_version.clone()))
            .cloned()
            .ok_or_else(|| ProfileStoreError::NotFound {
                user_id: *user_id,
                catalog_version: catalog_version.clone(),
            })
    }

    fn has_completed_assessment(
        &self,
        user_id: &UserId,
        catalog_version: &CatalogVersion,
    ) -> Result<bool, ProfileStoreError> {
        let map = self.profiles.read().map_err(|_| poisoned())?;
        Ok(map.contains_key(&(*user_id, catalog_version.clone())))
    }

    fn invalidate_version(
        &self,
        catalog_version: &CatalogVersion,
    ) -> Result<(), ProfileStoreError> {
        let mut map = self.profiles.write().map_err(|_| poisoned())?;
        map.retain(|(_, version), _| version != catalog_version);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::compute_risk_profile;
    use crate::domain::catalog::{default_catalog, AnswerSet};
    use crate::domain::foundation::{AnswerValue, Timestamp};

    fn stored_profile(user_id: UserId, version: &str) -> StoredProfile {
        let catalog = default_catalog();
        let answers: AnswerSet = catalog
            .capacity
            .iter()
            .chain(&catalog.willingness)
            .chain(&catalog.bias)
            .map(|q| (q.id.clone(), AnswerValue::Moderate))
            .collect();
        StoredProfile {
            user_id,
            catalog_version: CatalogVersion::new(version),
            computed_at: Timestamp::from_unix_secs(1704326400).unwrap(),
            result: compute_risk_profile(catalog, &answers).unwrap(),
        }
    }

    #[test]
    fn save_then_get_round_trips() {
        let store = InMemoryProfileStore::new();
        let user_id = UserId::new();
        let profile = stored_profile(user_id, "2026.1");

        store.save(profile.clone()).unwrap();
        let loaded = store
            .get(&user_id, &CatalogVersion::new("2026.1"))
            .unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn get_for_unknown_user_is_not_found() {
        let store = InMemoryProfileStore::new();
        let err = store
            .get(&UserId::new(), &CatalogVersion::new("2026.1"))
            .unwrap_err();
        assert!(matches!(err, ProfileStoreError::NotFound { .. }));
    }

    #[test]
    fn save_replaces_prior_profile_for_same_key() {
        let store = InMemoryProfileStore::new();
        let user_id = UserId::new();
        store.save(stored_profile(user_id, "2026.1")).unwrap();
        store.save(stored_profile(user_id, "2026.1")).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn completion_query_tracks_saved_profiles() {
        let store = InMemoryProfileStore::new();
        let user_id = UserId::new();
        let version = CatalogVersion::new("2026.1");

        assert!(!store.has_completed_assessment(&user_id, &version).unwrap());
        store.save(stored_profile(user_id, "2026.1")).unwrap();
        assert!(store.has_completed_assessment(&user_id, &version).unwrap());
    }

    #[test]
    fn completion_is_per_catalog_version() {
        let store = InMemoryProfileStore::new();
        let user_id = UserId::new();
        store.save(stored_profile(user_id, "2025.2")).unwrap();

        assert!(!store
            .has_completed_assessment(&user_id, &CatalogVersion::new("2026.1"))
            .unwrap());
    }

    #[test]
    fn invalidate_version_drops_only_that_version() {
        let store = InMemoryProfileStore::new();
        let older = UserId::new();
        let newer = UserId::new();
        store.save(stored_profile(older, "2025.2")).unwrap();
        store.save(stored_profile(newer, "2026.1")).unwrap();

        store
            .invalidate_version(&CatalogVersion::new("2025.2"))
            .unwrap();

        assert_eq!(store.len(), 1);
        assert!(store
            .has_completed_assessment(&newer, &CatalogVersion::new("2026.1"))
            .unwrap());
        assert!(!store
            .has_completed_assessment(&older, &CatalogVersion::new("2025.2"))
            .unwrap());
    }

    #[test]
    fn clear_empties_the_store() {
        let store = InMemoryProfileStore::new();
        store.save(stored_profile(UserId::new(), "2026.1")).unwrap();
        store.clear();
        assert!(store.is_empty());
    }
}
