//! In-memory profile store

use async_trait::async_trait;
use skinpal_application::{ProfileStoreError, ProfileStorePort};
use skinpal_domain::{ProfileState, SkinProfile, UserId};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Profile store that keeps everything in process memory.
///
/// Useful for one-shot sessions and tests; nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<UserId, SkinProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileStorePort for InMemoryProfileStore {
    async fn get_profile(&self, user: &UserId) -> Result<ProfileState, ProfileStoreError> {
        Ok(self.profiles.read().await.get(user).copied().into())
    }

    async fn save_profile(
        &self,
        user: &UserId,
        profile: &SkinProfile,
    ) -> Result<(), ProfileStoreError> {
        debug!("Storing profile for {} in memory", user);
        self.profiles.write().await.insert(user.clone(), *profile);
        Ok(())
    }
}
