//! Shared helpers for use cases.

use crate::ports::identity::IdentityPort;
use skinpal_domain::UserId;
use tracing::debug;

/// Id of the signed-in user, or `None` if nobody is signed in.
pub(crate) fn signed_in_user(identity: &dyn IdentityPort) -> Option<UserId> {
    let user = identity.current_user();
    if user.is_none() {
        debug!("No signed-in user");
    }
    user.map(|u| u.id)
}

#[cfg(test)]
pub(crate) mod test_support {
    //! In-memory fakes for the ports.

    use crate::ports::identity::{AuthChanges, CurrentUser, IdentityPort};
    use crate::ports::profile_store::{ProfileStoreError, ProfileStorePort};
    use async_trait::async_trait;
    use skinpal_domain::{
        Budget, Catalog, Category, Concern, FallbackProducts, ProductRule, ProfileState,
        SkinProfile, TipRule, UserId,
    };
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tokio::sync::watch;

    pub struct FakeIdentity {
        sender: watch::Sender<Option<CurrentUser>>,
    }

    impl FakeIdentity {
        pub fn signed_in(id: &str) -> Self {
            let user = CurrentUser::new(UserId::new(id).unwrap());
            Self {
                sender: watch::Sender::new(Some(user)),
            }
        }

        pub fn signed_out() -> Self {
            Self {
                sender: watch::Sender::new(None),
            }
        }
    }

    impl IdentityPort for FakeIdentity {
        fn current_user(&self) -> Option<CurrentUser> {
            self.sender.borrow().clone()
        }

        fn subscribe(&self) -> AuthChanges {
            AuthChanges::new(self.sender.subscribe())
        }
    }

    #[derive(Default)]
    pub struct FakeStore {
        pub profiles: Mutex<HashMap<UserId, SkinProfile>>,
        pub offline: bool,
    }

    impl FakeStore {
        pub fn offline() -> Self {
            Self {
                offline: true,
                ..Default::default()
            }
        }

        pub fn with_profile(id: &str, profile: SkinProfile) -> Self {
            let store = Self::default();
            store
                .profiles
                .lock()
                .unwrap()
                .insert(UserId::new(id).unwrap(), profile);
            store
        }
    }

    #[async_trait]
    impl ProfileStorePort for FakeStore {
        async fn get_profile(&self, user: &UserId) -> Result<ProfileState, ProfileStoreError> {
            if self.offline {
                return Err(ProfileStoreError::Unavailable("offline".into()));
            }
            Ok(self.profiles.lock().unwrap().get(user).copied().into())
        }

        async fn save_profile(
            &self,
            user: &UserId,
            profile: &SkinProfile,
        ) -> Result<(), ProfileStoreError> {
            if self.offline {
                return Err(ProfileStoreError::Unavailable("offline".into()));
            }
            self.profiles
                .lock()
                .unwrap()
                .insert(user.clone(), *profile);
            Ok(())
        }
    }

    pub fn catalog() -> Catalog {
        let fallbacks = FallbackProducts {
            cleanser: vec!["Cetaphil Gentle Skin Cleanser".into()],
            moisturizer: vec!["CeraVe Moisturizing Cream".into()],
            treatment: vec!["The Ordinary Niacinamide 10% + Zinc 1%".into()],
            sunscreen: vec!["Neutrogena Ultra Sheer Dry-Touch SPF 50+".into()],
        };
        let products = vec![
            ProductRule::new(Category::Treatment, vec!["Minimalist 2% Salicylic Acid Serum".into()])
                .with_concern(Concern::Acne)
                .with_budget(Budget::From500To1000),
        ];
        let tips = vec![TipRule::base(
            Category::Sunscreen,
            "Apply sunscreen every morning, even on cloudy days",
        )];
        Catalog::new(1, fallbacks, products, tips).unwrap()
    }
}
