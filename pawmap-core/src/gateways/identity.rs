use async_trait::async_trait;

use super::Result;
use crate::entities::{Profile, UserId};

#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Fails with [`super::Error::NotFound`] if the id is unknown or stale.
    async fn current_user(&self, viewer: UserId) -> Result<Profile>;
}
