use async_trait::async_trait;

use super::Result;
use crate::entities::*;

/// The remote source of truth for places, bookmarks and reviews.
#[async_trait(?Send)]
pub trait PlaceService {
    async fn fetch_place_detail(&self, place: PlaceId, page: PageRequest) -> Result<PlaceDetail>;

    async fn set_bookmark(&self, viewer: UserId, place: PlaceId) -> Result<()>;
    async fn clear_bookmark(&self, viewer: UserId, place: PlaceId) -> Result<()>;

    async fn create_review(&self, place: PlaceId, text: &str) -> Result<()>;
    async fn update_review(&self, review: ReviewId, text: &str) -> Result<()>;
    async fn delete_review(&self, review: ReviewId) -> Result<()>;
}
