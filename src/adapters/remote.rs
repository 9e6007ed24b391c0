//! Gateways backed by the remote HTTP API.

use async_trait::async_trait;
use pawmap_boundary as json;
use pawmap_core::{
    entities::*,
    gateways::{self, IdentityProvider, PlaceService},
};
use pawmap_frontend_api::{self as api, Endpoint, MapApi, PetApi};

pub struct RemotePlaces(MapApi);

impl RemotePlaces {
    pub const fn new(endpoint: Endpoint) -> Self {
        Self(MapApi::new(endpoint))
    }
}

#[async_trait(?Send)]
impl PlaceService for RemotePlaces {
    async fn fetch_place_detail(
        &self,
        place: PlaceId,
        page: PageRequest,
    ) -> gateways::Result<PlaceDetail> {
        let detail = self
            .0
            .place_detail(place.get(), page.page, page.size)
            .await
            .map_err(from_api_error)?;
        PlaceDetail::try_from((place, detail)).map_err(|err| {
            log::warn!("Malformed detail of place {place}: {err}");
            gateways::Error::Unexpected(err.to_string())
        })
    }

    async fn set_bookmark(&self, viewer: UserId, place: PlaceId) -> gateways::Result<()> {
        self.0
            .add_bookmark(&bookmark(viewer, place))
            .await
            .map_err(from_api_error)
    }

    async fn clear_bookmark(&self, viewer: UserId, place: PlaceId) -> gateways::Result<()> {
        self.0
            .cancel_bookmark(&bookmark(viewer, place))
            .await
            .map_err(from_api_error)
    }

    async fn create_review(&self, place: PlaceId, text: &str) -> gateways::Result<()> {
        let review = json::NewReview {
            info_map_id: place.get(),
            contents: text.to_owned(),
        };
        self.0.create_review(&review).await.map_err(from_api_error)
    }

    async fn update_review(&self, review: ReviewId, text: &str) -> gateways::Result<()> {
        let update = json::UpdateReview {
            contents: text.to_owned(),
        };
        self.0
            .update_review(review.get(), &update)
            .await
            .map_err(from_api_error)
    }

    async fn delete_review(&self, review: ReviewId) -> gateways::Result<()> {
        self.0
            .delete_review(review.get())
            .await
            .map_err(from_api_error)
    }
}

pub struct RemoteIdentity(PetApi);

impl RemoteIdentity {
    pub const fn new(endpoint: Endpoint) -> Self {
        Self(PetApi::new(endpoint))
    }
}

#[async_trait(?Send)]
impl IdentityProvider for RemoteIdentity {
    async fn current_user(&self, viewer: UserId) -> gateways::Result<Profile> {
        let info = self
            .0
            .pet_info(viewer.get())
            .await
            .map_err(from_api_error)?;
        Ok(info.into())
    }
}

const fn bookmark(viewer: UserId, place: PlaceId) -> json::Bookmark {
    json::Bookmark {
        pet_id: viewer.get(),
        info_map_id: place.get(),
    }
}

fn from_api_error(err: api::Error) -> gateways::Error {
    match err.status() {
        None => gateways::Error::Network(err.to_string()),
        Some(404) => gateways::Error::NotFound,
        Some(401 | 403) => gateways::Error::Forbidden,
        Some(400 | 409 | 422) => gateways::Error::Validation(err.to_string()),
        Some(_) => gateways::Error::Unexpected(err.to_string()),
    }
}
