use reqwest::Method;

use pawmap_boundary::{Bookmark, MapDetail, NewReview, UpdateReview};

use crate::{into_json, into_unit, Endpoint, Result};

/// Places, bookmarks and reviews of the map.
#[derive(Clone)]
pub struct MapApi {
    endpoint: Endpoint,
}

impl MapApi {
    #[must_use]
    pub const fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub async fn place_detail(&self, id: u64, page: u32, size: u32) -> Result<MapDetail> {
        let path = detail_path(id, page, size);
        let response = self.endpoint.request(Method::GET, &path).send().await?;
        into_json(response).await
    }

    pub async fn add_bookmark(&self, bookmark: &Bookmark) -> Result<()> {
        let response = self
            .endpoint
            .request(Method::POST, "/maps/addplace")
            .json(bookmark)
            .send()
            .await?;
        into_unit(response).await
    }

    pub async fn cancel_bookmark(&self, bookmark: &Bookmark) -> Result<()> {
        let response = self
            .endpoint
            .request(Method::DELETE, "/maps/cancel")
            .json(bookmark)
            .send()
            .await?;
        into_unit(response).await
    }

    pub async fn create_review(&self, review: &NewReview) -> Result<()> {
        let response = self
            .endpoint
            .request(Method::POST, "/maps/comments")
            .json(review)
            .send()
            .await?;
        into_unit(response).await
    }

    pub async fn update_review(&self, id: u64, review: &UpdateReview) -> Result<()> {
        let path = format!("/maps/comments/{id}");
        let response = self
            .endpoint
            .request(Method::PATCH, &path)
            .json(review)
            .send()
            .await?;
        into_unit(response).await
    }

    pub async fn delete_review(&self, id: u64) -> Result<()> {
        let path = format!("/maps/comments/{id}");
        let response = self.endpoint.request(Method::DELETE, &path).send().await?;
        into_unit(response).await
    }
}

fn detail_path(id: u64, page: u32, size: u32) -> String {
    format!("/maps/details/{id}?page={page}&size={size}")
}
