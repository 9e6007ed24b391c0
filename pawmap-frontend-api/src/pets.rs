use reqwest::Method;

use pawmap_boundary::PetInfoResponse;

use crate::{into_json, Endpoint, Result};

/// Profiles of users (pets).
#[derive(Clone)]
pub struct PetApi {
    endpoint: Endpoint,
}

impl PetApi {
    #[must_use]
    pub const fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub async fn pet_info(&self, id: u64) -> Result<PetInfoResponse> {
        let path = format!("/pets/{id}");
        let response = self.endpoint.request(Method::GET, &path).send().await?;
        into_json(response).await
    }
}
