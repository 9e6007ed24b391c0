use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

mod maps;
mod pets;

pub use self::{maps::*, pets::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] pawmap_boundary::Error),
}

impl Error {
    /// HTTP status of a rejected request.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch(_) => None,
            Self::Api(err) => Some(err.status),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

/// Base URL, HTTP client and credentials shared by all APIs.
#[derive(Clone)]
pub struct Endpoint {
    url: String,
    client: Client,
    token: Option<String>,
}

impl Endpoint {
    /// Every request fails after `timeout`, if given.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        let url = url.into().trim_end_matches('/').to_owned();
        Ok(Self {
            url,
            client,
            token: None,
        })
    }

    #[must_use]
    pub fn with_token(self, token: Option<String>) -> Self {
        Self { token, ..self }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.url);
        log::debug!("{method} {url}");
        let req = self.client.request(method, url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

async fn ensure_ok(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    // Not every failure comes with a JSON body, e.g. from a proxy.
    let err = match response.json::<pawmap_boundary::Error>().await {
        Ok(err) => err,
        Err(_) => pawmap_boundary::Error {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_owned(),
        },
    };
    Err(err.into())
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(ensure_ok(response).await?.json().await?)
}

async fn into_unit(response: Response) -> Result<()> {
    ensure_ok(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_trailing_slashes_from_base_url() {
        let endpoint = Endpoint::new("http://localhost:8080/api/", None).unwrap();
        assert_eq!("http://localhost:8080/api", endpoint.url());
    }

    #[test]
    fn status_of_api_errors() {
        let err = Error::from(pawmap_boundary::Error {
            status: 404,
            message: "Info map not found".into(),
        });
        assert_eq!(Some(404), err.status());
        assert_eq!(None, Error::Fetch("offline".into()).status());
    }
}
