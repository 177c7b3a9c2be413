//! HTTP client helpers (REST).

use crate::core::error::ApiError;
use crate::features::moderation::logic::PlannedRequest;
use gloo_net::http::{Request, Response};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    pub(crate) async fn get_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))?;
        check_status(&response)?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))
    }

    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: for<'de> serde::Deserialize<'de>,
        B: serde::Serialize,
    {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|err| ApiError::transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))?;
        check_status(&response)?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))
    }

    pub(crate) async fn post_empty_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .send()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))?;
        check_status(&response)?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))
    }

    /// Execute one planned moderation request, discarding the response body.
    pub(crate) async fn post_planned(&self, request: &PlannedRequest) -> Result<(), ApiError> {
        let builder = Request::post(&self.url(&request.path));
        let sent = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|err| ApiError::transport(err.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|err| ApiError::transport(err.to_string()))?;
        check_status(&response)
    }
}

fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::http(response.status()))
    }
}
