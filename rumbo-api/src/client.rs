use crate::error::ApiError;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use rumbo_session::SessionContext;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// REST client for the booking backend.
///
/// Holds the base URL and the session context; every authenticated call
/// attaches the stored credential as a bearer header. There is no retry or
/// backoff anywhere: failed list loads are retried by the user.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Arc<SessionContext>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Same, with a per-request timeout from configuration.
    pub fn with_timeout(
        base_url: &str,
        session: Arc<SessionContext>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.authorized(self.http.get(self.url(path)))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.authorized(self.http.post(self.url(path)))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.authorized(self.http.put(self.url(path)))
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.authorized(self.http.patch(self.url(path)))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.authorized(self.http.delete(self.url(path)))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.credential() {
            Some(credential) => builder.bearer_auth(credential),
            None => builder,
        }
    }

    /// Send and decode a JSON response body.
    pub(crate) async fn expect_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Send and ignore the response body.
    pub(crate) async fn expect_ok(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Send and return the raw response text (the login endpoint answers
    /// with the bare credential, not JSON).
    pub(crate) async fn expect_text(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::check_status(response).await?;
        response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::debug!("Backend answered 401, treating session as expired");
            return Err(ApiError::SessionExpired);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or(body);

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
