//! Authorized REST client for the backend API.
//!
//! One `ApiClient` is built at startup and shared through context. It
//! carries the base URL and the injected session manager; every request
//! is assembled by `prepare`, which reads the token freshly at call time
//! and attaches it as a bearer credential when present. Requests without
//! a token go out unauthenticated and the backend rejects them.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: endpoints return `ApiError::Unsupported` so the rest of
//! the crate compiles and tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! There is no response interceptor: a 401 surfaces as
//! `ApiError::Status(401)` and each caller decides how to react. No
//! retries, no backoff, no timeouts beyond the transport's own.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{
    Category, Client, LoginCredentials, NewCategory, NewProduct, Product, RegistrationForm,
    UserProfile,
};
use crate::session::SessionManager;

#[cfg(feature = "csr")]
use crate::net::types::{AuthToken, Envelope};

/// Base URL used when the build does not override `API_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "http://localhost/api";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server rejected the request with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unsupported,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully assembled outgoing request: URL plus every header it will
/// carry. Kept separate from dispatch so header logic is testable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl PreparedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Shared HTTP client with a fixed base URL and an injected session
/// manager for authorization.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionManager,
}

impl ApiClient {
    /// Client pointed at `API_BASE_URL` (compile-time) or the fixed
    /// fallback.
    pub fn new(session: SessionManager) -> Self {
        Self::with_base_url(option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL), session)
    }

    pub fn with_base_url(base_url: &str, session: SessionManager) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Assemble a request for `path`.
    ///
    /// The token is read through the session manager here, immediately
    /// before dispatch, never captured at client construction. A token
    /// stored after the client was built is therefore still honored.
    pub fn prepare(&self, method: Method, path: &str) -> PreparedRequest {
        let mut headers = vec![
            ("Content-Type".to_owned(), "application/json".to_owned()),
            ("Accept".to_owned(), "application/json".to_owned()),
        ];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        PreparedRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
        }
    }

    #[cfg(feature = "csr")]
    async fn dispatch(
        &self,
        request: PreparedRequest,
        body: Option<serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let mut builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&request.url),
            Method::Post => gloo_net::http::Request::post(&request.url),
            Method::Put => gloo_net::http::Request::put(&request.url),
            Method::Delete => gloo_net::http::Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let response = match body {
            Some(json) => builder
                .body(json.to_string())
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response)
    }

    #[cfg(feature = "csr")]
    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: PreparedRequest,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(request, body).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(feature = "csr")]
    async fn send_unit(
        &self,
        request: PreparedRequest,
        body: Option<serde_json::Value>,
    ) -> Result<(), ApiError> {
        self.dispatch(request, body).await.map(|_| ())
    }

    #[cfg(feature = "csr")]
    fn encode<B: serde::Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
        serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /login` — exchange credentials for a token.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self.prepare(Method::Post, "/login");
            let body = Self::encode(credentials)?;
            let envelope: Envelope<AuthToken> = self.send(request, Some(body)).await?;
            Ok(envelope.data.token)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ApiError::Unsupported)
        }
    }

    /// `POST /register` — create an account and receive a token.
    pub async fn register(&self, form: &RegistrationForm) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self.prepare(Method::Post, "/register");
            let body = Self::encode(form)?;
            let envelope: Envelope<AuthToken> = self.send(request, Some(body)).await?;
            Ok(envelope.data.token)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = form;
            Err(ApiError::Unsupported)
        }
    }

    /// `GET /me` — the caller's profile.
    pub async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self.prepare(Method::Get, "/me");
            let envelope: Envelope<UserProfile> = self.send(request, None).await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unsupported)
        }
    }

    /// Fetch the profile and, on success, overwrite the cached session
    /// profile atomically. Failure is logged, propagated, and leaves the
    /// session untouched.
    pub async fn fetch_user(&self) -> Result<UserProfile, ApiError> {
        match self.fetch_profile().await {
            Ok(profile) => {
                self.session.apply_profile(&profile);
                Ok(profile)
            }
            Err(err) => {
                leptos::logging::error!("profile fetch failed: {err}");
                Err(err)
            }
        }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self.prepare(Method::Get, "/products");
            let envelope: Envelope<Vec<Product>> = self.send(request, None).await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unsupported)
        }
    }

    pub async fn create_product(&self, draft: &NewProduct) -> Result<Product, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self.prepare(Method::Post, "/products");
            let body = Self::encode(draft)?;
            let envelope: Envelope<Product> = self.send(request, Some(body)).await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = draft;
            Err(ApiError::Unsupported)
        }
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self.prepare(Method::Delete, &format!("/products/{id}"));
            self.send_unit(request, None).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unsupported)
        }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self.prepare(Method::Get, "/categories");
            let envelope: Envelope<Vec<Category>> = self.send(request, None).await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unsupported)
        }
    }

    pub async fn create_category(&self, draft: &NewCategory) -> Result<Category, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self.prepare(Method::Post, "/categories");
            let body = Self::encode(draft)?;
            let envelope: Envelope<Category> = self.send(request, Some(body)).await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = draft;
            Err(ApiError::Unsupported)
        }
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self.prepare(Method::Delete, &format!("/categories/{id}"));
            self.send_unit(request, None).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unsupported)
        }
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self.prepare(Method::Get, "/clients");
            let envelope: Envelope<Vec<Client>> = self.send(request, None).await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unsupported)
        }
    }

    pub async fn delete_client(&self, uuid: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self.prepare(Method::Delete, &format!("/clients/{uuid}"));
            self.send_unit(request, None).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = uuid;
            Err(ApiError::Unsupported)
        }
    }
}
