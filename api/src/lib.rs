mod config;

use anyhow::Context;
use reqwest::{Client, Method, RequestBuilder, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use types::{Credentials, LoginResponse, ProtectedMessage, Result};

pub use crate::config::{Config, DEFAULT_API_URL};

/// The remote endpoints the pages talk to.
///
/// Implemented by [`PortalClient`] over HTTP, and by in-memory fakes in tests.
#[allow(async_fn_in_trait)]
pub trait PortalApi {
    /// `GET /secret-data`, available to any authenticated user.
    async fn secret_data(&self, token: &SecretString) -> Result<ProtectedMessage>;

    /// `GET /admin-data`, available to admins only.
    async fn admin_data(&self, token: &SecretString) -> Result<ProtectedMessage>;

    /// `POST /login` with form-encoded credentials.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;
}

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let response = self
            .send()
            .await
            .context("request failed")?
            .error_for_status()
            .context("unexpected status")?;
        let body = response.bytes().await.context("failed to read body")?;

        match serde_json::from_slice(&body) {
            Ok(r) => Ok(r),
            Err(error) => {
                tracing::debug!(%error, "failed to parse response");
                Err(anyhow::Error::from(error)
                    .context("malformed response body")
                    .into())
            }
        }
    }
}

#[derive(Clone)]
pub struct PortalClient {
    client: Client,
    base_url: Url,
}

impl PortalClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path)?;
        Ok(self.client.request(method, url))
    }

    fn get_authorized(&self, path: &str, token: &SecretString) -> Result<RequestBuilder> {
        Ok(self
            .request(Method::GET, path)?
            .bearer_auth(token.expose_secret()))
    }
}

impl PortalApi for PortalClient {
    async fn secret_data(&self, token: &SecretString) -> Result<ProtectedMessage> {
        self.get_authorized("secret-data", token)?.try_send().await
    }

    async fn admin_data(&self, token: &SecretString) -> Result<ProtectedMessage> {
        self.get_authorized("admin-data", token)?.try_send().await
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.request(Method::POST, "login")?
            .form(credentials)
            .try_send()
            .await
    }
}
