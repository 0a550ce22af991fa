//! Figma REST client for fetching node trees and exporting thumbnails.

use crate::error::{FigInvoiceError, Result};
#[cfg(test)]
use reqwest::header::HeaderMap;
use reqwest::{header::RETRY_AFTER, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use super::api_types::{DesignNode, FigmaImageExport, FigmaNodesResponse, ImageFormat};

pub const DEFAULT_BASE_URL: &str = "https://api.figma.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub enum FigmaAuth {
    PersonalAccessToken(String),
    OAuthToken(String),
}

impl FigmaAuth {
    pub fn from_env() -> Option<Self> {
        if let Ok(token) = std::env::var("FIGMA_TOKEN") {
            if !token.is_empty() {
                return Some(Self::PersonalAccessToken(token));
            }
        }

        if let Ok(token) = std::env::var("FIGMA_OAUTH_TOKEN") {
            if !token.is_empty() {
                return Some(Self::OAuthToken(token));
            }
        }

        None
    }

    /// Like [`FigmaAuth::from_env`] but a missing token is a config error.
    pub fn require_from_env() -> Result<Self> {
        Self::from_env().ok_or_else(|| {
            FigInvoiceError::Config(
                "FIGMA_TOKEN or FIGMA_OAUTH_TOKEN environment variable is required".to_string(),
            )
        })
    }

    fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            FigmaAuth::PersonalAccessToken(token) => builder.header("X-FIGMA-TOKEN", token),
            FigmaAuth::OAuthToken(token) => builder.bearer_auth(token),
        }
    }

    #[cfg(test)]
    fn apply_to_header_map(&self, headers: &mut HeaderMap) {
        match self {
            FigmaAuth::PersonalAccessToken(token) => {
                headers.insert("X-FIGMA-TOKEN", token.parse().unwrap());
            }
            FigmaAuth::OAuthToken(token) => {
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    format!("Bearer {token}").parse().unwrap(),
                );
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImageExportOptions {
    pub scale: f32,
    pub format: ImageFormat,
}

impl Default for ImageExportOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            format: ImageFormat::Png,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: Client,
    auth: FigmaAuth,
    base_url: Url,
}

impl FigmaClient {
    pub fn new(auth: FigmaAuth) -> Result<Self> {
        Self::with_base_url_and_timeout(auth, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    pub fn with_base_url_and_timeout(
        auth: FigmaAuth,
        base_url: impl AsRef<str>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FigInvoiceError::Network)?;

        Ok(Self {
            http,
            auth,
            base_url,
        })
    }

    pub async fn fetch_nodes(
        &self,
        file_key: &str,
        node_ids: &[String],
    ) -> Result<FigmaNodesResponse> {
        validate_node_ids(node_ids, "fetching nodes from Figma")?;

        let mut url = self.endpoint(&format!("/v1/files/{file_key}/nodes"))?;
        url.query_pairs_mut().append_pair("ids", &node_ids.join(","));
        let req = self.auth.apply(self.http.get(url));
        self.send_json(req).await
    }

    /// Fetch one node's document tree.
    ///
    /// A `null` entry in the response (or no entry at all) is reported as
    /// [`FigInvoiceError::NodeNotFound`].
    pub async fn fetch_node(&self, file_key: &str, node_id: &str) -> Result<DesignNode> {
        let mut response = self.fetch_nodes(file_key, &[node_id.to_string()]).await?;
        response
            .nodes
            .remove(node_id)
            .flatten()
            .map(|wrapper| wrapper.document)
            .ok_or_else(|| FigInvoiceError::NodeNotFound(node_id.to_string()))
    }

    /// Ask Figma to render `node_id`. Returns the temporary image URL, or
    /// `None` when Figma declined to render the node.
    pub async fn export_image(
        &self,
        file_key: &str,
        node_id: &str,
        options: ImageExportOptions,
    ) -> Result<Option<String>> {
        validate_scale(options.scale)?;

        let mut url = self.endpoint(&format!("/v1/images/{file_key}"))?;
        url.query_pairs_mut()
            .append_pair("ids", node_id)
            .append_pair("scale", &options.scale.to_string())
            .append_pair("format", options.format.as_str());

        let req = self.auth.apply(self.http.get(url));
        let export: FigmaImageExport = self.send_json(req).await?;
        if let Some(err) = export.err {
            return Err(FigInvoiceError::figma_api(None, err));
        }
        Ok(export.images.get(node_id).cloned().flatten())
    }

    pub async fn download_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FigInvoiceError::Network)?;

        let status = response.status();

        if status.is_success() {
            return response
                .bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(FigInvoiceError::Network);
        }

        let body = response.text().await.unwrap_or_default();
        Err(FigInvoiceError::figma_api(
            Some(status),
            format!(
                "failed to download image (status {}): {}",
                status.as_u16(),
                body
            ),
        ))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(FigInvoiceError::InvalidUrl)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(FigInvoiceError::Network)?;
        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            return serde_json::from_str(&body).map_err(FigInvoiceError::Serialization);
        }

        Err(FigInvoiceError::from_figma_status(
            status,
            error_message(status, &body, retry_after.as_deref()),
        ))
    }
}

fn validate_node_ids(node_ids: &[String], context: &str) -> Result<()> {
    if node_ids.is_empty() {
        return Err(FigInvoiceError::Config(format!(
            "node_ids cannot be empty when {context}"
        )));
    }
    Ok(())
}

fn validate_scale(scale: f32) -> Result<()> {
    if scale <= 0.0 {
        return Err(FigInvoiceError::Config(
            "scale must be greater than zero for Figma exports".into(),
        ));
    }
    Ok(())
}

fn error_message(status: StatusCode, body: &str, retry_after: Option<&str>) -> String {
    let fallback = format!("Figma API returned status {}", status.as_u16());
    let parsed = serde_json::from_str::<Value>(body).ok();
    let from_body = parsed
        .as_ref()
        .and_then(|value| value.get("err").or_else(|| value.get("error")))
        .and_then(Value::as_str)
        .map(str::to_owned);

    match (status, retry_after, from_body) {
        (StatusCode::TOO_MANY_REQUESTS, Some(retry), Some(msg)) => {
            format!("{msg} (rate limited, retry after {retry}s)")
        }
        (StatusCode::TOO_MANY_REQUESTS, Some(retry), None) => {
            format!("rate limited by Figma API, retry after {retry}s")
        }
        (_, _, Some(msg)) => msg,
        _ => fallback,
    }
}
