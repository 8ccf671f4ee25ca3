//! Thin client for the Figma REST API.
//!
//! Covers exactly the two calls the export run needs: file metadata (for
//! the document tree and styles) and image export URLs. Downloads stream
//! to disk chunk by chunk. The base URL is injectable so tests can point
//! the client at a local mock server.

use crate::config::ImageFormat;
use crate::error::AppError;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use url::Url;

/// Production API root.
pub const FIGMA_API_BASE: &str = "https://api.figma.com/v1";

const TOKEN_HEADER: &str = "X-Figma-Token";

/// A node of the Figma document tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigmaNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub children: Vec<FigmaNode>,
}

/// A published style entry from the file metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigmaStyle {
    pub name: String,
    #[serde(rename = "styleType")]
    pub style_type: String,
}

/// Response of the `/files/{key}` endpoint, trimmed to what the export
/// uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigmaFile {
    #[serde(default)]
    pub name: Option<String>,
    pub document: FigmaNode,
    #[serde(default)]
    pub styles: HashMap<String, FigmaStyle>,
}

/// Response of the `/images/{key}` endpoint. The export URL of a node is
/// `None` when Figma could not render it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageExportBatch {
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default)]
    pub images: HashMap<String, Option<String>>,
}

/// Figma REST client.
pub struct FigmaClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl FigmaClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(FIGMA_API_BASE, token)
    }

    /// Client against an alternative API root (used by tests).
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .header(TOKEN_HEADER, self.token.as_str())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Api(format!(
                "Figma API error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown")
            )));
        }

        Ok(response.json::<T>().await?)
    }

    /// Fetches file metadata: document tree plus published styles.
    pub async fn get_file(&self, file_key: &str) -> Result<FigmaFile, AppError> {
        self.get_json(&format!("/files/{}", file_key), &[]).await
    }

    /// Requests export URLs for a set of nodes.
    pub async fn get_images(
        &self,
        file_key: &str,
        node_ids: &[String],
        format: ImageFormat,
        scale: Option<&str>,
    ) -> Result<ImageExportBatch, AppError> {
        let mut query = vec![
            ("ids", node_ids.join(",")),
            ("format", format.as_str().to_string()),
        ];
        if let Some(scale) = scale {
            query.push(("scale", scale.to_string()));
        }
        self.get_json(&format!("/images/{}", file_key), &query).await
    }

    /// Downloads an exported image to `dest`, streaming chunk by chunk.
    /// Returns the number of bytes written.
    pub async fn download(&self, url: &str, dest: &Path) -> Result<u64, AppError> {
        let url = Url::parse(url)?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Api(format!(
                "Failed to download image: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown")
            )));
        }

        let mut file = std::fs::File::create(dest)?;
        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)?;
            written += chunk.len() as u64;
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_response_parses_defaults() {
        let json = r#"{
            "document": { "id": "0:0", "name": "Document", "type": "DOCUMENT" }
        }"#;
        let file: FigmaFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.document.node_type, "DOCUMENT");
        assert!(file.document.children.is_empty());
        assert!(file.styles.is_empty());
    }

    #[test]
    fn test_image_batch_parses_null_urls() {
        let json = r#"{
            "err": null,
            "images": { "1:2": "https://example.com/a.png", "1:3": null }
        }"#;
        let batch: ImageExportBatch = serde_json::from_str(json).unwrap();
        assert_eq!(
            batch.images.get("1:2").cloned().flatten().as_deref(),
            Some("https://example.com/a.png")
        );
        assert!(batch.images.get("1:3").cloned().flatten().is_none());
    }
}
