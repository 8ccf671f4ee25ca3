//! Page-scoped asset export.
//!
//! Collects the top-level children of the configured Figma pages, requests
//! export URLs for them, and downloads each file under a slugified name.
//! Icons and images are independent steps; the caller decides whether a
//! failed step aborts the run (it should not).

use crate::assets::figma::{FigmaClient, FigmaNode};
use crate::assets::slugify;
use crate::config::ExportTarget;
use crate::error::AppError;
use std::fs;
use tracing::{info, warn};

/// Exports assets from one Figma file.
pub struct AssetExporter<'a> {
    client: &'a FigmaClient,
    file_key: &'a str,
}

impl<'a> AssetExporter<'a> {
    pub fn new(client: &'a FigmaClient, file_key: &'a str) -> Self {
        Self { client, file_key }
    }

    /// Top-level children of the pages named in `pages`.
    fn page_nodes<'n>(document: &'n FigmaNode, pages: &[String]) -> Vec<&'n FigmaNode> {
        document
            .children
            .iter()
            .filter(|page| pages.contains(&page.name))
            .flat_map(|page| page.children.iter())
            .collect()
    }

    /// Runs one export step. Returns the number of files written.
    pub async fn export(&self, target: &ExportTarget) -> Result<usize, AppError> {
        let file = self.client.get_file(self.file_key).await?;
        let nodes = Self::page_nodes(&file.document, &target.pages);

        if nodes.is_empty() {
            warn!(pages = ?target.pages, "no exportable nodes found in configured pages");
            return Ok(0);
        }

        let node_ids: Vec<String> = nodes.iter().map(|node| node.id.clone()).collect();
        let batch = self
            .client
            .get_images(self.file_key, &node_ids, target.format, target.scale.as_deref())
            .await?;

        if let Some(err) = batch.err {
            return Err(AppError::Api(err));
        }

        fs::create_dir_all(&target.output_dir)?;

        let mut exported = 0;
        for (node_id, url) in &batch.images {
            let Some(url) = url else {
                warn!(node_id, "no export URL for node, skipping");
                continue;
            };
            let Some(node) = nodes.iter().find(|node| &node.id == node_id) else {
                continue;
            };

            let file_name = format!("{}.{}", slugify(&node.name), target.format.as_str());
            let dest = target.output_dir.join(&file_name);
            let bytes = self.client.download(url, &dest).await?;
            info!(file = %file_name, bytes, "exported asset");
            exported += 1;
        }

        info!(count = exported, "export step finished");
        Ok(exported)
    }
}
