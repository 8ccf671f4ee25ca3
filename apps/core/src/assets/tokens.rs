//! Color-token stylesheet generation.
//!
//! Walks the published styles of a Figma file, keeps the FILL styles, and
//! writes them out as CSS custom properties. The `/files` metadata carries
//! style names but no paint values; resolving actual colors needs the nodes
//! endpoint, so every token is emitted with a placeholder value.

use crate::assets::figma::{FigmaClient, FigmaFile};
use crate::assets::slugify;
use crate::error::AppError;
use chrono::Local;
use std::fs;
use std::path::Path;
use tracing::info;

const PLACEHOLDER_COLOR: &str = "#000000";

/// FILL styles as `(token name, value)` pairs, sorted by name so the
/// generated file is stable across runs.
pub fn color_tokens(file: &FigmaFile) -> Vec<(String, String)> {
    let mut tokens: Vec<(String, String)> = file
        .styles
        .values()
        .filter(|style| style.style_type == "FILL")
        .map(|style| (slugify(&style.name), PLACEHOLDER_COLOR.to_string()))
        .collect();
    tokens.sort();
    tokens.dedup();
    tokens
}

/// Renders the tokens as a `:root` block of CSS custom properties.
pub fn render_stylesheet(tokens: &[(String, String)]) -> String {
    let mut css = String::from("/* Auto-generated from Figma */\n");
    css.push_str(&format!(
        "/* Generated: {} */\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    css.push_str(":root {\n");
    for (name, value) in tokens {
        css.push_str(&format!("  --color-{}: {};\n", name, value));
    }
    css.push_str("}\n");
    css
}

/// Extracts the color tokens of `file_key` and writes the stylesheet to
/// `dest`. Returns the number of tokens written.
pub async fn extract_colors(
    client: &FigmaClient,
    file_key: &str,
    dest: &Path,
) -> Result<usize, AppError> {
    let file = client.get_file(file_key).await?;
    let tokens = color_tokens(&file);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, render_stylesheet(&tokens))?;

    info!(count = tokens.len(), dest = %dest.display(), "color tokens written");
    Ok(tokens.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::figma::{FigmaNode, FigmaStyle};
    use std::collections::HashMap;

    fn file_with_styles(styles: Vec<(&str, &str, &str)>) -> FigmaFile {
        FigmaFile {
            name: None,
            document: FigmaNode {
                id: "0:0".to_string(),
                name: "Document".to_string(),
                node_type: "DOCUMENT".to_string(),
                children: vec![],
            },
            styles: styles
                .into_iter()
                .map(|(key, name, style_type)| {
                    (
                        key.to_string(),
                        FigmaStyle {
                            name: name.to_string(),
                            style_type: style_type.to_string(),
                        },
                    )
                })
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn test_only_fill_styles_become_tokens() {
        let file = file_with_styles(vec![
            ("s1", "Brand / Purple", "FILL"),
            ("s2", "Heading", "TEXT"),
            ("s3", "Surface Grey", "FILL"),
        ]);

        let tokens = color_tokens(&file);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].0, "brand-purple");
        assert_eq!(tokens[1].0, "surface-grey");
    }

    #[test]
    fn test_stylesheet_shape() {
        let tokens = vec![("brand-purple".to_string(), "#000000".to_string())];
        let css = render_stylesheet(&tokens);

        assert!(css.starts_with("/* Auto-generated from Figma */\n"));
        assert!(css.contains(":root {\n"));
        assert!(css.contains("  --color-brand-purple: #000000;\n"));
        assert!(css.ends_with("}\n"));
    }
}
