//! # Asset Export Module
//!
//! One-off tooling that pulls design assets out of a Figma file: icons,
//! images, and color tokens. Kept independent from the shell; nothing here
//! is reachable from the chat path.
//!
//! ## Components
//! - `figma`: thin REST client for the two endpoints the export needs
//! - `export`: page-scoped asset download
//! - `tokens`: color-token stylesheet generation

pub mod export;
pub mod figma;
pub mod tokens;

pub use export::AssetExporter;
pub use figma::FigmaClient;

/// Kebab-case slug used for exported file names and token names:
/// lowercase, runs of non-alphanumerics collapsed to single dashes,
/// no leading or trailing dash.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Primary / Button"), "primary-button");
        assert_eq!(slugify("Icon 24px"), "icon-24px");
        assert_eq!(slugify("  Hero Image!  "), "hero-image");
        assert_eq!(slugify("___"), "");
    }
}
