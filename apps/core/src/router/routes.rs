//! Destination table and URL resolution.
//!
//! Page ids map either to a real page of the prototype or to a placeholder
//! notice for pages that do not exist yet. Resolution is location-aware:
//! from inside the `pages/` subdirectory every page URL is prefixed with
//! `../`.

use serde::{Deserialize, Serialize};

/// Where a page id leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// A page that exists, as a path relative to the site root.
    Page(&'static str),
    /// A placeholder for a page that does not exist yet.
    Preview(&'static str),
}

/// The outcome of resolving a page id from a concrete location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Navigation {
    /// Open this URL.
    Open(String),
    /// Show this notification instead of navigating.
    Notice(String),
}

/// Whether the current location is the site root or the `pages/` subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathContext {
    #[default]
    Root,
    PagesSubdirectory,
}

impl PathContext {
    /// Derives the context from a location path.
    pub fn from_location(path: &str) -> Self {
        if path.contains("/pages/") || path.starts_with("pages/") {
            PathContext::PagesSubdirectory
        } else {
            PathContext::Root
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            PathContext::Root => "",
            PathContext::PagesSubdirectory => "../",
        }
    }
}

/// Page id → target, one entry per clickable destination in the prototype.
const ROUTES: &[(&str, RouteTarget)] = &[
    ("index", RouteTarget::Page("index.html")),
    ("home", RouteTarget::Page("index.html")),
    ("upgrade", RouteTarget::Preview("Assistant Plus Upgrade Page")),
    ("privacy-policy", RouteTarget::Page("pages/privacy-policy.html")),
    (
        "generate-privacy-policy",
        RouteTarget::Page("pages/generate-privacy-policy.html"),
    ),
    (
        "create-privacy-policy",
        RouteTarget::Page("pages/generate-privacy-policy.html"),
    ),
    ("carpet-logo", RouteTarget::Preview("Carpet Logo Design Chat")),
    ("rug-warehouse", RouteTarget::Preview("Rug Warehouse Images Chat")),
    ("business-goals", RouteTarget::Preview("Business Goals Setting Chat")),
    ("set-up-llc", RouteTarget::Preview("LLC Setup Chat")),
    ("coming-soon", RouteTarget::Preview("Coming Soon Page Chat")),
    ("generate-images", RouteTarget::Preview("Generate Images - Coming Soon!")),
    ("generate-image", RouteTarget::Preview("Generate Images - Coming Soon!")),
    ("generate-logo", RouteTarget::Page("pages/generate-logo.html")),
    ("marketing-consultant", RouteTarget::Preview("Marketing Consultant Tool")),
    ("connect-yelp", RouteTarget::Preview("Yelp Integration Page")),
    ("design-logo", RouteTarget::Page("pages/generate-logo.html")),
    ("optimize-site", RouteTarget::Preview("Website Optimization Tool")),
    ("generate-images-create", RouteTarget::Preview("Image Generation Tool")),
    ("market-business", RouteTarget::Preview("Business Marketing Tool")),
    (
        "generate-marketing-strategy",
        RouteTarget::Page("pages/generate-marketing-strategy.html"),
    ),
    ("setup-llc", RouteTarget::Preview("LLC Setup Tool")),
    ("domain-search", RouteTarget::Page("pages/domain-search.html")),
    (
        "congratulations",
        RouteTarget::Preview("Congratulations! Your Privacy Policy has been created successfully!"),
    ),
];

/// The prototype's routing table.
#[derive(Debug, Default)]
pub struct RouteTable;

impl RouteTable {
    pub fn new() -> Self {
        Self
    }

    /// Looks up a page id.
    pub fn target(&self, page_id: &str) -> Option<RouteTarget> {
        ROUTES
            .iter()
            .find(|(id, _)| *id == page_id)
            .map(|(_, target)| *target)
    }

    /// Resolves a page id into a navigation outcome.
    ///
    /// Unknown ids produce a generic notice rather than an error; the
    /// prototype never fails a click.
    pub fn resolve(&self, page_id: &str, location: PathContext) -> Navigation {
        match self.target(page_id) {
            Some(RouteTarget::Page(path)) => {
                Navigation::Open(format!("{}{}", location.prefix(), path))
            }
            Some(RouteTarget::Preview(message)) => {
                Navigation::Notice(format!("Opening {}...", message))
            }
            None => Navigation::Notice(format!("Opening {}...", page_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_resolution_from_root() {
        let table = RouteTable::new();

        assert_eq!(
            table.resolve("generate-logo", PathContext::Root),
            Navigation::Open("pages/generate-logo.html".to_string())
        );
    }

    #[test]
    fn test_page_resolution_from_subdirectory() {
        let table = RouteTable::new();

        assert_eq!(
            table.resolve("generate-logo", PathContext::PagesSubdirectory),
            Navigation::Open("../pages/generate-logo.html".to_string())
        );
        assert_eq!(
            table.resolve("home", PathContext::PagesSubdirectory),
            Navigation::Open("../index.html".to_string())
        );
    }

    #[test]
    fn test_preview_resolution() {
        let table = RouteTable::new();

        assert_eq!(
            table.resolve("connect-yelp", PathContext::Root),
            Navigation::Notice("Opening Yelp Integration Page...".to_string())
        );
    }

    #[test]
    fn test_unknown_id_falls_back_to_notice() {
        let table = RouteTable::new();

        assert_eq!(
            table.resolve("no-such-page", PathContext::Root),
            Navigation::Notice("Opening no-such-page...".to_string())
        );
    }

    #[test]
    fn test_location_detection() {
        assert_eq!(
            PathContext::from_location("/site/pages/generate-logo.html"),
            PathContext::PagesSubdirectory
        );
        assert_eq!(PathContext::from_location("/site/index.html"), PathContext::Root);
    }
}
