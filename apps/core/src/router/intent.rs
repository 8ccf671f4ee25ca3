//! Chat intent detection using ordered keyword tables.
//!
//! The tables are literal and ordered; the first category that matches wins.
//! Matching is best-effort: there is no confidence score and no authority
//! beyond "a keyword was present".

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Detected chat intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatIntent {
    /// Privacy-policy generation request.
    PrivacyPolicy,
    /// Marketing-strategy / business-growth request.
    MarketingStrategy,
    /// Image or graphic generation request.
    ImageGeneration,
    /// Logo design request.
    LogoDesign,
}

impl fmt::Display for ChatIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl ChatIntent {
    /// Returns a human-readable label for the intent.
    pub fn label(&self) -> &'static str {
        match self {
            ChatIntent::PrivacyPolicy => "privacy_policy",
            ChatIntent::MarketingStrategy => "marketing_strategy",
            ChatIntent::ImageGeneration => "image_generation",
            ChatIntent::LogoDesign => "logo_design",
        }
    }

    /// The page id this intent routes to.
    pub fn destination(&self) -> &'static str {
        match self {
            ChatIntent::PrivacyPolicy => "generate-privacy-policy",
            ChatIntent::MarketingStrategy => "generate-marketing-strategy",
            ChatIntent::ImageGeneration => "generate-image",
            ChatIntent::LogoDesign => "generate-logo",
        }
    }

    /// The notification shown when this intent is detected.
    pub fn notification(&self) -> &'static str {
        match self {
            ChatIntent::PrivacyPolicy => "Opening Privacy Policy Generator...",
            ChatIntent::MarketingStrategy => "Opening Marketing Strategy Generator...",
            ChatIntent::ImageGeneration => "Opening Image Generator...",
            ChatIntent::LogoDesign => "Opening Logo Generator...",
        }
    }
}

/// Privacy-policy keywords, most specific first.
const PRIVACY_POLICY_KEYWORDS: &[&str] = &[
    "generate privacy policy",
    "create privacy policy",
    "make privacy policy",
    "privacy policy generator",
    "generate my privacy policy",
    "create my privacy policy",
    "make my privacy policy",
    "privacy policy",
    "generate privacypolicy",
    "create privacypolicy",
    "generateprivacypolicy",
    "createprivacypolicy",
];

/// Marketing-strategy keywords.
const MARKETING_KEYWORDS: &[&str] = &[
    "market my business",
    "marketing strategy",
    "business marketing",
    "market business",
    "marketing plan",
    "create marketing strategy",
    "generate marketing strategy",
    "help market my business",
    "marketing consultant",
    "marketing advice",
    "grow my business",
    "business growth",
    "marketmybusiness",
    "marketingstrategy",
];

/// Image-generation keywords.
const IMAGE_KEYWORDS: &[&str] = &[
    "create image",
    "generate image",
    "make image",
    "create picture",
    "generate picture",
    "make picture",
    "design image",
    "image generation",
    "create graphic",
    "generate graphic",
    "make graphic",
    "createimage",
    "generateimage",
    "makeimage",
    "createpicture",
    "generatepicture",
    "makepicture",
];

/// Logo-design keywords.
const LOGO_KEYWORDS: &[&str] = &[
    "design a logo",
    "design logo",
    "create a logo",
    "create logo",
    "make a logo",
    "make logo",
    "generate logo",
    "logo design",
    "logo creation",
    "design my logo",
    "create my logo",
    "new logo",
    "designlogo",
    "createlogo",
    "makelogo",
    "generatelogo",
];

/// Global navigation phrases, tested before any category table.
/// A hit here navigates immediately instead of going through the
/// notification-then-delay path.
const GLOBAL_NAV_PHRASES: &[(&str, &str)] = &[
    ("create a logo", "generate-logo"),
    ("generate a logo", "generate-logo"),
    ("make a logo", "generate-logo"),
    ("create a privacy policy", "generate-privacy-policy"),
    ("generate a privacy policy", "generate-privacy-policy"),
    ("make a privacy policy", "generate-privacy-policy"),
    ("create a marketing plan", "generate-marketing-strategy"),
    ("generate a marketing plan", "generate-marketing-strategy"),
    ("make a marketing plan", "generate-marketing-strategy"),
];

/// Category tables in routing order. First match wins.
const CATEGORIES: &[(ChatIntent, &[&str])] = &[
    (ChatIntent::PrivacyPolicy, PRIVACY_POLICY_KEYWORDS),
    (ChatIntent::MarketingStrategy, MARKETING_KEYWORDS),
    (ChatIntent::ImageGeneration, IMAGE_KEYWORDS),
    (ChatIntent::LogoDesign, LOGO_KEYWORDS),
];

// Compiled once at startup; the pattern is a constant.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace pattern"));

/// Detector over the ordered keyword tables.
#[derive(Debug, Default)]
pub struct IntentDetector;

impl IntentDetector {
    pub fn new() -> Self {
        Self
    }

    /// Lowercases, collapses internal whitespace and trims.
    pub fn normalize(text: &str) -> String {
        WHITESPACE
            .replace_all(&text.to_lowercase(), " ")
            .trim()
            .to_string()
    }

    /// True when any keyword of `table` occurs in `normalized`, either
    /// verbatim or with all spaces removed on both sides (so that
    /// "generateprivacypolicy" still matches "generate privacy policy").
    fn matches_table(normalized: &str, table: &[&str]) -> bool {
        let squashed_text: String = normalized.split(' ').collect();
        table.iter().any(|keyword| {
            let squashed_keyword: String = keyword.split(' ').collect();
            normalized.contains(keyword) || squashed_text.contains(&squashed_keyword)
        })
    }

    /// Tests the input against the category tables in routing order.
    pub fn detect(&self, text: &str) -> Option<ChatIntent> {
        let normalized = Self::normalize(text);
        if normalized.is_empty() {
            return None;
        }
        CATEGORIES
            .iter()
            .find(|(_, table)| Self::matches_table(&normalized, table))
            .map(|(intent, _)| *intent)
    }

    /// Tests the input against the global navigation phrases.
    /// These take priority over every category table.
    pub fn global_destination(&self, text: &str) -> Option<&'static str> {
        let normalized = Self::normalize(text);
        GLOBAL_NAV_PHRASES
            .iter()
            .find(|(phrase, _)| normalized.contains(phrase))
            .map(|(_, destination)| *destination)
    }
}
