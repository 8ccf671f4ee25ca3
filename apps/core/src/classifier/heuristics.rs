//! Literal phrase tables for recognizing button-generated messages.
//!
//! Best-effort text matching with acknowledged false positives: any short
//! reply containing "Yes" or "No" is treated as button-originated regardless
//! of how it was actually authored. The tables are matched case-sensitively
//! against the label casing buttons render with.

use crate::classifier::state::Bubble;

/// Phrases that mark a message as mirroring a call-to-action button label.
const CTA_PHRASES: &[&str] = &[
    "Try ",
    "Start ",
    "Yes,",
    "Looks Good",
    "Generate",
    "Search",
    "Create",
    "I have a ",
    "Next",
    "Continue",
    "Submit",
    "Send",
    "Apply",
    "Save",
    "Update",
    "Edit",
    "Delete",
    "Cancel",
    "OK",
    "Confirm",
];

/// Words that flag a short reply as a likely button click.
const SHORT_REPLY_WORDS: &[&str] = &["Yes", "No", "Maybe", "Done", "Skip"];

/// Replies at or above this length are never caught by the short-reply rule.
const SHORT_REPLY_MAX_LEN: usize = 50;

/// CSS classes recognized as buttons in the prototype's chat interfaces.
const BUTTON_CLASSES: &[&str] = &[
    "btn",
    "action-btn",
    "standalone-btn",
    "outline-btn",
    "privacy-cta-btn",
    "looks-good-btn",
    "card-btn",
];

/// True when the text matches the CTA phrase table or the short-reply rule.
pub fn matches_cta_text(text: &str) -> bool {
    if CTA_PHRASES.iter().any(|phrase| text.contains(phrase)) {
        return true;
    }
    text.trim().len() < SHORT_REPLY_MAX_LEN
        && SHORT_REPLY_WORDS.iter().any(|word| text.contains(word))
}

/// True when a bubble inside a chat surface looks button-generated.
pub fn looks_button_generated(bubble: &Bubble) -> bool {
    bubble.in_chat_surface() && matches_cta_text(&bubble.text)
}

/// True when an element tag/class combination counts as a button.
pub fn is_recognized_button(tag: &str, classes: &[String]) -> bool {
    tag.eq_ignore_ascii_case("button")
        || classes
            .iter()
            .any(|class| BUTTON_CLASSES.contains(&class.as_str()))
}
