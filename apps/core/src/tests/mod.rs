//! Test Module
//!
//! Suite-level tests for the prototype interaction core.
//!
//! ## Test Categories
//! - `router_tests`: keyword routing, route table, decision properties
//! - `classifier_tests`: bubble state assignment and the CTA heuristic
//! - `ui_tests`: panel exclusivity, tab switching, notifications
//! - `export_tests`: Figma client and asset export against a mock server
//! - `integration_tests`: dispatcher, navigator and watcher wired together
