//! # Router Module
//!
//! Maps free-text chat input to a destination page or a notification.
//! Pure keyword matching against ordered literal tables, no ML, no network.
//!
//! ## Components
//! - `intent`: ordered keyword tables → detected chat intent
//! - `routes`: destination table and location-aware URL resolution
//! - `dispatch`: submission decisions and their async execution

pub mod dispatch;
pub mod intent;
pub mod routes;

pub use dispatch::{decide, Decision, Dispatcher, Navigator};
pub use intent::{ChatIntent, IntentDetector};
pub use routes::{Navigation, PathContext, RouteTable, RouteTarget};
