//! Domain layer containing the client's decision logic and record types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, errors)
//! - `legislature` - Records exchanged with the legislature API
//! - `navigation` - Visible-section state machine
//! - `view` - View descriptions and action tables produced by renderers

pub mod foundation;
pub mod legislature;
pub mod navigation;
pub mod view;
