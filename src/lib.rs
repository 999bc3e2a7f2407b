//! Parliament Client - headless core of the parliament simulator front end
//!
//! Browses proposals, parties, members and debates served by the legislature
//! API, renders one entity at a time in a detail slot, starts simulations and
//! submits new proposals. The host owns the page; this crate owns what is
//! visible, what each view shows and which actions are bound.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

pub use application::{ClientApp, DispatchError, Outcome};
