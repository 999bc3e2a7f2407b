//! Navigation - the finite-state view model.
//!
//! - `Section` - which single area of the screen is visible
//! - `NavigationController` - the only owner allowed to change it

mod controller;
mod section;

pub use controller::{Generation, NavigationController};
pub use section::Section;
