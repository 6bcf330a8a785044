//! Application state module

mod app_state;
mod dashboard;
mod listing;
mod marketplace;
mod splash_state;
pub mod wizard;

pub use app_state::*;
pub use dashboard::*;
pub use listing::*;
pub use marketplace::*;
pub use splash_state::*;
