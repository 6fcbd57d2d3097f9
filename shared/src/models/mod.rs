//! Domain models for the agricultural intelligence platform

mod dashboard;
mod location;
mod market;
mod report;
mod research;
mod user;
mod weather;

pub use dashboard::*;
pub use location::*;
pub use market::*;
pub use report::*;
pub use research::*;
pub use user::*;
pub use weather::*;
