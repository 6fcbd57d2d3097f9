//! Business logic services for the agricultural intelligence service

pub mod auth;
pub mod fallback;
pub mod integration;
pub mod market;
pub mod projection;
pub mod report;
pub mod research;
pub mod session;
pub mod synthetic;
pub mod weather;

pub use auth::AuthService;
pub use integration::DataIntegrationService;
pub use market::MarketService;
pub use report::ReportService;
pub use research::ResearchService;
pub use session::{Clock, ManualClock, Session, SessionStore, SystemClock};
pub use synthetic::SyntheticRng;
pub use weather::WeatherService;
