pub mod error;
pub mod geocode;
pub mod provider;
pub mod route;
pub mod service;

pub use error::NavError;
pub use provider::HttpNavProvider;
pub use route::{Route, RouteStep};
pub use service::NavProvider;
