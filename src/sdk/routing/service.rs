use crate::sdk::geo::LatLng;
use crate::sdk::routing::error::NavError;
use crate::sdk::routing::route::Route;

/// The seam between the resolver and the two external services. Errors are
/// already collapsed to the phase they belong to: `geocode` only fails with
/// `LocationNotFound`, `route` only with `NoRoute`.
pub trait NavProvider: Send + Sync {
    /// Resolves a free-text address to a coordinate.
    fn geocode(&self, address: &str) -> Result<LatLng, NavError>;

    /// Fetches a driving route between two coordinates.
    fn route(&self, start: LatLng, end: LatLng) -> Result<Route, NavError>;
}
