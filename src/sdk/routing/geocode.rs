use serde::Deserialize;

use crate::sdk::geo::LatLng;
use crate::sdk::routing::error::NavError;

/// One candidate from the geocoding service. The service encodes lat/lon as
/// strings, not numbers.
#[derive(Debug, Deserialize)]
pub struct GeocodeCandidate {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
}

/// Picks the first candidate and parses its coordinate fields. An empty
/// candidate list, or one whose coordinates do not parse, is a failed lookup.
pub fn first_candidate(candidates: Vec<GeocodeCandidate>) -> Result<LatLng, NavError> {
    let first = candidates.into_iter().next().ok_or(NavError::LocationNotFound)?;
    let lat = first.lat.parse::<f64>().map_err(|err| {
        log::error!("Unparseable latitude {:?} in geocode candidate: {}", first.lat, err);
        NavError::LocationNotFound
    })?;
    let lon = first.lon.parse::<f64>().map_err(|err| {
        log::error!("Unparseable longitude {:?} in geocode candidate: {}", first.lon, err);
        NavError::LocationNotFound
    })?;
    Ok(LatLng::new(lat, lon))
}
