use reqwest::blocking::Client;
use std::time::Duration;

use crate::sdk::config::Endpoints;
use crate::sdk::geo::LatLng;
use crate::sdk::routing::error::{FetchError, NavError};
use crate::sdk::routing::geocode::{self, GeocodeCandidate};
use crate::sdk::routing::route::{self, DirectionsResponse, Route};
use crate::sdk::routing::service::NavProvider;
use crate::sdk::util::rate_limit::Limiter;

/// HTTP implementation of [`NavProvider`] against the public geocoding and
/// routing endpoints.
pub struct HttpNavProvider {
    client: Client,
    endpoints: Endpoints,
    limiter: Limiter,
}

impl HttpNavProvider {
    pub fn new(endpoints: Endpoints, limiter: Limiter) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .user_agent(concat!("wayfinder/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap(),
            endpoints,
            limiter,
        }
    }

    fn fetch_candidates(&self, address: &str) -> Result<Vec<GeocodeCandidate>, FetchError> {
        self.limiter.wait();
        let url = format!("{}/search", self.endpoints.geocoder_url);
        log::debug!("[PROVIDER] Geocoding {:?}", address);

        let response = self
            .client
            .get(&url)
            .query(&[("q", address), ("format", "json")])
            .send()?;
        let text = response.text()?;

        let candidates = serde_json::from_str(&text).map_err(|e| {
            log::error!(
                "Failed to parse geocode response. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            e
        })?;
        Ok(candidates)
    }

    fn fetch_directions(&self, start: LatLng, end: LatLng) -> Result<DirectionsResponse, FetchError> {
        self.limiter.wait();
        // The routing service keys requests by lon,lat pairs.
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.endpoints.router_url, start.lon, start.lat, end.lon, end.lat
        );
        log::debug!("[PROVIDER] Fetching directions for {} -> {}", start, end);

        let response = self
            .client
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson"), ("steps", "true")])
            .send()?;
        let text = response.text()?;

        let directions = serde_json::from_str(&text).map_err(|e| {
            log::error!(
                "Failed to parse directions response. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            e
        })?;
        Ok(directions)
    }
}

impl NavProvider for HttpNavProvider {
    fn geocode(&self, address: &str) -> Result<LatLng, NavError> {
        let candidates = self.fetch_candidates(address).map_err(|err| {
            log::error!("Geocode request failed for {:?}: {}", address, err);
            NavError::LocationNotFound
        })?;
        geocode::first_candidate(candidates)
    }

    fn route(&self, start: LatLng, end: LatLng) -> Result<Route, NavError> {
        let response = self.fetch_directions(start, end).map_err(|err| {
            log::error!("Directions request failed for {} -> {}: {}", start, end, err);
            NavError::NoRoute { code: "TransportError".to_string() }
        })?;
        if response.code != "Ok" {
            log::error!(
                "Routing service reported code {:?} for {} -> {}",
                response.code,
                start,
                end
            );
        }
        route::from_response(response, start, end)
    }
}
