use std::env;

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_ROUTER_URL: &str = "https://router.project-osrm.org";

/// Base URLs of the two external services. The public endpoints are the
/// defaults; the environment can point at self-hosted instances.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub geocoder_url: String,
    pub router_url: String,
}

impl Endpoints {
    pub fn from_env() -> Self {
        Self {
            geocoder_url: env::var("WAYFINDER_GEOCODER_URL")
                .unwrap_or_else(|_| DEFAULT_GEOCODER_URL.to_string()),
            router_url: env::var("WAYFINDER_ROUTER_URL")
                .unwrap_or_else(|_| DEFAULT_ROUTER_URL.to_string()),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            router_url: DEFAULT_ROUTER_URL.to_string(),
        }
    }
}
