pub mod sdk;

pub use sdk::app::resolver::{Generation, Resolver};
pub use sdk::app::shell::{Shell, Tab, DIRECTIONS_PLACEHOLDER};
pub use sdk::config::Endpoints;
pub use sdk::geo::{Bounds, LatLng};
pub use sdk::map::layers::{compute_layers, Layer, LayerSet, Marker};
pub use sdk::map::view::{MapView, Viewport};
pub use sdk::routing::error::NavError;
pub use sdk::routing::provider::HttpNavProvider;
pub use sdk::routing::route::{Route, RouteStep};
pub use sdk::routing::service::NavProvider;
pub use sdk::util::rate_limit::Limiter;
