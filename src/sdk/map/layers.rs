use crate::sdk::geo::{path_length_m, LatLng};
use crate::sdk::routing::route::Route;

/// Cumulative route distance past which the long-haul airport markers are
/// added, in meters.
pub const AIRPORT_MARKER_THRESHOLD_M: f64 = 100_000.0;

/// Two fixed airports shown on long routes. Demo fixture: the entries are
/// static and unrelated to the query, not derived from live airport data.
pub const AIRPORT_FIXTURE: [(&str, LatLng); 2] = [
    (
        "Dallas/Fort Worth International Airport",
        LatLng::new(32.8998, -97.0403),
    ),
    ("Dallas Love Field", LatLng::new(32.8471, -96.8518)),
];

/// A point marker with its popup text.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    pub popup: String,
}

/// One renderable layer, as the map adapter sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Marker(Marker),
    Polyline(Vec<LatLng>),
}

/// Everything one resolution paints on the map. Owned value; the adapter in
/// `view` turns consecutive sets into layer diffs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerSet {
    pub markers: Vec<Marker>,
    pub polyline: Vec<LatLng>,
}

impl LayerSet {
    /// Flattens the set into individual layers, markers first.
    pub fn layers(&self) -> Vec<Layer> {
        let mut layers: Vec<Layer> =
            self.markers.iter().cloned().map(Layer::Marker).collect();
        if !self.polyline.is_empty() {
            layers.push(Layer::Polyline(self.polyline.clone()));
        }
        layers
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.polyline.is_empty()
    }
}

/// Pure layer computation for a resolved route: start/end markers labeled
/// with the raw address strings, the route polyline, and the airport fixture
/// once the route is long enough. No map state is touched here.
pub fn compute_layers(route: &Route, origin: &str, destination: &str) -> LayerSet {
    let mut markers = vec![
        Marker {
            position: route.start,
            popup: format!("Start: {origin}"),
        },
        Marker {
            position: route.end,
            popup: format!("End: {destination}"),
        },
    ];

    let total_m = path_length_m(&route.polyline);
    if total_m > AIRPORT_MARKER_THRESHOLD_M {
        log::debug!("Route is {:.1} km, adding airport markers", total_m / 1000.0);
        for (name, position) in AIRPORT_FIXTURE {
            markers.push(Marker { position, popup: name.to_string() });
        }
    }

    LayerSet { markers, polyline: route.polyline.clone() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_with_polyline(polyline: Vec<LatLng>) -> Route {
        Route {
            start: polyline[0],
            end: polyline[polyline.len() - 1],
            polyline,
            steps: Vec::new(),
        }
    }

    // Dallas to Fort Worth, roughly 50 km end to end.
    fn short_route() -> Route {
        route_with_polyline(vec![
            LatLng::new(32.7767, -96.7970),
            LatLng::new(32.7661, -97.0639),
            LatLng::new(32.7555, -97.3308),
        ])
    }

    // Dallas to Houston, well past the airport threshold.
    fn long_route() -> Route {
        route_with_polyline(vec![
            LatLng::new(32.7767, -96.7970),
            LatLng::new(31.0, -96.3),
            LatLng::new(29.7604, -95.3698),
        ])
    }

    #[test]
    fn endpoint_markers_carry_address_popups() {
        let layers = compute_layers(&short_route(), "Dallas, TX", "Fort Worth, TX");
        assert_eq!(layers.markers[0].popup, "Start: Dallas, TX");
        assert_eq!(layers.markers[1].popup, "End: Fort Worth, TX");
        assert_eq!(layers.polyline.len(), 3);
    }

    #[test]
    fn short_route_gets_no_airport_markers() {
        let layers = compute_layers(&short_route(), "a", "b");
        assert_eq!(layers.markers.len(), 2);
    }

    #[test]
    fn long_route_gets_exactly_the_two_fixture_airports() {
        let layers = compute_layers(&long_route(), "a", "b");
        assert_eq!(layers.markers.len(), 4);
        let popups: Vec<&str> =
            layers.markers[2..].iter().map(|m| m.popup.as_str()).collect();
        assert_eq!(
            popups,
            vec!["Dallas/Fort Worth International Airport", "Dallas Love Field"]
        );
    }

    #[test]
    fn layers_flatten_markers_then_polyline() {
        let layers = compute_layers(&short_route(), "a", "b").layers();
        assert_eq!(layers.len(), 3);
        assert!(matches!(layers[0], Layer::Marker(_)));
        assert!(matches!(layers[2], Layer::Polyline(_)));
    }
}
