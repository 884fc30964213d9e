use serde::Deserialize;

use crate::sdk::geo::LatLng;
use crate::sdk::routing::error::NavError;

/// One maneuver of a resolved route, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStep {
    pub instruction: String,
    pub distance_m: u32,
}

/// A resolved driving route: the polyline in map order ([lat, lon]), the two
/// endpoints, and the turn-by-turn steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub start: LatLng,
    pub end: LatLng,
    pub polyline: Vec<LatLng>,
    pub steps: Vec<RouteStep>,
}

// --- Wire structures for the routing service payload ---

#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    pub code: String,
    #[serde(default)]
    pub routes: Vec<WireRoute>,
}

#[derive(Debug, Deserialize)]
pub struct WireRoute {
    #[serde(default)]
    pub legs: Vec<WireLeg>,
    pub geometry: WireGeometry,
}

#[derive(Debug, Deserialize)]
pub struct WireLeg {
    #[serde(default)]
    pub steps: Vec<WireStep>,
}

#[derive(Debug, Deserialize)]
pub struct WireStep {
    #[serde(default)]
    pub maneuver: WireManeuver,
    #[serde(default)]
    pub name: String,
    pub distance: f64,
}

#[derive(Debug, Deserialize, Default)]
pub struct WireManeuver {
    pub instruction: Option<String>,
}

/// GeoJSON line geometry, coordinate pairs in [lon, lat] order.
#[derive(Debug, Deserialize)]
pub struct WireGeometry {
    pub coordinates: Vec<[f64; 2]>,
}

impl WireStep {
    /// Maneuver instruction when present, the road name otherwise. Distance
    /// is rounded to whole meters.
    fn to_route_step(&self) -> RouteStep {
        let instruction = match &self.maneuver.instruction {
            Some(text) if !text.is_empty() => text.clone(),
            _ => self.name.clone(),
        };
        RouteStep {
            instruction,
            distance_m: self.distance.round() as u32,
        }
    }
}

/// Maps the service payload into a `Route`. Takes the first route's first
/// leg for steps and the first route's geometry for the polyline, reordering
/// each [lon, lat] pair to [lat, lon].
pub fn from_response(
    response: DirectionsResponse,
    start: LatLng,
    end: LatLng,
) -> Result<Route, NavError> {
    if response.code != "Ok" {
        return Err(NavError::NoRoute { code: response.code });
    }
    let first = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| NavError::NoRoute { code: "NoRoute".to_string() })?;

    let steps = first
        .legs
        .first()
        .map(|leg| leg.steps.iter().map(WireStep::to_route_step).collect())
        .unwrap_or_default();

    let polyline = first
        .geometry
        .coordinates
        .iter()
        .map(|&[lon, lat]| LatLng::new(lat, lon))
        .collect();

    Ok(Route { start, end, polyline, steps })
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: LatLng = LatLng::new(32.7767, -96.7970);
    const END: LatLng = LatLng::new(32.7555, -97.3308);

    fn parse(body: &str) -> DirectionsResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn non_ok_code_is_a_route_error() {
        let response = parse(r#"{"code": "NoRoute", "routes": []}"#);
        match from_response(response, START, END) {
            Err(NavError::NoRoute { code }) => assert_eq!(code, "NoRoute"),
            other => panic!("expected NoRoute, got {other:?}"),
        }
    }

    #[test]
    fn ok_code_without_routes_is_a_route_error() {
        let response = parse(r#"{"code": "Ok", "routes": []}"#);
        assert!(matches!(
            from_response(response, START, END),
            Err(NavError::NoRoute { .. })
        ));
    }

    #[test]
    fn geometry_pairs_are_reordered_and_count_preserved() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "legs": [{"steps": []}],
                "geometry": {"coordinates": [[-96.797, 32.7767], [-97.0, 32.76], [-97.3308, 32.7555]]}
            }]
        }"#;
        let route = from_response(parse(body), START, END).unwrap();
        assert_eq!(route.polyline.len(), 3);
        assert_eq!(route.polyline[0], LatLng::new(32.7767, -96.797));
        assert_eq!(route.polyline[2], LatLng::new(32.7555, -97.3308));
    }

    #[test]
    fn instruction_falls_back_to_road_name() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "legs": [{"steps": [
                    {"maneuver": {"instruction": "Turn left onto Main Street"}, "name": "Main Street", "distance": 412.4},
                    {"maneuver": {}, "name": "I-30 West", "distance": 1800.6},
                    {"maneuver": {"instruction": ""}, "name": "Exit 16B", "distance": 250.0}
                ]}],
                "geometry": {"coordinates": [[-96.797, 32.7767]]}
            }]
        }"#;
        let route = from_response(parse(body), START, END).unwrap();
        let instructions: Vec<&str> =
            route.steps.iter().map(|s| s.instruction.as_str()).collect();
        assert_eq!(
            instructions,
            vec!["Turn left onto Main Street", "I-30 West", "Exit 16B"]
        );
    }

    #[test]
    fn step_distances_round_to_whole_meters() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "legs": [{"steps": [
                    {"maneuver": {"instruction": "Head west"}, "name": "", "distance": 412.5},
                    {"maneuver": {"instruction": "Arrive"}, "name": "", "distance": 0.4}
                ]}],
                "geometry": {"coordinates": []}
            }]
        }"#;
        let route = from_response(parse(body), START, END).unwrap();
        assert_eq!(route.steps[0].distance_m, 413);
        assert_eq!(route.steps[1].distance_m, 0);
    }

    #[test]
    fn only_the_first_leg_contributes_steps() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "legs": [
                    {"steps": [{"maneuver": {"instruction": "Head north"}, "name": "", "distance": 10.0}]},
                    {"steps": [{"maneuver": {"instruction": "Ignored"}, "name": "", "distance": 20.0}]}
                ],
                "geometry": {"coordinates": []}
            }]
        }"#;
        let route = from_response(parse(body), START, END).unwrap();
        assert_eq!(route.steps.len(), 1);
        assert_eq!(route.steps[0].instruction, "Head north");
    }
}
