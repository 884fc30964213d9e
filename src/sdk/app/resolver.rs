use crate::sdk::app::shell::Shell;
use crate::sdk::map::layers::compute_layers;
use crate::sdk::map::view::MapView;
use crate::sdk::routing::error::NavError;
use crate::sdk::routing::route::Route;
use crate::sdk::routing::service::NavProvider;

/// Monotonic id of one resolution attempt. Only the newest attempt may touch
/// the map, so a slow response can never overwrite a newer one.
pub type Generation = u64;

/// Drives one resolution pass: geocode both addresses, fetch the route,
/// compute the layer set, apply it to the map. Failures stop the pass, are
/// logged, and surface on the shell banner; the caller only sees `None`.
pub struct Resolver<P: NavProvider> {
    provider: P,
    current: Generation,
}

impl<P: NavProvider> Resolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, current: 0 }
    }

    /// Starts a new attempt, superseding any attempt still in flight.
    pub fn begin_attempt(&mut self) -> Generation {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, token: Generation) -> bool {
        token == self.current
    }

    /// Applies a resolved route to the shell and map, unless a newer attempt
    /// has started since `token` was issued. Returns whether it applied.
    pub fn apply_resolved(
        &self,
        token: Generation,
        shell: &mut Shell,
        map: &mut MapView,
        route: &Route,
    ) -> bool {
        if !self.is_current(token) {
            log::debug!(
                "Dropping stale resolution result (attempt {} superseded by {})",
                token,
                self.current
            );
            return false;
        }

        let layers = compute_layers(route, shell.origin(), shell.destination());
        let diff = map.apply(layers);
        log::debug!(
            "Map layers updated: {} removed, {} added",
            diff.removed.len(),
            diff.added.len()
        );

        shell.set_directions(route.steps.to_vec());
        shell.clear_error();
        true
    }

    /// Runs one full resolution pass. A no-op returning `None` while either
    /// field is empty; meant to be re-invoked on every state change while
    /// both are filled.
    pub fn resolve(&mut self, shell: &mut Shell, map: &mut MapView) -> Option<Route> {
        if !shell.ready() {
            return None;
        }
        let token = self.begin_attempt();
        let origin = shell.origin().to_string();
        let destination = shell.destination().to_string();

        let start = match self.provider.geocode(&origin) {
            Ok(coord) => coord,
            Err(err) => return self.fail(shell, "Geocoding", &origin, err),
        };
        let end = match self.provider.geocode(&destination) {
            Ok(coord) => coord,
            Err(err) => return self.fail(shell, "Geocoding", &destination, err),
        };

        let route = match self.provider.route(start, end) {
            Ok(route) => route,
            Err(err) => return self.fail(shell, "Routing", &format!("{start} -> {end}"), err),
        };

        if !self.apply_resolved(token, shell, map, &route) {
            return None;
        }
        log::info!(
            "Resolved {:?} -> {:?}: {} polyline points, {} steps",
            origin,
            destination,
            route.polyline.len(),
            route.steps.len()
        );
        Some(route)
    }

    fn fail(&self, shell: &mut Shell, phase: &str, subject: &str, err: NavError) -> Option<Route> {
        log::error!("{} failed for {}: {:?}", phase, subject, err);
        shell.set_error(err.to_string());
        None
    }
}
