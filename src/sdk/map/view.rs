use crate::sdk::geo::{Bounds, LatLng};
use crate::sdk::map::layers::{Layer, LayerSet};

/// Initial map center (downtown Dallas) and zoom.
pub const DEFAULT_CENTER: LatLng = LatLng::new(32.7767, -96.7970);
pub const DEFAULT_ZOOM: u8 = 13;

/// Pixel padding kept around a fitted route.
pub const FIT_PADDING_PX: u32 = 50;

/// Where the map is looking.
#[derive(Debug, Clone, PartialEq)]
pub enum Viewport {
    /// Fixed center and zoom, before any route is applied.
    Centered { center: LatLng, zoom: u8 },
    /// Fitted to a route's bounding box with fixed padding.
    Fitted { bounds: Bounds, padding_px: u32 },
}

/// Layers removed and added by one [`MapView::apply`] call.
#[derive(Debug, Default, PartialEq)]
pub struct LayerDiff {
    pub removed: Vec<Layer>,
    pub added: Vec<Layer>,
}

/// Owned render state of the map: the currently applied layer set and the
/// viewport. Replaces direct add/remove mutation of a shared map object;
/// callers hand in a computed [`LayerSet`] and get back the diff the
/// underlying renderer has to perform.
#[derive(Debug)]
pub struct MapView {
    applied: LayerSet,
    viewport: Viewport,
}

impl MapView {
    pub fn new() -> Self {
        Self {
            applied: LayerSet::default(),
            viewport: Viewport::Centered { center: DEFAULT_CENTER, zoom: DEFAULT_ZOOM },
        }
    }

    pub fn applied(&self) -> &LayerSet {
        &self.applied
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Swaps in a new layer set: every applied marker and line layer is
    /// removed, the new ones are added, and the viewport refits to the new
    /// polyline's bounds. Returns the resulting diff.
    pub fn apply(&mut self, layers: LayerSet) -> LayerDiff {
        let diff = LayerDiff {
            removed: self.applied.layers(),
            added: layers.layers(),
        };

        if let Some(bounds) = Bounds::of(&layers.polyline) {
            self.viewport = Viewport::Fitted { bounds, padding_px: FIT_PADDING_PX };
        }
        self.applied = layers;
        diff
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::map::layers::Marker;

    fn sample_set() -> LayerSet {
        LayerSet {
            markers: vec![
                Marker { position: LatLng::new(32.7767, -96.7970), popup: "Start: a".into() },
                Marker { position: LatLng::new(32.7555, -97.3308), popup: "End: b".into() },
            ],
            polyline: vec![LatLng::new(32.7767, -96.7970), LatLng::new(32.7555, -97.3308)],
        }
    }

    #[test]
    fn starts_centered_with_nothing_applied() {
        let view = MapView::new();
        assert!(view.applied().is_empty());
        assert_eq!(
            *view.viewport(),
            Viewport::Centered { center: DEFAULT_CENTER, zoom: DEFAULT_ZOOM }
        );
    }

    #[test]
    fn first_apply_adds_without_removals_and_fits_viewport() {
        let mut view = MapView::new();
        let diff = view.apply(sample_set());
        assert!(diff.removed.is_empty());
        assert_eq!(diff.added.len(), 3);
        match view.viewport() {
            Viewport::Fitted { bounds, padding_px } => {
                assert_eq!(*padding_px, FIT_PADDING_PX);
                assert_eq!(bounds.south_west, LatLng::new(32.7555, -97.3308));
            }
            other => panic!("expected fitted viewport, got {other:?}"),
        }
    }

    #[test]
    fn reapply_removes_the_previous_layers() {
        let mut view = MapView::new();
        view.apply(sample_set());
        let diff = view.apply(sample_set());
        assert_eq!(diff.removed.len(), 3);
        assert_eq!(diff.added.len(), 3);
    }

    #[test]
    fn empty_polyline_keeps_the_previous_viewport() {
        let mut view = MapView::new();
        view.apply(sample_set());
        let before = view.viewport().clone();
        view.apply(LayerSet::default());
        assert_eq!(*view.viewport(), before);
        assert!(view.applied().is_empty());
    }
}
