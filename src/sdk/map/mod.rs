pub mod layers;
pub mod view;

pub use layers::{compute_layers, Layer, LayerSet, Marker};
pub use view::{MapView, Viewport};
