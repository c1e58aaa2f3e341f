//! Projection engine: state, window geometry and the three coordinate projections

pub mod body;
pub mod coordinate;
pub mod null;
pub mod screen;
pub mod spatial;
pub mod state;
pub mod view;
pub mod world;
pub mod wrap;

pub use body::{Body, BodyShape, Equirectangular, ObliqueCylindrical};
pub use coordinate::{CoordinateProjection, ProjectionView};
pub use null::NullProjection;
pub use screen::ScreenProjection;
pub use spatial::SpatialProjection;
pub use state::{Magnification, ProjectionState, Viewport};
pub use view::ViewGeometry;
pub use world::WorldProjection;
pub use wrap::world_window_mod;
