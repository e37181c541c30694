//! Shape records, the committed-shape frame, and rendering.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: Replayable records built by the drawing tools
//! - [`Frame`]: Ordered container for all committed shapes
//! - [`Surface`]: The drawing primitives shapes render against, with a Cairo
//!   implementation and an operation-recording one

pub mod cairo_surface;
pub mod color;
pub mod frame;
pub mod render;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use cairo_surface::CairoSurface;
pub use color::{Color, ColorSample};
pub use frame::{Frame, ShapeId};
pub use render::{render_shape, render_shapes};
pub use shape::{Aspect, OvalExtent, Shape};
pub use surface::{RecordingSurface, Surface, SurfaceOp};

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PURPLE, RED, TRANSPARENT, WHITE, YELLOW};
