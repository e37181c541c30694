//! Input handling and the gesture-to-shape state machine.
//!
//! This module translates pointer events into shape records. It holds the
//! drawing session (committed shapes, current style, active tool) and the
//! per-tool gesture handlers that build shapes while the pointer moves.

pub mod events;
pub mod handler;
pub mod state;
pub mod style;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{MouseButton, PointerEvent, PointerKind};
pub use handler::{GestureHandler, Redraw};
pub use state::DrawingSession;
pub use style::{MAX_LINE_WIDTH, MIN_LINE_WIDTH, StyleConfig, StyleUpdate};
pub use tool::{ParseToolError, Tool};
