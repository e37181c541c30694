//! Shape records built by gestures and replayed on redraw.

use super::color::Color;
use crate::util::{self, Point};

/// Horizontal and vertical scale factors used to approximate an ellipse.
///
/// Ovals are a circle stroked under a non-uniform scale, and only two scales
/// exist: wide or tall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aspect {
    pub rx: f64,
    pub ry: f64,
}

impl Aspect {
    /// Wider than tall
    pub const WIDE: Aspect = Aspect { rx: 1.0, ry: 0.5 };
    /// Taller than wide
    pub const TALL: Aspect = Aspect { rx: 0.5, ry: 1.0 };

    /// Picks the aspect from the drag delta between anchor and pointer.
    ///
    /// Wide when the horizontal drag exceeds the vertical one, tall otherwise
    /// (ties included).
    pub fn from_drag(anchor: Point, current: Point) -> Self {
        if (anchor.x - current.x).abs() > (anchor.y - current.y).abs() {
            Self::WIDE
        } else {
            Self::TALL
        }
    }
}

/// Radius and aspect of an oval, known once the pointer has moved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OvalExtent {
    /// Distance from the center to the last pointer position
    pub radius: f64,
    /// Scale pair applied before stroking the circle
    pub aspect: Aspect,
}

/// Represents a drawable record in the session history.
///
/// Each variant corresponds to one drawing tool. Style fields are captured when
/// the record is created; geometry accumulates while the gesture is in progress.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Freehand drawing - polyline connecting pointer drag points
    Freehand {
        /// Points in drawing order
        points: Vec<Point>,
        /// Stroke color
        color: Color,
        /// Line width in pixels
        width: f64,
    },
    /// Rectangle dragged from an anchor corner
    Rect {
        /// Anchor corner where the drag started
        origin: Point,
        /// Signed (width, height); the sign encodes drag direction
        size: Option<(f64, f64)>,
        /// Border (and fill) color
        color: Color,
        /// Border width in pixels
        width: f64,
        /// Whether the interior is filled with the border color
        filled: bool,
    },
    /// Two-state ellipse approximation centered on the drag anchor
    Oval {
        center: Point,
        extent: Option<OvalExtent>,
        color: Color,
        width: f64,
        filled: bool,
    },
    /// Polygon built one vertex per click
    Polygon {
        /// Vertices in click order; the first vertex repeats at the end once closed
        points: Vec<Point>,
        /// Set when the close signal appended the first vertex again
        closed: bool,
        color: Color,
        width: f64,
        filled: bool,
    },
    /// Freehand stroke rendered together with its mirror image
    Mirrored {
        /// Original (unmirrored) points; the reflection is computed at render time
        points: Vec<Point>,
        color: Color,
        width: f64,
    },
}

impl Shape {
    /// Appends a point to a freehand, mirrored, or polygon record.
    ///
    /// Other variants ignore the call.
    pub fn push_point(&mut self, point: Point) {
        match self {
            Shape::Freehand { points, .. }
            | Shape::Mirrored { points, .. }
            | Shape::Polygon { points, .. } => points.push(point),
            Shape::Rect { .. } | Shape::Oval { .. } => {}
        }
    }

    /// Updates drag-derived geometry from the anchor to `current`.
    ///
    /// Rectangles take the signed delta as their size; ovals take the distance
    /// as radius and choose their aspect from the delta. Other variants ignore
    /// the call.
    pub fn drag_to(&mut self, current: Point) {
        match self {
            Shape::Rect { origin, size, .. } => {
                *size = Some((current.x - origin.x, current.y - origin.y));
            }
            Shape::Oval { center, extent, .. } => {
                *extent = Some(OvalExtent {
                    radius: util::distance(*center, current),
                    aspect: Aspect::from_drag(*center, current),
                });
            }
            Shape::Freehand { .. } | Shape::Polygon { .. } | Shape::Mirrored { .. } => {}
        }
    }

    /// Closes a polygon by repeating its first vertex.
    ///
    /// Returns `false` when the record is not an open polygon with at least one vertex.
    pub fn close_polygon(&mut self, fill: bool) -> bool {
        if let Shape::Polygon {
            points,
            closed,
            filled,
            ..
        } = self
        {
            if *closed {
                return false;
            }
            if let Some(&first) = points.first() {
                points.push(first);
                *closed = true;
                *filled = fill;
                return true;
            }
        }
        false
    }

    /// Returns whether the record has enough geometry to draw anything.
    pub fn is_complete(&self) -> bool {
        match self {
            Shape::Freehand { points, .. }
            | Shape::Mirrored { points, .. }
            | Shape::Polygon { points, .. } => !points.is_empty(),
            Shape::Rect { size, .. } => size.is_some(),
            Shape::Oval { extent, .. } => extent.is_some_and(|e| e.radius > 0.0),
        }
    }

    /// Returns the stroke color of the record.
    pub fn color(&self) -> Color {
        match self {
            Shape::Freehand { color, .. }
            | Shape::Rect { color, .. }
            | Shape::Oval { color, .. }
            | Shape::Polygon { color, .. }
            | Shape::Mirrored { color, .. } => *color,
        }
    }
}
