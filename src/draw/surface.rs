//! Drawing surface abstraction and an operation-recording implementation.

use super::color::Color;

/// Path-based 2D drawing primitives that shape records render against.
///
/// Path semantics follow the HTML canvas: `stroke` and `fill` paint the current
/// path without consuming it, and only `begin_path` starts a new one. Stroke and
/// fill colors are state, read when `stroke`/`fill` is issued.
pub trait Surface {
    /// Width of the surface in surface-local units.
    fn width(&self) -> f64;
    /// Erases everything drawn so far.
    fn clear(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Adds a closed rectangle subpath; `w`/`h` may be negative.
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);
    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn stroke(&mut self);
    fn fill(&mut self);
    /// Pushes the current transform.
    fn save(&mut self);
    fn scale(&mut self, sx: f64, sy: f64);
    /// Pops the transform pushed by the matching `save`.
    fn restore(&mut self);
}

/// A single primitive call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Rect(f64, f64, f64, f64),
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
    },
    StrokeColor(Color),
    FillColor(Color),
    LineWidth(f64),
    Stroke,
    Fill,
    Save,
    Scale(f64, f64),
    Restore,
}

/// Surface that records primitive calls instead of rasterizing them.
///
/// `clear` drops the log, so [`ops`](Self::ops) always describes what is
/// visible since the last clear.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    ops: Vec<SurfaceOp>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ops: Vec::new(),
            clears: 0,
        }
    }

    /// Operations issued since the last clear.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Number of times the surface has been cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Every `(x, y)` passed to `move_to`/`line_to` since the last clear.
    pub fn path_points(&self) -> Vec<(f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::MoveTo(x, y) | SurfaceOp::LineTo(x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Number of `stroke` calls since the last clear.
    pub fn stroke_count(&self) -> usize {
        self.count(&SurfaceOp::Stroke)
    }

    /// Number of `fill` calls since the last clear.
    pub fn fill_count(&self) -> usize {
        self.count(&SurfaceOp::Fill)
    }

    fn count(&self, wanted: &SurfaceOp) -> usize {
        self.ops.iter().filter(|op| *op == wanted).count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.clears += 1;
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::LineTo(x, y));
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(SurfaceOp::Rect(x, y, w, h));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.ops.push(SurfaceOp::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::StrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::FillColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::LineWidth(width));
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn fill(&mut self) {
        self.ops.push(SurfaceOp::Fill);
    }

    fn save(&mut self) {
        self.ops.push(SurfaceOp::Save);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(SurfaceOp::Scale(sx, sy));
    }

    fn restore(&mut self) {
        self.ops.push(SurfaceOp::Restore);
    }
}
