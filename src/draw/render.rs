//! Rendering of shape records against a [`Surface`].

use super::color::Color;
use super::shape::{OvalExtent, Shape};
use super::surface::Surface;
use crate::util::{self, Point};

/// Renders all shapes in a collection to a surface.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
/// The surface is not cleared first; see `DrawingSession::render` for a full replay.
pub fn render_shapes<'a, S, I>(surface: &mut S, shapes: I)
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = &'a Shape>,
{
    for shape in shapes {
        render_shape(surface, shape);
    }
}

/// Renders a single shape to a surface.
///
/// Shapes without enough geometry yet (no points, no second corner, no radius)
/// draw nothing.
pub fn render_shape<S: Surface + ?Sized>(surface: &mut S, shape: &Shape) {
    match shape {
        Shape::Freehand {
            points,
            color,
            width,
        } => {
            render_freehand(surface, points, *color, *width);
        }
        Shape::Rect {
            origin,
            size,
            color,
            width,
            filled,
        } => {
            if let Some((w, h)) = size {
                render_rect(surface, *origin, *w, *h, *color, *width, *filled);
            }
        }
        Shape::Oval {
            center,
            extent,
            color,
            width,
            filled,
        } => {
            if let Some(extent) = extent {
                render_oval(surface, *center, extent, *color, *width, *filled);
            }
        }
        Shape::Polygon {
            points,
            closed,
            color,
            width,
            filled,
        } => {
            render_polygon(surface, points, *color, *width, *closed && *filled);
        }
        Shape::Mirrored {
            points,
            color,
            width,
        } => {
            render_mirrored(surface, points, *color, *width);
        }
    }
}

/// Adds a polyline through `points` to the current path.
fn trace_polyline<S, F>(surface: &mut S, points: &[Point], map_x: F)
where
    S: Surface + ?Sized,
    F: Fn(f64) -> f64,
{
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    surface.move_to(map_x(first.x), first.y);
    for point in rest {
        surface.line_to(map_x(point.x), point.y);
    }
}

fn begin_stroke<S: Surface + ?Sized>(surface: &mut S, color: Color, width: f64) {
    surface.begin_path();
    surface.set_stroke_color(color);
    surface.set_line_width(width);
}

fn fill_with<S: Surface + ?Sized>(surface: &mut S, color: Color) {
    surface.set_fill_color(color);
    surface.fill();
}

/// Render freehand stroke (polyline through points)
fn render_freehand<S: Surface + ?Sized>(surface: &mut S, points: &[Point], color: Color, width: f64) {
    if points.is_empty() {
        return;
    }

    begin_stroke(surface, color, width);
    trace_polyline(surface, points, |x| x);
    surface.stroke();
}

/// Render a freehand stroke and its reflection across the vertical center line
fn render_mirrored<S: Surface + ?Sized>(surface: &mut S, points: &[Point], color: Color, width: f64) {
    if points.is_empty() {
        return;
    }

    let surface_width = surface.width();

    begin_stroke(surface, color, width);
    trace_polyline(surface, points, |x| x);
    surface.stroke();

    // The mirrored subpath joins the same path, so the second stroke repaints both.
    trace_polyline(surface, points, |x| util::mirror_x(x, surface_width));
    surface.stroke();
}

/// Render a rectangle, optionally filled with its border color
fn render_rect<S: Surface + ?Sized>(
    surface: &mut S,
    origin: Point,
    w: f64,
    h: f64,
    color: Color,
    width: f64,
    filled: bool,
) {
    begin_stroke(surface, color, width);
    surface.rect(origin.x, origin.y, w, h);
    surface.stroke();

    if filled {
        fill_with(surface, color);
    }
}

/// Render an oval as a circle stroked under a non-uniform scale
fn render_oval<S: Surface + ?Sized>(
    surface: &mut S,
    center: Point,
    extent: &OvalExtent,
    color: Color,
    width: f64,
    filled: bool,
) {
    if extent.radius <= 0.0 {
        return;
    }

    let aspect = extent.aspect;

    // Only the path is built under the scale; the stroke width stays unscaled.
    surface.save();
    surface.scale(aspect.rx, aspect.ry);
    surface.begin_path();
    surface.arc(
        center.x / aspect.rx,
        center.y / aspect.ry,
        extent.radius,
        0.0,
        2.0 * std::f64::consts::PI,
    );
    surface.restore();

    surface.set_stroke_color(color);
    surface.set_line_width(width);
    surface.stroke();

    if filled {
        fill_with(surface, color);
    }
}

/// Render a polygon outline, filling it once it has been closed
fn render_polygon<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    color: Color,
    width: f64,
    fill: bool,
) {
    if points.is_empty() {
        return;
    }

    begin_stroke(surface, color, width);
    trace_polyline(surface, points, |x| x);
    surface.stroke();

    if fill {
        fill_with(surface, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};
    use crate::draw::shape::Aspect;
    use crate::draw::surface::{RecordingSurface, SurfaceOp};

    #[test]
    fn freehand_strokes_through_points_in_order() {
        let mut surface = RecordingSurface::new(100.0);
        let shape = Shape::Freehand {
            points: vec![
                Point::new(10.0, 10.0),
                Point::new(20.0, 20.0),
                Point::new(30.0, 10.0),
            ],
            color: RED,
            width: 4.0,
        };

        render_shape(&mut surface, &shape);

        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::BeginPath,
                SurfaceOp::StrokeColor(RED),
                SurfaceOp::LineWidth(4.0),
                SurfaceOp::MoveTo(10.0, 10.0),
                SurfaceOp::LineTo(20.0, 20.0),
                SurfaceOp::LineTo(30.0, 10.0),
                SurfaceOp::Stroke,
            ]
        );
    }

    #[test]
    fn empty_freehand_draws_nothing() {
        let mut surface = RecordingSurface::new(100.0);
        render_shape(
            &mut surface,
            &Shape::Freehand {
                points: Vec::new(),
                color: RED,
                width: 2.0,
            },
        );
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn mirrored_stroke_reflects_every_x() {
        let mut surface = RecordingSurface::new(300.0);
        let shape = Shape::Mirrored {
            points: vec![Point::new(30.0, 40.0), Point::new(100.0, 60.0)],
            color: BLUE,
            width: 2.0,
        };

        render_shape(&mut surface, &shape);

        assert_eq!(
            surface.path_points(),
            vec![(30.0, 40.0), (100.0, 60.0), (270.0, 40.0), (200.0, 60.0)]
        );
        assert_eq!(surface.stroke_count(), 2);
    }

    #[test]
    fn rect_without_size_draws_nothing() {
        let mut surface = RecordingSurface::new(100.0);
        render_shape(
            &mut surface,
            &Shape::Rect {
                origin: Point::new(5.0, 5.0),
                size: None,
                color: RED,
                width: 2.0,
                filled: true,
            },
        );
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn filled_rect_fills_with_stroke_color() {
        let mut surface = RecordingSurface::new(100.0);
        render_shape(
            &mut surface,
            &Shape::Rect {
                origin: Point::new(5.0, 5.0),
                size: Some((20.0, -10.0)),
                color: RED,
                width: 3.0,
                filled: true,
            },
        );

        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::BeginPath,
                SurfaceOp::StrokeColor(RED),
                SurfaceOp::LineWidth(3.0),
                SurfaceOp::Rect(5.0, 5.0, 20.0, -10.0),
                SurfaceOp::Stroke,
                SurfaceOp::FillColor(RED),
                SurfaceOp::Fill,
            ]
        );
    }

    #[test]
    fn oval_scales_around_a_unit_circle_then_restores() {
        let mut surface = RecordingSurface::new(200.0);
        render_shape(
            &mut surface,
            &Shape::Oval {
                center: Point::new(50.0, 50.0),
                extent: Some(OvalExtent {
                    radius: 10.0,
                    aspect: Aspect::WIDE,
                }),
                color: BLUE,
                width: 2.0,
                filled: false,
            },
        );

        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::Save,
                SurfaceOp::Scale(1.0, 0.5),
                SurfaceOp::BeginPath,
                SurfaceOp::Arc {
                    cx: 50.0,
                    cy: 100.0,
                    radius: 10.0,
                    start: 0.0,
                    end: 2.0 * std::f64::consts::PI,
                },
                SurfaceOp::Restore,
                SurfaceOp::StrokeColor(BLUE),
                SurfaceOp::LineWidth(2.0),
                SurfaceOp::Stroke,
            ]
        );
    }

    #[test]
    fn open_polygon_is_never_filled() {
        let mut surface = RecordingSurface::new(100.0);
        let mut shape = Shape::Polygon {
            points: vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
            closed: false,
            color: RED,
            width: 2.0,
            filled: true,
        };

        render_shape(&mut surface, &shape);
        assert_eq!(surface.fill_count(), 0);

        shape.close_polygon(true);
        surface.clear();
        render_shape(&mut surface, &shape);
        assert_eq!(surface.fill_count(), 1);
        assert_eq!(
            surface.path_points(),
            vec![(0.0, 0.0), (10.0, 0.0), (0.0, 0.0)]
        );
    }
}
