use cairo::{Context, ImageSurface};
use paintboard::draw::color::{BLACK, RED, WHITE};
use paintboard::draw::{CairoSurface, Color};
use paintboard::input::{DrawingSession, MouseButton, StyleConfig, StyleUpdate, Tool};
use paintboard::util::Point;

fn image(width: i32, height: i32) -> ImageSurface {
    ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap()
}

/// Runs `draw` against a Cairo surface backed by `image`, then releases the context.
fn paint_with(
    image: &ImageSurface,
    background: Option<Color>,
    draw: impl FnOnce(&mut CairoSurface),
) {
    let ctx = Context::new(image).unwrap();
    let mut surface = CairoSurface::new(
        ctx,
        image.width() as f64,
        image.height() as f64,
        background,
    );
    draw(&mut surface);
}

/// Returns the (r, g, b, a) bytes of a pixel.
fn pixel(image: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
    image.flush();
    let stride = image.stride() as usize;
    let data = image.data().unwrap();
    let offset = y * stride + x * 4;
    // ARGB32 is stored as native-endian u32: B, G, R, A on little-endian hosts
    let value = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
        (value >> 24) as u8,
    )
}

fn is_dark(rgba: (u8, u8, u8, u8)) -> bool {
    rgba.0 < 64 && rgba.1 < 64 && rgba.2 < 64 && rgba.3 > 192
}

fn session(tool: Tool, color: Color, width: u32, filled: bool) -> DrawingSession {
    DrawingSession::new(tool, StyleConfig::new(color, width, filled))
}

#[test]
fn filled_rectangle_paints_interior() {
    let mut image = image(100, 60);
    paint_with(&image, Some(WHITE), |surface| {
        let mut session = session(Tool::Rectangle, RED, 2, true);
        session.render(surface);
        session.pointer_down(surface, Point::new(10.0, 10.0), Some(MouseButton::Left));
        session.pointer_up(surface, Point::new(40.0, 30.0));
    });

    assert_eq!(pixel(&mut image, 25, 20), (255, 0, 0, 255));
    assert_eq!(pixel(&mut image, 80, 50), (255, 255, 255, 255));
}

#[test]
fn mirrored_stroke_appears_on_both_sides() {
    let mut image = image(200, 100);
    paint_with(&image, Some(WHITE), |surface| {
        let mut session = session(Tool::MirroredFreehand, BLACK, 4, false);
        session.render(surface);
        session.pointer_down(surface, Point::new(20.0, 50.0), Some(MouseButton::Left));
        session.pointer_move(surface, Point::new(40.0, 50.0));
        session.pointer_up(surface, Point::new(40.0, 50.0));
    });

    assert!(is_dark(pixel(&mut image, 30, 50)));
    assert!(is_dark(pixel(&mut image, 170, 50)));
    assert_eq!(pixel(&mut image, 100, 50), (255, 255, 255, 255));
}

#[test]
fn oval_strokes_outline_only() {
    let mut image = image(100, 60);
    paint_with(&image, Some(WHITE), |surface| {
        let mut session = session(Tool::Oval, BLACK, 2, false);
        session.render(surface);
        session.pointer_down(surface, Point::new(50.0, 30.0), Some(MouseButton::Left));
        session.pointer_up(surface, Point::new(70.0, 30.0));
    });

    // Wide aspect: 20px horizontal radius, 10px vertical
    assert!(is_dark(pixel(&mut image, 69, 30)));
    assert!(is_dark(pixel(&mut image, 50, 20)));
    assert_eq!(pixel(&mut image, 50, 30), (255, 255, 255, 255));
    assert_eq!(pixel(&mut image, 50, 12), (255, 255, 255, 255));
}

#[test]
fn undo_removes_last_shape_from_canvas() {
    let mut image = image(100, 60);
    paint_with(&image, Some(WHITE), |surface| {
        let mut session = session(Tool::Rectangle, BLACK, 2, true);
        session.render(surface);
        session.pointer_down(surface, Point::new(5.0, 5.0), Some(MouseButton::Left));
        session.pointer_up(surface, Point::new(25.0, 25.0));
        session.set_style(StyleUpdate::Color(RED));
        session.pointer_down(surface, Point::new(60.0, 5.0), Some(MouseButton::Left));
        session.pointer_up(surface, Point::new(90.0, 25.0));
        session.undo(surface);
    });

    assert!(is_dark(pixel(&mut image, 15, 15)));
    assert_eq!(pixel(&mut image, 75, 15), (255, 255, 255, 255));
}

#[test]
fn transparent_background_clears_to_nothing() {
    let mut image = image(40, 40);
    paint_with(&image, None, |surface| {
        let mut session = session(Tool::Rectangle, RED, 2, true);
        session.pointer_down(surface, Point::new(5.0, 5.0), Some(MouseButton::Left));
        session.pointer_up(surface, Point::new(35.0, 35.0));
        session.clear(surface);
    });

    assert_eq!(pixel(&mut image, 20, 20), (0, 0, 0, 0));
}
