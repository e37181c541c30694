//! Cairo-backed implementation of [`Surface`].

use super::color::Color;
use super::surface::Surface;
use anyhow::{Context as _, Result};
use std::fs::File;
use std::path::Path;

/// Draws onto a Cairo context with HTML-canvas path semantics.
///
/// Cairo consumes the path on `stroke`/`fill`, so both map to their
/// `*_preserve` variants; the path is only dropped by `begin_path`. Stroke and
/// fill colors are kept here and applied as the source right before painting.
pub struct CairoSurface {
    ctx: cairo::Context,
    width: f64,
    height: f64,
    stroke_color: Color,
    fill_color: Color,
    /// Color painted by `clear`; `None` clears to transparent
    background: Option<Color>,
}

impl CairoSurface {
    /// Wraps an existing context covering a `width` x `height` area.
    pub fn new(ctx: cairo::Context, width: f64, height: f64, background: Option<Color>) -> Self {
        Self {
            ctx,
            width,
            height,
            stroke_color: super::color::BLACK,
            fill_color: super::color::BLACK,
            background,
        }
    }

    /// Creates an ARGB32 image surface of the given size and a context for it.
    pub fn image(width: i32, height: i32, background: Option<Color>) -> Result<Self> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
            .context("Failed to create image surface")?;
        let ctx = cairo::Context::new(&surface).context("Failed to create cairo context")?;
        ctx.set_line_cap(cairo::LineCap::Butt);
        ctx.set_line_join(cairo::LineJoin::Miter);
        let mut canvas = Self::new(ctx, width as f64, height as f64, background);
        canvas.clear();
        Ok(canvas)
    }

    /// Writes the target image surface to a PNG file.
    pub fn write_png(&self, path: &Path) -> Result<()> {
        let target = self.ctx.target();
        let image = cairo::ImageSurface::try_from(target)
            .map_err(|_| anyhow::anyhow!("Surface target is not an image surface"))?;
        image.flush();

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        image
            .write_to_png(&mut file)
            .with_context(|| format!("Failed to write PNG to {}", path.display()))?;

        log::info!("Wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }

    fn set_source(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

impl Surface for CairoSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn clear(&mut self) {
        let _ = self.ctx.save();
        self.ctx.identity_matrix();
        self.ctx.new_path();
        match self.background {
            Some(bg) => {
                self.ctx.set_operator(cairo::Operator::Source);
                self.set_source(bg);
            }
            None => self.ctx.set_operator(cairo::Operator::Clear),
        }
        self.ctx.rectangle(0.0, 0.0, self.width, self.height);
        let _ = self.ctx.fill();
        let _ = self.ctx.restore();
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.rectangle(x, y, w, h);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.ctx.arc(cx, cy, radius, start, end);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn stroke(&mut self) {
        self.set_source(self.stroke_color);
        let _ = self.ctx.stroke_preserve();
    }

    fn fill(&mut self) {
        self.set_source(self.fill_color);
        let _ = self.ctx.fill_preserve();
    }

    fn save(&mut self) {
        let _ = self.ctx.save();
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ctx.scale(sx, sy);
    }

    fn restore(&mut self) {
        let _ = self.ctx.restore();
    }
}
