use crate::draw::{Color, ColorSample, Surface};
use crate::input::handler::GestureHandler;
use crate::input::style::StyleUpdate;
use crate::input::tool::Tool;
use log::{debug, warn};

use super::DrawingSession;

impl DrawingSession {
    /// Removes the most recently committed shape and replays the rest.
    ///
    /// The active handler's pending record is forgotten. Undoing with nothing
    /// committed only clears and replays.
    pub fn undo<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        self.handler.clear_pending();
        if self.frame.undo().is_some() {
            debug!("Undo: {} shape(s) remain", self.frame.len());
        } else {
            debug!("Undo with empty history ignored");
        }
        self.render(surface);
    }

    /// Removes every committed shape and clears the surface.
    ///
    /// A gesture in progress carries on with a detached copy of its record:
    /// it keeps growing and painting, but finishing it commits nothing.
    pub fn clear<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.handler.detach(&self.frame);
        self.frame.clear();
        surface.clear();
        debug!("Cleared all shapes");
    }

    /// Updates the session style and forwards the change to the active handler.
    ///
    /// Fill changes are ignored while the active tool draws unfillable shapes.
    /// Returns whether the session style changed.
    pub fn set_style(&mut self, update: StyleUpdate) -> bool {
        if matches!(update, StyleUpdate::Filled(_)) && !self.active_tool().supports_fill() {
            debug!("Fill change ignored; {} shapes cannot be filled", self.active_tool());
            return false;
        }

        let changed = self.style.apply(update);
        self.handler.apply_style(update);

        match update {
            StyleUpdate::WidthDelta(delta) if !changed => {
                warn!(
                    "Line width step {delta:+} ignored; width stays at {}",
                    self.style.line_width
                );
            }
            StyleUpdate::WidthDelta(_) => {
                debug!("Line width set to {}", self.style.line_width);
            }
            StyleUpdate::Color(color) => debug!("Color set to {}", color.to_css()),
            StyleUpdate::Filled(filled) => debug!("Fill set to {filled}"),
        }

        changed
    }

    /// Flips the fill flag and returns the resulting value.
    ///
    /// Unchanged while the active tool cannot fill.
    pub fn toggle_fill(&mut self) -> bool {
        self.set_style(StyleUpdate::Filled(!self.style.filled));
        self.style.filled
    }

    /// Applies a color sampled from the color chooser.
    pub fn set_color_from_sample(&mut self, sample: ColorSample) -> bool {
        self.set_style(StyleUpdate::Color(Color::from(sample)))
    }

    /// Selects a tool, replacing the active handler.
    ///
    /// Any gesture in progress is abandoned: its record keeps its place in the
    /// history (so `undo` still counts it) but is no longer replayed, and the
    /// new handler never touches it.
    pub fn switch_tool(&mut self, tool: Tool) {
        if let Some(id) = self.handler.pending() {
            self.frame.abandon(id);
            debug!("Abandoned {} gesture in progress", self.handler.tool());
        }
        self.handler = GestureHandler::new(tool, self.style);
        debug!("Switched to {tool} tool");
    }
}
