use crate::draw::Surface;
use crate::input::events::{MouseButton, PointerEvent, PointerKind};
use crate::util::{self, Point, SurfaceBounds};

use super::DrawingSession;

impl DrawingSession {
    /// Processes a pointer press at a surface-local position.
    ///
    /// # Behavior
    /// - Most tools start a new shape and commit it immediately
    /// - The polygon tool starts a polygon, or closes the open one on a middle press
    pub fn pointer_down<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        point: Point,
        button: Option<MouseButton>,
    ) {
        let redraw = self.handler.on_start(&mut self.frame, point, button);
        self.apply_redraw(surface, redraw);
    }

    /// Processes pointer motion at a surface-local position.
    ///
    /// # Behavior
    /// - Freehand tools extend the stroke and paint it
    /// - Rectangle and oval tools resize the shape and replay the surface
    /// - The polygon tool ignores motion
    pub fn pointer_move<S: Surface + ?Sized>(&mut self, surface: &mut S, point: Point) {
        let redraw = self.handler.on_move(&mut self.frame, point);
        self.apply_redraw(surface, redraw);
    }

    /// Processes a pointer release at a surface-local position.
    ///
    /// # Behavior
    /// - Freehand tools finish the stroke
    /// - Rectangle and oval tools take their final size and finish
    /// - The polygon tool adds a vertex
    pub fn pointer_up<S: Surface + ?Sized>(&mut self, surface: &mut S, point: Point) {
        let redraw = self.handler.on_end(&mut self.frame, point);
        self.apply_redraw(surface, redraw);
    }

    /// Processes the pointer leaving the surface.
    ///
    /// Finishes the gesture like a release for every tool except the polygon,
    /// which keeps waiting for clicks.
    pub fn pointer_leave<S: Surface + ?Sized>(&mut self, surface: &mut S, point: Point) {
        let redraw = self.handler.on_leave(&mut self.frame, point);
        self.apply_redraw(surface, redraw);
    }

    /// Maps a raw page-coordinate event onto the surface and routes it.
    pub fn dispatch<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        bounds: SurfaceBounds,
        event: &PointerEvent,
    ) {
        let point = util::map_to_surface(event.page_x, event.page_y, bounds);
        match event.kind {
            PointerKind::Down => self.pointer_down(surface, point, event.button),
            PointerKind::Move => self.pointer_move(surface, point),
            PointerKind::Up => self.pointer_up(surface, point),
            PointerKind::Leave => self.pointer_leave(surface, point),
        }
    }
}
