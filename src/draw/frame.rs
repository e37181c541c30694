//! Frame container for the committed shape history.

use super::shape::Shape;

/// Stable identifier for a shape committed to a [`Frame`].
///
/// Gesture handlers keep the id of the record they are building and look it up
/// again on every event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId(u64);

/// A shape together with the id it was committed under.
#[derive(Clone, Debug, PartialEq)]
struct CommittedShape {
    id: ShapeId,
    shape: Shape,
    /// Set when the gesture building this shape was dropped by a tool switch.
    /// Abandoned shapes stay in history but are skipped by replay.
    abandoned: bool,
}

/// Container for all shapes in the current drawing session.
///
/// Shapes are kept in commit order, which is also paint order (first = bottom
/// layer, last = top layer). The only removals are popping the tail and
/// clearing everything.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    shapes: Vec<CommittedShape>,
    next_id: u64,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape on top of existing shapes and returns its id.
    pub fn commit(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push(CommittedShape {
            id,
            shape,
            abandoned: false,
        });
        id
    }

    /// Marks a shape as abandoned so replay no longer draws it.
    ///
    /// Returns `false` if no shape with that id is committed.
    pub fn abandon(&mut self, id: ShapeId) -> bool {
        match self.shapes.iter_mut().rev().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.abandoned = true;
                true
            }
            None => false,
        }
    }

    /// Looks up a committed shape by id.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        // The record being built is almost always the newest one.
        self.shapes
            .iter()
            .rev()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.shape)
    }

    /// Looks up a committed shape by id for mutation.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes
            .iter_mut()
            .rev()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.shape)
    }

    /// Removes and returns the most recently committed shape, if any.
    pub fn undo(&mut self) -> Option<Shape> {
        self.shapes.pop().map(|entry| entry.shape)
    }

    /// Removes all shapes from the frame.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Iterates over every committed shape in paint order, abandoned ones included.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().map(|entry| &entry.shape)
    }

    /// Iterates over the shapes replay draws, in paint order.
    pub fn visible_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|entry| !entry.abandoned)
            .map(|entry| &entry.shape)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{GREEN, RED};
    use crate::util::Point;

    fn line(color: crate::draw::Color) -> Shape {
        Shape::Freehand {
            points: vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            color,
            width: 2.0,
        }
    }

    #[test]
    fn undo_pops_only_the_last_shape() {
        let mut frame = Frame::new();
        frame.commit(line(RED));
        frame.commit(line(GREEN));

        assert_eq!(frame.undo(), Some(line(GREEN)));
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.shapes().next(), Some(&line(RED)));
    }

    #[test]
    fn undo_on_empty_frame_is_a_no_op() {
        let mut frame = Frame::new();
        assert_eq!(frame.undo(), None);
        assert!(frame.is_empty());
    }

    #[test]
    fn ids_stay_unique_after_removal() {
        let mut frame = Frame::new();
        let first = frame.commit(line(RED));
        frame.undo();
        let second = frame.commit(line(GREEN));

        assert_ne!(first, second);
        assert!(frame.get(first).is_none());
        assert_eq!(frame.get(second), Some(&line(GREEN)));
    }

    #[test]
    fn abandoned_shapes_stay_in_history_but_not_in_replay() {
        let mut frame = Frame::new();
        frame.commit(line(RED));
        let dropped = frame.commit(line(GREEN));

        assert!(frame.abandon(dropped));
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.visible_shapes().collect::<Vec<_>>(), vec![&line(RED)]);

        // Undo still removes it as the newest entry.
        assert_eq!(frame.undo(), Some(line(GREEN)));
        assert_eq!(frame.visible_shapes().count(), 1);
    }

    #[test]
    fn cleared_ids_no_longer_resolve() {
        let mut frame = Frame::new();
        let id = frame.commit(line(RED));
        frame.clear();
        assert!(frame.get_mut(id).is_none());
    }
}
