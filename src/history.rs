use crate::canvas::{Canvas, Snapshot};

/// Linear undo/redo history made of full-canvas snapshots.
///
/// Each discrete gesture (a stroke, a clear) records the canvas as it was
/// before the gesture. Neither stack is bounded, so memory grows with every
/// gesture for the lifetime of the process.
#[derive(Debug, Default)]
pub struct SnapshotHistory {
    /// States to go back to, most recent last
    undo_stack: Vec<Snapshot>,
    /// States undone, most recent last
    redo_stack: Vec<Snapshot>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the canvas before a gesture mutates it. Invalidates redo.
    ///
    /// Call once per gesture, never per drawn segment, so the whole gesture
    /// undoes as a unit.
    pub fn begin_mutation(&mut self, canvas: &Canvas) {
        self.undo_stack.push(canvas.snapshot());
        if !self.redo_stack.is_empty() {
            log::debug!("Discarding {} redo step(s)", self.redo_stack.len());
            self.redo_stack.clear();
        }
    }

    /// Step back one gesture. Returns false (and changes nothing) when there
    /// is nothing to undo.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(canvas.snapshot());
        canvas.restore(&previous);
        true
    }

    /// Re-apply the most recently undone gesture. Returns false (and changes
    /// nothing) when there is nothing to redo.
    pub fn redo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(canvas.snapshot());
        canvas.restore(&next);
        true
    }

    /// Returns true if there are states that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are states that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}
