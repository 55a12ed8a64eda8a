//! Linear undo/redo history over element snapshots.

use crate::elements::Elements;

/// Snapshot history with a cursor.
///
/// Always holds at least one snapshot, and `index` always points at one of
/// them. Gesture updates overwrite the snapshot under the cursor so a whole
/// drag collapses into a single undo step.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Elements>,
    index: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Elements::new())
    }
}

#[allow(clippy::len_without_is_empty)]
impl History {
    /// Create a history whose only snapshot is `initial`.
    pub fn new(initial: Elements) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
        }
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &Elements {
        &self.snapshots[self.index]
    }

    /// Record a new state.
    ///
    /// With `overwrite`, the snapshot under the cursor is replaced in place.
    /// Otherwise every snapshot after the cursor is discarded, `state` is
    /// appended and the cursor advances onto it.
    pub fn commit(&mut self, state: Elements, overwrite: bool) {
        if overwrite {
            self.snapshots[self.index] = state;
            log::trace!("history: overwrote snapshot {}", self.index);
        } else {
            self.snapshots.truncate(self.index + 1);
            self.snapshots.push(state);
            self.index += 1;
            log::debug!("history: committed snapshot {} of {}", self.index, self.snapshots.len());
        }
    }

    /// Step back one snapshot.
    /// Returns true if the cursor moved, false if already at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one snapshot.
    /// Returns true if the cursor moved, false if already at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        if self.index + 1 >= self.snapshots.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Position of the cursor.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of stored snapshots, never zero.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}
