// Chunk: docs/chunks/two_segment_buffer - Two-segment buffer with reserve bookkeeping

//! Gap buffer implementation for efficient text editing.
//!
//! The text is split at the cursor into two growable segments. Insertions and
//! deletions at the cursor are O(1) amortized; moving the cursor is
//! O(distance) because chars migrate between the segments in a single block.
//!
//! ```text
//!  before (document order)        after (reversed)
//!  [ h e l | ]                    [ o l ]   -> "hello", cursor = 3
//!          ^ cursor                    ^ char right of the cursor
//! ```
//!
//! The "gap" is bookkeeping rather than a literal hole: the buffer tracks a
//! notional total capacity, and the reserve (capacity minus text length) is
//! consumed by insertions and replenished by deletions. When the reserve runs
//! out the capacity doubles and the insert side reserves real storage for it.

use std::fmt;

use tracing::{debug, trace};

use crate::error::InvariantError;
use crate::grapheme::{grapheme_len_after, grapheme_len_before};
use crate::types::BufferStats;

/// Capacity hint used by [`GapBuffer::new`] and [`GapBuffer::from_str`].
pub const DEFAULT_CAPACITY_HINT: usize = 1000;
const MIN_CAPACITY: usize = 64;
const GROWTH_FACTOR: usize = 2;

/// A single-cursor text buffer.
///
/// The unit of every operation is one `char` (Unicode scalar value); a
/// multi-byte glyph is never split. Boundary conditions such as deleting at
/// the start of the text are no-ops that report `None` or `false`.
#[derive(Debug, Clone)]
pub struct GapBuffer {
    /// Chars before the cursor, in document order.
    before: Vec<char>,
    /// Chars after the cursor, in reverse order: the char immediately right of
    /// the cursor is the last element.
    after: Vec<char>,
    /// Notional capacity. Never smaller than the text length.
    total_capacity: usize,
}

impl GapBuffer {
    /// Creates a new empty buffer with the default capacity hint.
    pub fn new() -> Self {
        Self::with_capacity("", DEFAULT_CAPACITY_HINT)
    }

    /// Creates a buffer seeded with `text`, cursor at the end.
    ///
    /// Note: We don't implement `FromStr` because seeding a buffer cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        Self::with_capacity(text, DEFAULT_CAPACITY_HINT)
    }

    /// Creates a buffer seeded with `text` and a capacity hint.
    ///
    /// All of `text` lands before the cursor. The initial reserve is
    /// `max(0, capacity_hint - len(text))`. The hint is bookkeeping only:
    /// storage is allocated for `text` alone.
    pub fn with_capacity(text: &str, capacity_hint: usize) -> Self {
        let before: Vec<char> = text.chars().collect();
        let total_capacity = capacity_hint.max(before.len());

        Self {
            before,
            after: Vec::new(),
            total_capacity,
        }
    }

    // ==================== Accessors ====================

    /// Returns the cursor offset in chars. O(1).
    pub fn cursor_position(&self) -> usize {
        self.before.len()
    }

    /// Returns the total char count.
    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    /// Returns true if the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }

    /// Returns the headroom left before the next insertion grows the buffer.
    pub fn reserve_capacity(&self) -> usize {
        self.total_capacity.saturating_sub(self.len())
    }

    /// Returns the notional total capacity (text length plus reserve).
    pub fn total_capacity(&self) -> usize {
        self.total_capacity
    }

    /// Returns the char at a logical offset, or `None` past the end.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        if offset < self.before.len() {
            return Some(self.before[offset]);
        }
        let from_cursor = offset - self.before.len();
        if from_cursor >= self.after.len() {
            return None;
        }
        Some(self.after[self.after.len() - 1 - from_cursor])
    }

    /// Returns an iterator over all chars in document order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.before
            .iter()
            .chain(self.after.iter().rev())
            .copied()
    }

    /// Returns the entire buffer content as a String. O(n).
    pub fn content(&self) -> String {
        let mut text = String::with_capacity(self.len());
        text.extend(self.chars());
        text
    }

    /// Returns a diagnostic snapshot of the buffer layout.
    pub fn stats(&self) -> BufferStats {
        BufferStats {
            before_len: self.before.len(),
            reserve_capacity: self.reserve_capacity(),
            after_len: self.after.len(),
            cursor: self.cursor_position(),
            total_capacity: self.total_capacity,
        }
    }

    /// Checks the internal invariants.
    pub fn verify(&self) -> Result<(), InvariantError> {
        let len = self.len();
        if self.total_capacity < len {
            return Err(InvariantError::CapacityUnderflow {
                len,
                total_capacity: self.total_capacity,
            });
        }
        Ok(())
    }

    #[cfg(debug_assertions)]
    fn assert_consistent(&self) {
        if let Err(err) = self.verify() {
            panic!(
                "gap buffer invariant violated: {}\n  stats: {:?}",
                err,
                self.stats()
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn assert_consistent(&self) {}

    // ==================== Capacity ====================

    /// Grows the notional capacity until at least `needed` chars of reserve
    /// are available.
    ///
    /// Capacity doubles on each step, so a run of single-char insertions
    /// costs O(1) amortized. Text and cursor are untouched.
    ///
    /// Real storage is reserved for at most the text length again (or
    /// `needed`), never for the whole notional reserve.
    fn grow_capacity(&mut self, needed: usize) {
        let old_capacity = self.total_capacity;
        let len = self.len();

        let mut new_capacity = old_capacity;
        while new_capacity - len < needed && new_capacity < usize::MAX {
            new_capacity = new_capacity.saturating_mul(GROWTH_FACTOR).max(MIN_CAPACITY);
        }
        self.total_capacity = new_capacity;

        let storage = len.max(needed).max(MIN_CAPACITY).min(new_capacity - len);
        self.before.reserve(storage);

        trace!(old_capacity, new_capacity, len, "grew buffer capacity");
    }

    fn ensure_reserve(&mut self, needed: usize) {
        if self.reserve_capacity() < needed {
            self.grow_capacity(needed);
        }
    }

    // ==================== Mutations ====================

    /// Inserts a character at the cursor; the cursor advances past it.
    ///
    /// O(1) amortized. Any `char` is accepted, including control characters.
    pub fn insert_char(&mut self, ch: char) {
        self.ensure_reserve(1);
        self.before.push(ch);
        self.assert_consistent();
    }

    /// Inserts a string at the cursor; the cursor ends after the last char.
    pub fn insert_str(&mut self, s: &str) {
        let count = s.chars().count();
        if count == 0 {
            return;
        }
        self.ensure_reserve(count);
        self.before.extend(s.chars());
        self.assert_consistent();
    }

    /// Deletes the character before the cursor (Backspace).
    ///
    /// Returns the deleted character, or `None` at the start of the buffer.
    pub fn delete_backward(&mut self) -> Option<char> {
        let ch = self.before.pop()?;
        self.assert_consistent();
        Some(ch)
    }

    /// Deletes the character after the cursor (Delete key).
    ///
    /// Returns the deleted character, or `None` at the end of the buffer.
    pub fn delete_forward(&mut self) -> Option<char> {
        let ch = self.after.pop()?;
        self.assert_consistent();
        Some(ch)
    }

    // ==================== Cursor Movement ====================

    /// Moves the cursor one char left. Returns false at the start.
    pub fn move_left(&mut self) -> bool {
        match self.before.pop() {
            Some(ch) => {
                self.after.push(ch);
                true
            }
            None => false,
        }
    }

    /// Moves the cursor one char right. Returns false at the end.
    pub fn move_right(&mut self) -> bool {
        match self.after.pop() {
            Some(ch) => {
                self.before.push(ch);
                true
            }
            None => false,
        }
    }

    /// Moves the cursor to `target`, clamped to `[0, len]`.
    ///
    /// Chars between the old and new positions move across in one block, so
    /// the cost is O(|target - cursor|). Returns the offset reached, which is
    /// always the clamped target.
    pub fn move_cursor_to(&mut self, target: usize) -> usize {
        let len = self.len();
        let target = if target > len {
            debug!(requested = target, len, "clamping cursor target to end of buffer");
            len
        } else {
            target
        };

        let cursor = self.before.len();
        if target < cursor {
            let moved = self.before.drain(target..);
            self.after.extend(moved.rev());
        } else if target > cursor {
            let split = self.after.len() - (target - cursor);
            let moved = self.after.drain(split..);
            self.before.extend(moved.rev());
        }

        debug_assert_eq!(self.before.len(), target);
        target
    }

    /// Moves the cursor to `target`, which the caller has already clamped.
    ///
    /// Returns [`InvariantError::TargetOutOfRange`] without moving if
    /// `target` is past the end.
    pub fn try_move_cursor_to(&mut self, target: usize) -> Result<usize, InvariantError> {
        let len = self.len();
        if target > len {
            return Err(InvariantError::TargetOutOfRange { target, len });
        }
        Ok(self.move_cursor_to(target))
    }

    /// Moves the cursor to the start of the buffer (Home).
    pub fn move_to_start(&mut self) {
        self.move_cursor_to(0);
    }

    /// Moves the cursor to the end of the buffer (End).
    pub fn move_to_end(&mut self) {
        self.move_cursor_to(self.len());
    }

    // ==================== Grapheme-Aware Editing ====================
    // Chunk: docs/chunks/grapheme_cluster_awareness - Grapheme-aware cursor movement and deletion

    fn grapheme_len_left(&self) -> usize {
        grapheme_len_before(&self.before)
    }

    fn grapheme_len_right(&self) -> usize {
        grapheme_len_after(self.after.iter().rev().copied())
    }

    /// Moves the cursor left by one grapheme cluster. Returns false at the start.
    pub fn move_grapheme_left(&mut self) -> bool {
        let count = self.grapheme_len_left();
        if count == 0 {
            return false;
        }
        self.move_cursor_to(self.before.len() - count);
        true
    }

    /// Moves the cursor right by one grapheme cluster. Returns false at the end.
    pub fn move_grapheme_right(&mut self) -> bool {
        let count = self.grapheme_len_right();
        if count == 0 {
            return false;
        }
        self.move_cursor_to(self.before.len() + count);
        true
    }

    /// Deletes the grapheme cluster before the cursor.
    ///
    /// Returns the deleted cluster, or `None` at the start of the buffer.
    pub fn delete_grapheme_backward(&mut self) -> Option<String> {
        let count = self.grapheme_len_left();
        if count == 0 {
            return None;
        }
        let start = self.before.len() - count;
        let deleted: String = self.before.drain(start..).collect();
        self.assert_consistent();
        Some(deleted)
    }

    /// Deletes the grapheme cluster after the cursor.
    ///
    /// Returns the deleted cluster, or `None` at the end of the buffer.
    pub fn delete_grapheme_forward(&mut self) -> Option<String> {
        let count = self.grapheme_len_right();
        if count == 0 {
            return None;
        }
        let start = self.after.len() - count;
        let deleted: String = self.after.drain(start..).rev().collect();
        self.assert_consistent();
        Some(deleted)
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
