// Chunk: docs/chunks/two_segment_buffer - Two-segment buffer with reserve bookkeeping

use std::fmt;

use serde::Serialize;

/// Diagnostic snapshot of a buffer's layout.
///
/// Produced by [`GapBuffer::stats`](crate::GapBuffer::stats). Taking a
/// snapshot has no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BufferStats {
    /// Number of chars before the cursor.
    pub before_len: usize,
    /// Headroom left before the next insertion triggers growth.
    pub reserve_capacity: usize,
    /// Number of chars after the cursor.
    pub after_len: usize,
    /// Cursor offset in chars. Always equal to `before_len`.
    pub cursor: usize,
    /// Notional total capacity: text length plus reserve.
    pub total_capacity: usize,
}

impl BufferStats {
    /// Total text length in chars.
    pub fn text_len(&self) -> usize {
        self.before_len + self.after_len
    }

    /// One-line summary suitable for a status bar.
    pub fn status_line(&self) -> String {
        format!(
            "Cursor: {} | Length: {} | Gap: {}",
            self.cursor,
            self.text_len(),
            self.reserve_capacity
        )
    }
}

impl fmt::Display for BufferStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Buffer Statistics:")?;
        writeln!(f, "  Before Length:   {}", self.before_len)?;
        writeln!(f, "  Reserve:         {}", self.reserve_capacity)?;
        writeln!(f, "  After Length:    {}", self.after_len)?;
        writeln!(f, "  Total Capacity:  {}", self.total_capacity)?;
        writeln!(f, "  Cursor Position: {}", self.cursor)?;
        write!(f, "  Text Length:     {}", self.text_len())
    }
}
