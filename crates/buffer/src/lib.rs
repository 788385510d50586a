// Chunk: docs/chunks/two_segment_buffer - Two-segment buffer with reserve bookkeeping

//! gap-edit-buffer: A single-cursor text buffer for the gap-edit editor.
//!
//! This crate provides a gap buffer with cursor tracking and capacity
//! bookkeeping. It is designed for localized editing around one cursor:
//! insertion and backspace are O(1) amortized, and relocating the cursor costs
//! time proportional to the distance moved.
//!
//! # Overview
//!
//! The main type is [`GapBuffer`], which provides:
//! - Character insertion and deletion at the cursor position
//! - Cursor movement by char, by grapheme cluster, or to an absolute offset
//! - Full-text materialization for rendering
//! - A [`BufferStats`] diagnostic snapshot
//!
//! # Example
//!
//! ```
//! use gap_edit_buffer::GapBuffer;
//!
//! let mut buffer = GapBuffer::new();
//! buffer.insert_str("abc");
//! assert_eq!(buffer.cursor_position(), 3);
//!
//! buffer.move_cursor_to(1);
//! buffer.insert_char('X');
//! assert_eq!(buffer.content(), "aXbc");
//!
//! assert_eq!(buffer.delete_backward(), Some('X'));
//! assert_eq!(buffer.content(), "abc");
//! assert_eq!(buffer.cursor_position(), 1);
//! ```
//!
//! # Boundaries
//!
//! Deleting or moving past either end of the text is a no-op reported as
//! `None` or `false`. Only internal invariant breaks surface as
//! [`InvariantError`]; debug builds panic on them after every mutation.

mod error;
mod gap_buffer;
mod grapheme;
mod types;

pub use error::InvariantError;
pub use gap_buffer::{GapBuffer, DEFAULT_CAPACITY_HINT};
pub use types::BufferStats;
