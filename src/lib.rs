// Chunk: docs/chunks/session_buffer_slot - Session-owned buffer slot

//! gap-edit: session layer for a single-cursor gap buffer editor.
//!
//! The text engine lives in the `gap-edit-buffer` crate and is re-exported
//! here. This crate adds the pieces an editor front end wires up around it:
//!
//! - [`EditorSession`] owns the document buffer in a single slot and swaps it
//!   out wholesale on "new" and "open".
//! - [`EditorConfig`] carries the tunables, loaded from a JSON file in the
//!   platform config directory.
//!
//! Keyboard mapping, rendering and file I/O belong to the front end. The
//! session only exposes the calls and snapshots they need.
//!
//! # Example
//!
//! ```
//! use gap_edit::{EditorConfig, EditorSession};
//!
//! let mut session = EditorSession::new(EditorConfig::default());
//! session.open_text("hi");
//!
//! let buffer = session.buffer_mut();
//! buffer.move_cursor_to(0);
//! assert_eq!(buffer.delete_forward(), Some('h'));
//!
//! let state = session.render_state();
//! assert_eq!(state.text, "i");
//! assert_eq!(state.cursor, 0);
//! ```

pub mod config;
pub mod session;

pub use config::{config_file_path, ConfigError, EditorConfig};
pub use gap_edit_buffer::{BufferStats, GapBuffer, InvariantError, DEFAULT_CAPACITY_HINT};
pub use session::{EditorSession, RenderState};
