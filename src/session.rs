// Chunk: docs/chunks/session_buffer_slot - Session-owned buffer slot

//! The editing session that owns the document buffer.
//!
//! A session holds exactly one [`GapBuffer`] in a single slot. "New" and
//! "Open" replace the slot's contents wholesale; nothing outside the buffer's
//! own API ever touches its internals. Input handling and rendering borrow the
//! buffer through [`EditorSession::buffer_mut`] and [`EditorSession::buffer`].
//!
//! File I/O stays with the caller: `open_text` takes already-decoded text and
//! `snapshot_text` hands back the content to write.

use std::mem;

use tracing::info;

use gap_edit_buffer::{BufferStats, GapBuffer};

use crate::config::EditorConfig;

/// Everything a renderer needs after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    /// Full document text.
    pub text: String,
    /// Cursor offset in chars.
    pub cursor: usize,
    /// Status bar summary.
    pub status: String,
}

/// An editing session owning a single document buffer.
#[derive(Debug)]
pub struct EditorSession {
    config: EditorConfig,
    buffer: GapBuffer,
    /// Bumped every time the buffer slot is replaced.
    generation: u64,
}

impl EditorSession {
    /// Creates a session with an empty document.
    pub fn new(config: EditorConfig) -> Self {
        let buffer = GapBuffer::with_capacity("", config.capacity_hint);
        Self {
            config,
            buffer,
            generation: 0,
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Returns the current buffer.
    pub fn buffer(&self) -> &GapBuffer {
        &self.buffer
    }

    /// Returns the current buffer for editing.
    pub fn buffer_mut(&mut self) -> &mut GapBuffer {
        &mut self.buffer
    }

    /// Returns how many times the buffer slot has been replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the document with an empty one.
    pub fn new_document(&mut self) {
        self.replace_buffer(GapBuffer::with_capacity("", self.config.capacity_hint));
        info!(generation = self.generation, "started new document");
    }

    /// Replaces the document with `text`, cursor at the end.
    ///
    /// `text` must already be decoded; reading it is the caller's job.
    pub fn open_text(&mut self, text: &str) {
        let buffer = GapBuffer::with_capacity(text, self.config.capacity_hint);
        let len = buffer.len();
        self.replace_buffer(buffer);
        info!(generation = self.generation, len, "opened document");
    }

    /// Swaps in `buffer` and returns the previous one.
    pub fn replace_buffer(&mut self, buffer: GapBuffer) -> GapBuffer {
        self.generation += 1;
        mem::replace(&mut self.buffer, buffer)
    }

    /// Returns the document text for saving.
    pub fn snapshot_text(&self) -> String {
        self.buffer.content()
    }

    /// Returns the buffer's diagnostic snapshot.
    pub fn stats(&self) -> BufferStats {
        self.buffer.stats()
    }

    /// Collects what a renderer reads after each mutation.
    pub fn render_state(&self) -> RenderState {
        let stats = self.buffer.stats();
        RenderState {
            text: self.buffer.content(),
            cursor: stats.cursor,
            status: stats.status_line(),
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
