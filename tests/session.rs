// Chunk: docs/chunks/session_buffer_slot - Session-owned buffer slot

//! Integration tests for the session slot, driven the way a front end would:
//! one buffer call per input event, then a render snapshot.

use std::io::Write;

use gap_edit::{EditorConfig, EditorSession, GapBuffer};

#[test]
fn test_typing_session_renders_each_step() {
    let mut session = EditorSession::new(EditorConfig { capacity_hint: 4 });

    let mut cursors = Vec::new();
    for ch in "abc".chars() {
        session.buffer_mut().insert_char(ch);
        cursors.push(session.render_state().cursor);
    }
    assert_eq!(cursors, vec![1, 2, 3]);

    session.buffer_mut().move_cursor_to(1);
    session.buffer_mut().insert_char('X');
    let state = session.render_state();
    assert_eq!(state.text, "aXbc");
    assert_eq!(state.cursor, 2);
    // capacity 4 is now fully used
    assert_eq!(state.status, "Cursor: 2 | Length: 4 | Gap: 0");
}

#[test]
fn test_open_edit_save_cycle() {
    let mut session = EditorSession::default();
    session.open_text("Welcome!\n");

    let buffer = session.buffer_mut();
    buffer.move_to_start();
    buffer.insert_str(">> ");

    assert_eq!(session.snapshot_text(), ">> Welcome!\n");
}

#[test]
fn test_reopen_replaces_whole_document() {
    let mut session = EditorSession::default();
    session.open_text("first");
    session.buffer_mut().move_cursor_to(2);

    session.open_text("second document");

    let buffer = session.buffer();
    assert_eq!(buffer.content(), "second document");
    assert_eq!(buffer.cursor_position(), 15);
    assert_eq!(session.generation(), 2);
}

#[test]
fn test_new_document_after_edits() {
    let mut session = EditorSession::default();
    session.buffer_mut().insert_str("scratch");
    session.new_document();

    assert_eq!(session.snapshot_text(), "");
    assert_eq!(session.stats().reserve_capacity, 1000);
}

#[test]
fn test_replace_buffer_built_elsewhere() {
    let mut session = EditorSession::default();
    let mut prepared = GapBuffer::with_capacity("prepared", 8);
    prepared.move_to_start();

    session.replace_buffer(prepared);
    assert_eq!(session.buffer().cursor_position(), 0);
    assert_eq!(session.stats().total_capacity, 8);
}

#[test]
fn test_session_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "capacity_hint": 32 }}"#).unwrap();

    let config = EditorConfig::load_from(file.path()).unwrap();
    let mut session = EditorSession::new(config);
    session.open_text("abc");

    assert_eq!(session.config().capacity_hint, 32);
    assert_eq!(session.stats().reserve_capacity, 29);
}


#[test]
fn test_session_with_maximal_capacity_hint() {
    let config = EditorConfig::from_json(r#"{ "capacity_hint": 18446744073709551615 }"#).unwrap();
    let mut session = EditorSession::new(config);
    session.buffer_mut().insert_str("abc");
    assert_eq!(session.snapshot_text(), "abc");

    session.open_text("reopened");
    session.buffer_mut().insert_char('!');
    assert_eq!(session.snapshot_text(), "reopened!");
    assert_eq!(session.stats().reserve_capacity, usize::MAX - 9);
}
