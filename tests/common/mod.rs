//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use textarea_engine::editable::{
    Disposition, EditorEvent, Engine, Selection, StringSurface, TextSurface,
};
use textarea_engine::keymap::{KeyCode, Keystroke, Modifiers};
use textarea_engine::util::split_at_char;
use textarea_engine::EngineConfig;

pub type TestEngine = Engine<StringSurface>;

/// Engine with default settings over `text`, selection set as given
pub fn test_engine(text: &str, start: usize, end: usize) -> TestEngine {
    Engine::with_defaults(StringSurface::with_selection(
        text,
        Selection::new(start, end),
    ))
}

/// Engine built from a YAML config string
pub fn test_engine_with_config(yaml: &str, text: &str, start: usize, end: usize) -> TestEngine {
    let config = EngineConfig::from_yaml_str(yaml).expect("test config should parse");
    Engine::attach(
        StringSurface::with_selection(text, Selection::new(start, end)),
        &config,
    )
    .expect("test config should resolve")
}

/// Replace the selection with `s` the way a native text field would
pub fn native_insert(surface: &mut StringSurface, s: &str) {
    let text = surface.text();
    let sel = surface.selection();
    let (left, rest) = split_at_char(&text, sel.start);
    let (_, right) = split_at_char(rest, sel.len());

    surface.set_text(&format!("{}{}{}", left, s, right));
    surface.set_selection(Selection::caret(sel.start + s.chars().count()));
}

/// Delete the selection, or the char before a caret, like Backspace
pub fn native_backspace(surface: &mut StringSurface) {
    let sel = surface.selection();
    if sel.is_caret() {
        if sel.start == 0 {
            return;
        }
        surface.set_selection(Selection::new(sel.start - 1, sel.start));
    }
    native_insert(surface, "");
}

/// Press and release a key; returns the key-down disposition
pub fn press(engine: &mut TestEngine, key: KeyCode, mods: Modifiers) -> Disposition {
    let stroke = Keystroke::new(key, mods);
    let disposition = engine.handle_event(&EditorEvent::KeyDown(stroke));
    engine.handle_event(&EditorEvent::KeyUp(stroke));
    disposition
}

/// Type one character, letting the field insert it natively when the engine passes
pub fn type_char(engine: &mut TestEngine, ch: char) -> Disposition {
    let stroke = Keystroke::new(KeyCode::Char(ch), Modifiers::NONE);
    let disposition = engine.handle_event(&EditorEvent::KeyDown(stroke));
    if disposition == Disposition::PassThrough {
        engine.handle_event(&EditorEvent::BeforeInput);
        native_insert(engine.surface_mut(), &ch.to_string());
        engine.handle_event(&EditorEvent::Input);
    }
    engine.handle_event(&EditorEvent::KeyUp(stroke));
    disposition
}

pub fn type_text(engine: &mut TestEngine, s: &str) {
    for ch in s.chars() {
        type_char(engine, ch);
    }
}

/// Backspace through the engine
pub fn backspace(engine: &mut TestEngine) {
    let stroke = Keystroke::key(KeyCode::Backspace);
    if engine.handle_event(&EditorEvent::KeyDown(stroke)) == Disposition::PassThrough {
        engine.handle_event(&EditorEvent::BeforeInput);
        native_backspace(engine.surface_mut());
        engine.handle_event(&EditorEvent::Input);
    }
    engine.handle_event(&EditorEvent::KeyUp(stroke));
}

/// Move the caret with the mouse
pub fn click(engine: &mut TestEngine, pos: usize) {
    engine.surface_mut().set_selection(Selection::caret(pos));
    engine.handle_event(&EditorEvent::MouseUp);
}

/// Drag-select from `anchor` to `head`
pub fn drag(engine: &mut TestEngine, anchor: usize, head: usize) {
    engine
        .surface_mut()
        .set_selection(Selection::from_anchor_head(anchor, head));
    engine.handle_event(&EditorEvent::MouseUp);
}

pub fn undo(engine: &mut TestEngine) -> Disposition {
    press(engine, KeyCode::Char('z'), Modifiers::cmd())
}

pub fn redo(engine: &mut TestEngine) -> Disposition {
    press(engine, KeyCode::Char('z'), Modifiers::cmd() | Modifiers::SHIFT)
}

pub fn history_texts(engine: &TestEngine) -> Vec<String> {
    engine
        .history()
        .entries()
        .iter()
        .map(|e| e.text.clone())
        .collect()
}
