//! Event dispatch tests - dispositions and hooks

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{click, press, test_engine, type_char, type_text, undo, TestEngine};
use textarea_engine::editable::{Disposition, EditorEvent, HookKind};
use textarea_engine::keymap::{KeyCode, Keystroke, Modifiers};

/// Record (kind, history length) for every hook call
fn record_hooks(engine: &mut TestEngine) -> Rc<RefCell<Vec<(HookKind, usize)>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for kind in [
        HookKind::Undo,
        HookKind::Redo,
        HookKind::KeyDown,
        HookKind::KeyUp,
        HookKind::MouseUp,
        HookKind::BeforeEdit,
        HookKind::AfterEdit,
    ] {
        let log = Rc::clone(&log);
        engine.set_hook(kind, move |_, history| {
            log.borrow_mut().push((kind, history.len()));
        });
    }
    log
}

#[test]
fn test_typing_fires_edit_hooks_in_order() {
    let mut engine = test_engine("", 0, 0);
    click(&mut engine, 0);
    let log = record_hooks(&mut engine);

    type_char(&mut engine, 'a');

    assert_eq!(
        log.borrow().as_slice(),
        &[
            (HookKind::KeyDown, 1),
            (HookKind::BeforeEdit, 1),
            (HookKind::AfterEdit, 2),
            (HookKind::KeyUp, 2),
        ]
    );
}

#[test]
fn test_undo_fires_only_undo_hook() {
    let mut engine = test_engine("", 0, 0);
    click(&mut engine, 0);
    type_text(&mut engine, "ab");
    let log = record_hooks(&mut engine);

    engine.handle_event(&EditorEvent::KeyDown(Keystroke::new(
        KeyCode::Char('z'),
        Modifiers::cmd(),
    )));

    assert_eq!(log.borrow().as_slice(), &[(HookKind::Undo, 3)]);
}

#[test]
fn test_redo_fires_only_redo_hook() {
    let mut engine = test_engine("", 0, 0);
    click(&mut engine, 0);
    type_text(&mut engine, "ab");
    undo(&mut engine);
    let log = record_hooks(&mut engine);

    engine.handle_event(&EditorEvent::KeyDown(Keystroke::new(
        KeyCode::Char('z'),
        Modifiers::cmd() | Modifiers::SHIFT,
    )));

    assert_eq!(log.borrow().as_slice(), &[(HookKind::Redo, 3)]);
    assert_eq!(engine.text(), "ab");
}

#[test]
fn test_handled_keys_fire_keydown_after_snapshot() {
    let mut engine = test_engine("x", 0, 0);
    let log = record_hooks(&mut engine);

    assert_eq!(
        press(&mut engine, KeyCode::Tab, Modifiers::NONE),
        Disposition::Handled
    );
    assert_eq!(
        log.borrow().as_slice(),
        &[(HookKind::KeyDown, 1), (HookKind::KeyUp, 1)]
    );
}

#[test]
fn test_mouseup_fires_hook_after_checkpoint() {
    let mut engine = test_engine("abc", 0, 0);
    let log = record_hooks(&mut engine);

    click(&mut engine, 2);
    click(&mut engine, 2);

    assert_eq!(
        log.borrow().as_slice(),
        &[(HookKind::MouseUp, 1), (HookKind::MouseUp, 1)]
    );
}

#[test]
fn test_hook_receives_event_and_entries() {
    let mut engine = test_engine("", 0, 0);
    click(&mut engine, 0);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    engine.set_hook(HookKind::AfterEdit, move |event, history| {
        let last = history.last().map(|e| e.text.clone()).unwrap_or_default();
        sink.borrow_mut().push((*event, last));
    });

    type_text(&mut engine, "hi");

    assert_eq!(
        seen.borrow().as_slice(),
        &[
            (EditorEvent::Input, "h".to_string()),
            (EditorEvent::Input, "hi".to_string()),
        ]
    );
}

#[test]
fn test_replacing_and_clearing_hooks() {
    let mut engine = test_engine("", 0, 0);
    let count = Rc::new(RefCell::new(0));

    let c = Rc::clone(&count);
    engine.set_hook(HookKind::KeyUp, move |_, _| *c.borrow_mut() += 1);
    press(&mut engine, KeyCode::Left, Modifiers::NONE);
    assert_eq!(*count.borrow(), 1);

    engine.hooks_mut().clear(HookKind::KeyUp);
    press(&mut engine, KeyCode::Left, Modifiers::NONE);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_dispositions() {
    let mut engine = test_engine("ab", 1, 1);
    let cmd = Modifiers::cmd();

    let cases = [
        (Keystroke::new(KeyCode::Char('z'), cmd), Disposition::Handled),
        (
            Keystroke::new(KeyCode::Char('z'), cmd | Modifiers::SHIFT),
            Disposition::Handled,
        ),
        (Keystroke::new(KeyCode::Char('/'), cmd), Disposition::Handled),
        (Keystroke::key(KeyCode::Tab), Disposition::Handled),
        (
            Keystroke::new(KeyCode::Tab, Modifiers::SHIFT),
            Disposition::Handled,
        ),
        (Keystroke::char('('), Disposition::Handled),
        (Keystroke::char('q'), Disposition::PassThrough),
        (Keystroke::key(KeyCode::Enter), Disposition::PassThrough),
        (Keystroke::key(KeyCode::Backspace), Disposition::PassThrough),
        (Keystroke::key(KeyCode::Down), Disposition::PassThrough),
        (Keystroke::key(KeyCode::Escape), Disposition::PassThrough),
        (Keystroke::new(KeyCode::Char('c'), cmd), Disposition::PassThrough),
    ];

    for (stroke, expected) in cases {
        assert_eq!(
            engine.handle_event(&EditorEvent::KeyDown(stroke)),
            expected,
            "keydown {}",
            stroke
        );
    }

    for event in [
        EditorEvent::KeyUp(Keystroke::char('q')),
        EditorEvent::MouseUp,
        EditorEvent::BeforeInput,
        EditorEvent::Input,
    ] {
        assert_eq!(engine.handle_event(&event), Disposition::PassThrough);
    }
    assert!(Disposition::Handled.prevents_default());
    assert!(!Disposition::PassThrough.prevents_default());
}

#[test]
fn test_escape_release_is_a_checkpoint() {
    let mut engine = test_engine("abc", 3, 3);
    press(&mut engine, KeyCode::Escape, Modifiers::NONE);
    assert_eq!(engine.history().len(), 1);
}
