//! End-to-end tests for `Dialog`: initialization, key and click handling,
//! callback wiring and disposal.

mod common;

use common::{DialogFixture, append_tabs};
use dlg_ui::{
    CallbackRegistry, ControlsError, Dialog, DialogConfig, DialogHost, Document, KeyOutcome,
    KeyPress, MemoryDocument, NodeId, TabOptions,
};
use dlg_ui_keybindings::{ModifiersState, NamedKey};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;

type Calls = Rc<RefCell<Vec<(String, NodeId)>>>;

/// A host recording every callback invocation.
fn recording_host(actions: &[&str]) -> (CallbackRegistry, Calls) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let mut host = CallbackRegistry::new();
    for &action in actions {
        let sink = Rc::clone(&calls);
        let name = action.to_string();
        host.register(action, move |node| sink.borrow_mut().push((name.clone(), node)));
    }
    (host, calls)
}

fn enter() -> KeyPress {
    KeyPress::named(NamedKey::Enter, ModifiersState::empty())
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_init_focuses_default_action() {
    let fixture = DialogFixture::new();
    let ok = fixture.ok;
    let (host, _) = recording_host(&["ok", "cancel", "help"]);

    let dialog = Dialog::init(fixture.doc, host, DialogConfig::default());

    assert_eq!(dialog.document().active_element(), Some(ok));
    assert!(dialog.diagnostics().is_empty(), "{:?}", dialog.diagnostics());
    assert_eq!(dialog.controls().len(), 3);
    assert_eq!(dialog.callbacks().len(), 3);
    assert_eq!(dialog.access_keys().map(|b| b.bindings().len()), Some(3));
}

#[test]
fn test_missing_callback_is_a_diagnostic() {
    let fixture = DialogFixture::new();
    let help = fixture.help;
    let (host, _) = recording_host(&["ok", "cancel"]);

    let dialog = Dialog::init(fixture.doc, host, DialogConfig::default());

    assert_eq!(
        dialog.diagnostics(),
        &[ControlsError::MissingCallback {
            control: help,
            action: "help".to_string(),
        }]
    );
    assert_eq!(dialog.callbacks().action_for(help), None);
}

#[test]
fn test_access_key_not_found_does_not_abort_init() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let bad = doc.append_element(
        body,
        "button",
        &[("class", "dlg-callback-ok"), ("data-access-key", "q")],
    );
    doc.append_text(bad, "OK");
    let (host, calls) = recording_host(&["ok"]);

    let mut dialog = Dialog::init(doc, host, DialogConfig::default());

    assert_eq!(dialog.diagnostics().len(), 1);
    assert!(matches!(
        dialog.diagnostics()[0],
        ControlsError::AccessKeyNotFound { key: 'q', .. }
    ));
    assert_eq!(dialog.document().child_nodes(bad).len(), 1);

    dialog.activate(bad);
    assert_eq!(*calls.borrow(), vec![("ok".to_string(), bad)]);
}

#[test]
fn test_switches_disable_features() {
    let fixture = DialogFixture::new();
    let ok = fixture.ok;
    let (host, calls) = recording_host(&["ok", "cancel", "help"]);
    let config = DialogConfig::from_yaml_str(
        "controls:\n  access_keys: false\n  assign_callbacks: false\n  assign_shortcuts: false\n",
    )
    .unwrap();

    let mut dialog = Dialog::init(fixture.doc, host, config);

    assert!(dialog.access_keys().is_none());
    assert!(dialog.callbacks().is_empty());
    assert!(dialog.shortcuts().is_empty());
    assert_eq!(dialog.document().child_nodes(ok).len(), 1, "label not marked");

    let body = dialog.document().body();
    dialog.document_mut().focus(body);
    assert_eq!(dialog.handle_key(&enter()), KeyOutcome::Ignored);
    dialog.handle_click(ok);
    assert!(calls.borrow().is_empty());
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_enter_invokes_default_callback() {
    let fixture = DialogFixture::new();
    let (ok, name) = (fixture.ok, fixture.name);
    let (host, calls) = recording_host(&["ok", "cancel", "help"]);
    let mut dialog = Dialog::init(fixture.doc, host, DialogConfig::default());
    dialog.document_mut().focus(name);

    assert_eq!(dialog.handle_key(&enter()), KeyOutcome::Handled);
    assert_eq!(*calls.borrow(), vec![("ok".to_string(), ok)]);
}

#[test]
fn test_modified_dialog_keys_still_fire() {
    let fixture = DialogFixture::new();
    let (ok, cancel, help, name) = (fixture.ok, fixture.cancel, fixture.help, fixture.name);
    let (host, calls) = recording_host(&["ok", "cancel", "help"]);
    let mut dialog = Dialog::init(fixture.doc, host, DialogConfig::default());
    dialog.document_mut().focus(name);

    let presses = [
        KeyPress::named(NamedKey::Enter, ModifiersState::CONTROL),
        KeyPress::named(NamedKey::Escape, ModifiersState::SHIFT),
        KeyPress::named(NamedKey::F1, ModifiersState::SHIFT),
    ];
    for press in &presses {
        assert!(dialog.handle_key(press).is_handled(), "{press:?}");
    }

    assert_eq!(
        *calls.borrow(),
        vec![
            ("ok".to_string(), ok),
            ("cancel".to_string(), cancel),
            ("help".to_string(), help),
        ]
    );
}

#[test]
fn test_shifted_access_key_invokes_callback() {
    let fixture = DialogFixture::new();
    let ok = fixture.ok;
    let (host, calls) = recording_host(&["ok", "cancel", "help"]);
    let mut dialog = Dialog::init(fixture.doc, host, DialogConfig::default());

    let outcome = dialog.handle_key(&KeyPress::character(
        'O',
        ModifiersState::ALT | ModifiersState::SHIFT,
    ));

    assert_eq!(outcome, KeyOutcome::Handled);
    assert_eq!(*calls.borrow(), vec![("ok".to_string(), ok)]);
}

#[test]
fn test_enter_on_focused_default_button_is_not_doubled() {
    let fixture = DialogFixture::new();
    let (host, calls) = recording_host(&["ok", "cancel", "help"]);
    let mut dialog = Dialog::init(fixture.doc, host, DialogConfig::default());

    // The default-action button holds focus after init; Enter is its own.
    assert!(!dialog.handle_key(&enter()).is_handled());
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_access_key_invokes_callback() {
    let fixture = DialogFixture::new();
    let cancel = fixture.cancel;
    let (host, calls) = recording_host(&["ok", "cancel", "help"]);
    let mut dialog = Dialog::init(fixture.doc, host, DialogConfig::default());

    let outcome = dialog.handle_key(&KeyPress::character('c', ModifiersState::ALT));

    assert!(outcome.is_handled());
    assert_eq!(*calls.borrow(), vec![("cancel".to_string(), cancel)]);
    assert_eq!(dialog.document().clicks(), &[cancel]);
}

#[test]
fn test_access_key_on_text_field_only_focuses() {
    let fixture = DialogFixture::new();
    let name = fixture.name;
    let (host, calls) = recording_host(&["ok", "cancel", "help"]);
    let mut dialog = Dialog::init(fixture.doc, host, DialogConfig::default());

    assert!(dialog.handle_key(&KeyPress::character('n', ModifiersState::ALT)).is_handled());
    assert_eq!(dialog.document().active_element(), Some(name));
    assert!(dialog.document().clicks().is_empty());
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_configured_access_key_modifier() {
    let fixture = DialogFixture::new();
    let ok = fixture.ok;
    let (host, calls) = recording_host(&["ok"]);
    let mut config = DialogConfig::default();
    config.controls.access_key_modifier = "Ctrl+Alt".to_string();
    let mut dialog = Dialog::init(fixture.doc, host, config);

    assert_eq!(
        dialog.handle_key(&KeyPress::character('o', ModifiersState::ALT)),
        KeyOutcome::Ignored
    );
    dialog.handle_key(&KeyPress::character(
        'o',
        ModifiersState::ALT | ModifiersState::CONTROL,
    ));
    assert_eq!(*calls.borrow(), vec![("ok".to_string(), ok)]);
}

#[test]
fn test_invalid_access_key_modifier_falls_back_to_alt() {
    let fixture = DialogFixture::new();
    let (host, calls) = recording_host(&["ok"]);
    let mut config = DialogConfig::default();
    config.controls.access_key_modifier = "Hyper".to_string();
    let mut dialog = Dialog::init(fixture.doc, host, config);

    dialog.handle_key(&KeyPress::character('o', ModifiersState::ALT));
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn test_unbound_key_is_ignored() {
    let fixture = DialogFixture::new();
    let (host, _) = recording_host(&["ok", "cancel", "help"]);
    let mut dialog = Dialog::init(fixture.doc, host, DialogConfig::default());

    assert_eq!(
        dialog.handle_key(&KeyPress::character('z', ModifiersState::ALT)),
        KeyOutcome::Ignored
    );
    assert_eq!(
        dialog.handle_key(&KeyPress::named(NamedKey::F2, ModifiersState::empty())),
        KeyOutcome::Ignored
    );
}

// ============================================================================
// Tabs
// ============================================================================

#[test]
fn test_tab_keys_and_clicks() {
    let mut fixture = DialogFixture::new();
    let (headers, contents) = append_tabs(&mut fixture.doc, 3);
    let (host, _) = recording_host(&["ok", "cancel", "help"]);
    let switches = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&switches);

    let mut dialog = Dialog::init(fixture.doc, host, DialogConfig::default());
    dialog
        .attach_tabs(
            TabOptions::new(headers, contents).on_switch(move |new, old| seen.borrow_mut().push((new, old))),
        )
        .unwrap();

    let ctrl_tab = KeyPress::named(NamedKey::Tab, ModifiersState::CONTROL);
    let ctrl_shift_tab = KeyPress::named(NamedKey::Tab, ModifiersState::CONTROL | ModifiersState::SHIFT);
    assert!(dialog.handle_key(&ctrl_tab).is_handled());
    assert!(dialog.handle_key(&ctrl_shift_tab).is_handled());
    assert!(dialog.handle_key(&ctrl_shift_tab).is_handled());

    let third = dialog.tabs().map(|t| t.tabs()[2]).unwrap();
    let first = dialog.tabs().map(|t| t.tabs()[0]).unwrap();
    dialog.handle_click(first);

    assert_eq!(*switches.borrow(), vec![(1, 0), (0, 1), (2, 0), (0, 2)]);
    assert_eq!(dialog.tabs().map(|t| t.current_index()), Some(0));
    assert!(!dialog.document().has_class(third, "dlg-tab-selected"));
}

#[test]
fn test_tab_shortcuts_can_be_disabled() {
    let mut fixture = DialogFixture::new();
    let (headers, contents) = append_tabs(&mut fixture.doc, 2);
    let (host, _) = recording_host(&[]);
    let mut dialog = Dialog::init(fixture.doc, host, DialogConfig::default());
    dialog
        .attach_tabs(TabOptions::new(headers, contents).init_shortcuts(false))
        .unwrap();

    assert_eq!(
        dialog.handle_key(&KeyPress::named(NamedKey::Tab, ModifiersState::CONTROL)),
        KeyOutcome::Ignored
    );
    assert_eq!(dialog.tabs().map(|t| t.current_index()), Some(0));
}

#[test]
fn test_access_key_on_tab_header_switches_tab() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let headers = doc.append_element(body, "ul", &[]);
    let contents = doc.append_element(body, "div", &[]);
    for (title, key) in [("General", "g"), ("Advanced", "d")] {
        let li = doc.append_element(headers, "li", &[("data-access-key", key)]);
        doc.append_text(li, title);
        doc.append_element(contents, "section", &[]);
    }
    let (host, _) = recording_host(&[]);
    let mut dialog = Dialog::init(doc, host, DialogConfig::default());
    dialog.attach_tabs(TabOptions::new(headers, contents)).unwrap();

    assert!(dialog.handle_key(&KeyPress::character('d', ModifiersState::ALT)).is_handled());
    assert_eq!(dialog.tabs().map(|t| t.current_index()), Some(1));
}

#[test]
fn test_bad_tab_container_leaves_dialog_usable() {
    let fixture = DialogFixture::new();
    let name = fixture.name;
    let (host, calls) = recording_host(&["ok"]);
    let mut dialog = Dialog::init(fixture.doc, host, DialogConfig::default());

    let err = dialog.attach_tabs(TabOptions::new(name, name)).unwrap_err();
    assert!(matches!(err, ControlsError::EmptyTabContainer { .. }));
    assert!(dialog.tabs().is_none());

    dialog.document_mut().focus(name);
    dialog.handle_key(&enter());
    assert_eq!(calls.borrow().len(), 1);
}

// ============================================================================
// Disposal and configuration files
// ============================================================================

#[test]
fn test_dispose_unregisters_every_key() {
    let mut fixture = DialogFixture::new();
    let (headers, contents) = append_tabs(&mut fixture.doc, 2);
    let (ok, name) = (fixture.ok, fixture.name);
    let (host, calls) = recording_host(&["ok", "cancel", "help"]);
    let mut dialog = Dialog::init(fixture.doc, host, DialogConfig::default());
    dialog.attach_tabs(TabOptions::new(headers, contents)).unwrap();
    dialog.document_mut().focus(name);

    dialog.dispose();

    assert!(dialog.is_disposed());
    for press in [
        enter(),
        KeyPress::named(NamedKey::Escape, ModifiersState::empty()),
        KeyPress::character('o', ModifiersState::ALT),
        KeyPress::named(NamedKey::Tab, ModifiersState::CONTROL),
    ] {
        assert_eq!(dialog.handle_key(&press), KeyOutcome::Ignored, "{press:?}");
    }
    assert!(calls.borrow().is_empty());
    assert_eq!(dialog.tabs().map(|t| t.current_index()), Some(0));

    dialog.handle_click(ok);
    assert_eq!(calls.borrow().len(), 1, "click callbacks stay wired");
}

#[test]
fn test_init_from_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("dialog.yaml");
    std::fs::write(
        &path,
        "markup:\n  callback_class_prefix: \"cb-\"\n  default_action_class: \"primary\"\nshortcuts:\n  confirm: \"Ctrl+Enter\"\n",
    )
    .expect("Failed to write config");
    let config = DialogConfig::load(&path).unwrap();

    let mut doc = MemoryDocument::new();
    let save = doc.append_element(doc.body(), "button", &[("class", "cb-save primary")]);
    doc.append_text(save, "Save");
    let (host, calls) = recording_host(&["save"]);
    let mut dialog = Dialog::init(doc, host, config);
    let body = dialog.document().body();
    dialog.document_mut().focus(body);

    assert_eq!(dialog.handle_key(&enter()), KeyOutcome::Ignored);
    dialog.handle_key(&KeyPress::named(NamedKey::Enter, ModifiersState::CONTROL));
    assert_eq!(*calls.borrow(), vec![("save".to_string(), save)]);
}

#[test]
fn test_into_parts_returns_host() {
    let fixture = DialogFixture::new();
    let (host, _) = recording_host(&["ok"]);
    let dialog = Dialog::init(fixture.doc, host, DialogConfig::default());

    let (doc, host) = dialog.into_parts();
    assert!(host.has_callback("ok"));
    assert!(!doc.elements().is_empty());
}
