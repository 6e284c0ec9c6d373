//! Keyboard and callback helpers for embedded dialog UIs.
//!
//! `dlg-ui` drives a dialog rendered by a host toolkit, seen through the
//! [`Document`](dom::Document) trait:
//!
//! - **Access keys**: `data-access-key="o"` on a control marks the `o` in
//!   its label and binds Alt+O to activate it.
//! - **Shortcuts**: Enter, Escape and F1 activate the default-action, cancel
//!   and help controls, chosen by role class (`dlg-callback-ok`, ...).
//! - **Callbacks**: role classes are wired to the host's named callbacks.
//! - **Tabs**: exclusive tab/panel selection with Ctrl+Tab cycling.
//!
//! ```
//! use dlg_ui::{CallbackRegistry, Dialog, DialogConfig, KeyPress, MemoryDocument};
//! use dlg_ui_keybindings::{ModifiersState, NamedKey};
//!
//! let mut doc = MemoryDocument::new();
//! let ok = doc.append_element(doc.body(), "button", &[("class", "dlg-callback-ok")]);
//! doc.append_text(ok, "OK");
//!
//! let mut dialog = Dialog::init(doc, CallbackRegistry::new(), DialogConfig::default());
//! let outcome = dialog.handle_key(&KeyPress::named(NamedKey::Enter, ModifiersState::empty()));
//! assert!(outcome.is_handled());
//! assert_eq!(dialog.document().clicks(), &[ok]);
//! ```

pub mod access_key;
pub mod callbacks;
pub mod control;
pub mod dialog;
pub mod dom;
mod error;
pub mod shortcuts;
pub mod tabs;

pub use access_key::{AccessKeyBinder, AccessKeyBinding};
pub use callbacks::{CallbackRegistry, DialogHost};
pub use control::{Activation, Control, ControlKind, Role};
pub use dialog::{Dialog, KeyOutcome};
pub use dlg_ui_config::DialogConfig;
pub use dlg_ui_keybindings::KeyPress;
pub use dom::{Document, MemoryDocument, NodeId};
pub use error::ControlsError;
pub use shortcuts::{ShortcutDispatcher, ShortcutOutcome};
pub use tabs::{TabInterface, TabOptions};
