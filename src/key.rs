//! Type-safe key bindings shared by every component.
//!
//! A [`Binding`] groups one or more key presses with the help text shown for
//! them. Components expose their bindings through a [`KeyMap`] so a help line
//! can be rendered without knowing the component.
//!
//! ```rust
//! use product_table::key::{new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = new_binding(vec![
//!     with_keys_str(&["pgdown", "right"]),
//!     with_help("→", "next page"),
//! ]);
//!
//! let msg = KeyMsg { key: KeyCode::Right, modifiers: KeyModifiers::NONE };
//! assert!(next.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

impl KeyPress {
    /// Parses names such as `"pgup"`, `"ctrl+u"`, `"/"` or `"left"`.
    pub fn parse(name: &str) -> Option<Self> {
        let mut mods = KeyModifiers::NONE;
        let mut rest = name;
        loop {
            if let Some(tail) = rest.strip_prefix("ctrl+") {
                mods |= KeyModifiers::CONTROL;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("alt+") {
                mods |= KeyModifiers::ALT;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("shift+") {
                mods |= KeyModifiers::SHIFT;
                rest = tail;
            } else {
                break;
            }
        }

        let code = match rest {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            " " | "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };
        Some(Self { code, mods })
    }

    /// Returns true if `msg` is this key press.
    ///
    /// Shift is ignored for character keys since the character already
    /// carries the case.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                msg.modifiers.difference(KeyModifiers::SHIFT)
                    == self.mods.difference(KeyModifiers::SHIFT)
            }
            _ => msg.modifiers == self.mods,
        }
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"←/h"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Binds the given key presses.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b| b.keys = keys)
}

/// Binds keys by name; unknown names are skipped.
pub fn with_keys_str(names: &[&str]) -> BindingOpt {
    let keys: Vec<KeyPress> = names.iter().filter_map(|n| KeyPress::parse(n)).collect();
    with_keys(keys)
}

/// Sets the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b| b.help = help)
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b| b.disabled = true)
}

impl Binding {
    /// Creates an enabled binding for `keys` with no help text.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// A binding is enabled when it is not disabled and has keys.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true if the binding is enabled and `msg` is one of its keys.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Components expose their bindings for help rendering through this trait.
pub trait KeyMap {
    /// Bindings for the one-line help.
    fn short_help(&self) -> Vec<&Binding>;
}

/// Renders enabled bindings as `key desc • key desc`.
pub fn short_help_line(bindings: &[&Binding]) -> String {
    bindings
        .iter()
        .filter(|b| b.enabled() && !b.help().key.is_empty())
        .map(|b| format!("{} {}", b.help().key, b.help().desc))
        .collect::<Vec<_>>()
        .join(" • ")
}
