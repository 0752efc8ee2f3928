//! Single-line search input.
//!
//! A reduced version of a full text input: it keeps the value, a cursor
//! measured in characters, a prompt and a placeholder. [`Model::update`]
//! reports whether the value changed so the owner can react to edits only,
//! not to cursor movement.

use crate::key::{new_binding, with_keys_str, Binding};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Editing key bindings.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub character_forward: Binding,
    pub character_backward: Binding,
    pub delete_character_backward: Binding,
    pub delete_character_forward: Binding,
    pub delete_before_cursor: Binding,
    pub line_start: Binding,
    pub line_end: Binding,
}

/// The default editing keys.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
    }
}

#[derive(Debug, Clone)]
pub struct Model {
    pub prompt: String,
    pub placeholder: String,
    pub keymap: KeyMap,
    pub placeholder_style: Style,
    value: Vec<char>,
    pos: usize,
    focus: bool,
}

/// Creates an empty, unfocused input with the `"Search: "` prompt.
pub fn new() -> Model {
    Model {
        prompt: "Search: ".to_string(),
        placeholder: String::new(),
        keymap: default_key_map(),
        placeholder_style: Style::new().faint(true),
        value: Vec::new(),
        pos: 0,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Sets the text shown while the input is empty (builder pattern).
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the value and moves the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        self.pos = self.value.len();
    }

    /// Moves the cursor, clamped to the end of the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Applies an editing key. Returns true if the value changed.
    ///
    /// Does nothing while blurred.
    pub fn update(&mut self, msg: &Msg) -> bool {
        if !self.focus {
            return false;
        }
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };

        let before = self.value.len();
        let keymap = &self.keymap;
        if keymap.delete_before_cursor.matches(key_msg) {
            self.value.drain(..self.pos);
            self.pos = 0;
            return before != self.value.len();
        }
        if keymap.delete_character_backward.matches(key_msg) {
            if self.pos > 0 {
                self.pos -= 1;
                self.value.remove(self.pos);
                return true;
            }
            return false;
        }
        if keymap.delete_character_forward.matches(key_msg) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
                return true;
            }
            return false;
        }
        if keymap.character_backward.matches(key_msg) {
            self.pos = self.pos.saturating_sub(1);
        } else if keymap.character_forward.matches(key_msg) {
            self.pos = (self.pos + 1).min(self.value.len());
        } else if keymap.line_start.matches(key_msg) {
            self.pos = 0;
        } else if keymap.line_end.matches(key_msg) {
            self.pos = self.value.len();
        } else if let KeyCode::Char(c) = key_msg.key {
            if key_msg
                .modifiers
                .difference(KeyModifiers::SHIFT)
                .is_empty()
            {
                self.value.insert(self.pos, c);
                self.pos += 1;
                return true;
            }
        }
        false
    }

    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return format!(
                "{}{}",
                self.prompt,
                self.placeholder_style.render(&self.placeholder)
            );
        }
        let mut text = self.value();
        if self.focus {
            let byte_pos = text
                .char_indices()
                .nth(self.pos)
                .map(|(i, _)| i)
                .unwrap_or(text.len());
            text.insert(byte_pos, '|');
        }
        format!("{}{}", self.prompt, text)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
