//! Keybinding configuration: parse `keybinds.conf`, provide defaults, and map keys to actions.
//!
//! Bindings apply to the Home screen and to the directory table. Text entry
//! (registration fields, the search box) always uses the literal keys typed.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use crate::config;
use crate::error::Result;

/// Semantic keyboard actions that can be bound to key combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Focus the directory search box.
    StartSearch,
    /// Re-fetch the directory.
    Refresh,
    /// Open the registration form.
    NewUser,
    /// Open the directory.
    ViewUsers,
    /// Activate the highlighted menu entry or open the highlighted user's details.
    Activate,
    /// Leave the current screen for Home.
    Back,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    /// Ignore this key.
    Ignore,
}

const ACTIONS: [(KeyAction, &str); 12] = [
    (KeyAction::Quit, "Quit"),
    (KeyAction::StartSearch, "StartSearch"),
    (KeyAction::Refresh, "Refresh"),
    (KeyAction::NewUser, "NewUser"),
    (KeyAction::ViewUsers, "ViewUsers"),
    (KeyAction::Activate, "Activate"),
    (KeyAction::Back, "Back"),
    (KeyAction::MoveUp, "MoveUp"),
    (KeyAction::MoveDown, "MoveDown"),
    (KeyAction::PageUp, "PageUp"),
    (KeyAction::PageDown, "PageDown"),
    (KeyAction::Ignore, "Ignore"),
];

/// Mapping from `(KeyModifiers, KeyCode)` to [`KeyAction`].
#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    /// Arrow keys plus vim-style `j`/`k`/`h`/`l`, and single-letter shortcuts.
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let mut bindings = HashMap::new();
        bindings.insert((M::NONE, Char('q')), KeyAction::Quit);
        bindings.insert((M::NONE, Char('/')), KeyAction::StartSearch);
        bindings.insert((M::NONE, Char('r')), KeyAction::Refresh);
        bindings.insert((M::NONE, Char('n')), KeyAction::NewUser);
        bindings.insert((M::NONE, Char('v')), KeyAction::ViewUsers);
        bindings.insert((M::NONE, Enter), KeyAction::Activate);
        bindings.insert((M::NONE, Esc), KeyAction::Back);
        bindings.insert((M::NONE, Up), KeyAction::MoveUp);
        bindings.insert((M::NONE, Down), KeyAction::MoveDown);
        bindings.insert((M::NONE, Char('k')), KeyAction::MoveUp);
        bindings.insert((M::NONE, Char('j')), KeyAction::MoveDown);
        bindings.insert((M::NONE, PageUp), KeyAction::PageUp);
        bindings.insert((M::NONE, PageDown), KeyAction::PageDown);
        bindings.insert((M::NONE, Char('h')), KeyAction::PageUp);
        bindings.insert((M::NONE, Char('l')), KeyAction::PageDown);
        Self { bindings }
    }

    /// Load `path`, or write the defaults there when it doesn't exist yet.
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_else(|err| {
                warn!(error = %err, "falling back to default keybindings");
                Self::default()
            });
        }
        let km = Self::default();
        match km.write_file(path) {
            Ok(()) => info!(path = %path.display(), "wrote default keybindings"),
            Err(err) => warn!(error = %err, "could not write default keybindings"),
        }
        km
    }

    /// Load from an `<Action> = <KeySpec>` file, layered over the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut map = Self::default();
        for (lhs, rhs) in config::read_pairs(path)? {
            match (parse_action(&lhs), parse_key(&rhs)) {
                (Some(action), Some(key)) => {
                    map.bindings.insert(key, action);
                }
                _ => warn!(%lhs, %rhs, "ignoring unknown keybinding"),
            }
        }
        Ok(map)
    }

    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut buf = String::new();
        buf.push_str("# cw-careers keybindings\n");
        buf.push_str("# Format: <Action> = <KeySpec>\n");
        buf.push_str("# KeySpec examples: q, Ctrl+r, Enter, Esc, Up, Down, PageUp, PageDown, /\n\n");
        let mut entries: Vec<(String, &str)> = self
            .bindings
            .iter()
            .map(|((mods, code), action)| (Self::format_key(*mods, *code), format_action(*action)))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(&b.0)));
        for (key, action) in entries {
            let _ = writeln!(&mut buf, "{action} = {key}");
        }
        config::write_file(path, &buf)
    }

    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.modifiers, key.code)).copied()
    }

    /// Keys bound to `action`, formatted and sorted, for on-screen hints.
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|((mods, code), _)| Self::format_key(*mods, *code))
            .collect();
        keys.sort();
        keys
    }

    /// Format a key into a spec like "Ctrl+q" or "PageDown".
    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Enter => "Enter".to_string(),
            Esc => "Esc".to_string(),
            Tab => "Tab".to_string(),
            BackTab => "BackTab".to_string(),
            Up => "Up".to_string(),
            Down => "Down".to_string(),
            Left => "Left".to_string(),
            Right => "Right".to_string(),
            PageUp => "PageUp".to_string(),
            PageDown => "PageDown".to_string(),
            Char(c) => c.to_string(),
            _ => format!("{code:?}"),
        };
        if mods.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{base}")
        } else {
            base
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}

fn parse_key(spec: &str) -> Option<(KeyModifiers, KeyCode)> {
    use KeyCode::*;
    let s = spec.trim();
    let (mods, rest) = match s.strip_prefix("Ctrl+") {
        Some(after) => (KeyModifiers::CONTROL, after),
        None => (KeyModifiers::NONE, s),
    };
    let code = match rest {
        "Enter" => Enter,
        "Esc" | "Escape" => Esc,
        "Tab" => Tab,
        "BackTab" => BackTab,
        "Up" => Up,
        "Down" => Down,
        "Left" => Left,
        "Right" => Right,
        "PageUp" => PageUp,
        "PageDown" => PageDown,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Char(c),
                _ => return None,
            }
        }
    };
    Some((mods, code))
}

fn parse_action(s: &str) -> Option<KeyAction> {
    let s = s.trim();
    ACTIONS.iter().find(|(_, name)| *name == s).map(|(a, _)| *a)
}

pub fn format_action(a: KeyAction) -> &'static str {
    ACTIONS
        .iter()
        .find(|(action, _)| *action == a)
        .map_or("Ignore", |(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn defaults_resolve_common_keys() {
        let km = Keymap::default();
        assert_eq!(km.resolve(&press(KeyCode::Char('r'), KeyModifiers::NONE)), Some(KeyAction::Refresh));
        assert_eq!(km.resolve(&press(KeyCode::Enter, KeyModifiers::NONE)), Some(KeyAction::Activate));
        assert_eq!(km.resolve(&press(KeyCode::Char('j'), KeyModifiers::NONE)), Some(KeyAction::MoveDown));
        assert_eq!(km.resolve(&press(KeyCode::Char('z'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn parse_key_handles_ctrl_and_named_keys() {
        assert_eq!(parse_key("Ctrl+r"), Some((KeyModifiers::CONTROL, KeyCode::Char('r'))));
        assert_eq!(parse_key("Escape"), Some((KeyModifiers::NONE, KeyCode::Esc)));
        assert_eq!(parse_key("PageDown"), Some((KeyModifiers::NONE, KeyCode::PageDown)));
        assert_eq!(parse_key("ab"), None);
    }

    #[test]
    fn action_names_round_trip() {
        for (action, name) in ACTIONS {
            assert_eq!(parse_action(name), Some(action));
            assert_eq!(format_action(action), name);
        }
        assert_eq!(parse_action("Launch"), None);
    }

    #[test]
    fn keys_for_lists_every_binding_of_an_action() {
        let km = Keymap::default();
        assert_eq!(km.keys_for(KeyAction::MoveDown), vec!["Down", "j"]);
    }
}
