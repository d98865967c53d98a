use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// User-facing actions a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    Quit,
    Suspend,
    Start,
    SelectStressed,
    SelectNeutral,
    SelectHappy,
    NavigateHome,
}

/// Flat key-sequence to action map
#[derive(Clone, Debug, Default, PartialEq, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl KeyBindings {
    /// Printable keys bound to `action`, sorted for stable display
    pub fn keys_for(&self, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(seq, _)| {
                seq.iter()
                    .map(key_event_to_string)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .collect();
        keys.sort();
        keys
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|seq| (seq, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

/// Parse a single key such as `<q>`, `<Ctrl-c>` or `<Enter>`
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let inner = raw_lower
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(&raw_lower);
    let (remaining, modifiers) = extract_modifiers(inner);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        f if f.len() > 1 && f.starts_with('f') => {
            let n = f[1..]
                .parse::<u8>()
                .map_err(|_| format!("Unable to parse `{raw}`"))?;
            KeyCode::F(n)
        }
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| format!("Unable to parse `{raw}`"))?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse `{raw}`")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

/// Parse `<a><b>` style sequences; a single `<key>` yields one event
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        raw.strip_suffix('>').unwrap_or(raw)
    } else {
        raw
    };

    raw.split("><")
        .map(|seq| {
            let seq = seq.strip_prefix('<').unwrap_or(seq);
            seq.strip_suffix('>').unwrap_or(seq)
        })
        .map(parse_key_event)
        .collect()
}

/// Short printable form used in key hints, e.g. `Enter`, `Ctrl-c`, `q`
pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let code = match key_event.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        other => format!("{other:?}"),
    };

    let mut prefix = String::new();
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        prefix.push_str("Ctrl-");
    }
    if key_event.modifiers.contains(KeyModifiers::ALT) {
        prefix.push_str("Alt-");
    }
    format!("{prefix}{code}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_simple_keys() {
        assert_eq!(
            parse_key_event("<q>").unwrap(),
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)
        );
        assert_eq!(
            parse_key_event("<Enter>").unwrap(),
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
        );
        assert_eq!(
            parse_key_event("<esc>").unwrap(),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
        );
        assert_eq!(
            parse_key_event("<F5>").unwrap(),
            KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)
        );
    }

    #[test]
    fn test_with_modifiers() {
        assert_eq!(
            parse_key_event("<Ctrl-c>").unwrap(),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        );
        assert_eq!(
            parse_key_event("<ctrl-alt-h>").unwrap(),
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL | KeyModifiers::ALT)
        );
        assert_eq!(
            parse_key_event("<shift-a>").unwrap(),
            KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)
        );
    }

    #[test]
    fn test_invalid_keys() {
        assert!(parse_key_event("<invalid-key>").is_err());
        assert!(parse_key_event("<fx>").is_err());
        assert!(parse_key_sequence("<q").is_err());
    }

    #[test]
    fn test_sequences() {
        assert_eq!(
            parse_key_sequence("<g><g>").unwrap(),
            vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            ]
        );
        assert_eq!(parse_key_sequence("<q>").unwrap().len(), 1);
    }

    #[test]
    fn test_key_event_to_string() {
        assert_eq!(key_event_to_string(&parse_key_event("<enter>").unwrap()), "Enter");
        assert_eq!(key_event_to_string(&parse_key_event("<ctrl-c>").unwrap()), "Ctrl-c");
        assert_eq!(key_event_to_string(&parse_key_event("<1>").unwrap()), "1");
    }

    #[test]
    fn test_deserialize_and_lookup() {
        let bindings: KeyBindings =
            json5::from_str(r#"{ "<1>": "SelectStressed", "<h>": "NavigateHome", "<Home>": "NavigateHome" }"#)
                .unwrap();

        assert_eq!(
            bindings.get(&parse_key_sequence("<1>").unwrap()),
            Some(&Action::SelectStressed)
        );
        assert_eq!(bindings.keys_for(Action::NavigateHome), vec!["Home", "h"]);
        assert!(bindings.keys_for(Action::Quit).is_empty());
    }

    #[test]
    fn test_deserialize_rejects_bad_keys() {
        let result: Result<KeyBindings, _> = json5::from_str(r#"{ "<nope-key>": "Quit" }"#);
        assert!(result.is_err());
    }
}
