use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles used by the widgets (`accent`, `brand`, `muted`, ...)
#[derive(Clone, Debug, Default, PartialEq, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style registered under `key`, or the terminal default
    pub fn get_or_default(&self, key: &str) -> Style {
        self.get(key).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, spec)| {
                parse_style(&spec)
                    .map(|style| (key, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

/// Parse strings such as `"bold green"` or `"white on black"`
pub fn parse_style(line: &str) -> Result<Style, String> {
    let line = line.to_ascii_lowercase();
    let (foreground, background) = match line.split_once(" on ") {
        Some((fg, bg)) => (fg.trim(), Some(bg.trim())),
        None => (line.trim(), None),
    };

    let mut style = Style::default();
    let mut modifiers = Modifier::empty();
    for word in foreground.split_whitespace() {
        match parse_modifier(word) {
            Some(modifier) => modifiers |= modifier,
            None => style = style.fg(parse_color(word)?),
        }
    }
    if let Some(background) = background {
        style = style.bg(parse_color(background)?);
    }
    if !modifiers.is_empty() {
        style = style.add_modifier(modifiers);
    }
    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "blink" => Some(Modifier::SLOW_BLINK),
        "reverse" | "inverse" => Some(Modifier::REVERSED),
        _ => None,
    }
}

fn parse_color(word: &str) -> Result<Color, String> {
    Color::from_str(word).map_err(|_| format!("Invalid color `{word}`"))
}
