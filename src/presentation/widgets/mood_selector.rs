use ratatui::{layout::Flex, prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{domain::Mood, presentation::config::Styles};

/// Three mood buttons; each shows the key that picks it
pub struct MoodSelectorWidget<'a> {
    styles: &'a Styles,
    mood_keys: [Option<String>; 3],
}

impl<'a> MoodSelectorWidget<'a> {
    /// `mood_keys` follows the button order: stressed, neutral, happy
    pub fn new(styles: &'a Styles, mood_keys: [Option<String>; 3]) -> Self {
        Self { styles, mood_keys }
    }
}

impl<'a> Widget for MoodSelectorWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [header_area, buttons_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(6)])
                .flex(Flex::Center)
                .spacing(1)
                .areas(area);

        Paragraph::new(vec![
            Line::styled("System Status Check", Style::default().bold()),
            Line::raw(""),
            Line::styled(
                "Select your current emotional frequency:",
                self.styles.get_or_default("muted"),
            ),
        ])
        .alignment(Alignment::Center)
        .render(header_area, buf);

        let button_areas = Layout::horizontal([Constraint::Length(18); 3])
            .flex(Flex::Center)
            .spacing(2)
            .split(buttons_area);
        for ((mood, key), button_area) in Mood::iter()
            .zip(self.mood_keys.iter())
            .zip(button_areas.iter())
        {
            let title = key
                .as_ref()
                .map(|key| Line::styled(format!("[{key}]"), self.styles.get_or_default("accent")))
                .unwrap_or_default();
            Paragraph::new(vec![
                Line::raw(""),
                Line::raw(mood.glyph()),
                Line::styled(mood.label(), Style::default().bold()),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(title),
            )
            .render(*button_area, buf);
        }
    }
}
