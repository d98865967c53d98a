use ratatui::{prelude::*, widgets::Paragraph};

/// A key hint such as `[Enter] start`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub description: &'static str,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, description: &'static str) -> Self {
        Self {
            key: key.into(),
            description,
        }
    }
}

/// Single bottom row: key hints on the left, the status message on the right
pub struct StatusBarWidget<'a> {
    hints: Vec<KeyHint>,
    message: Option<&'a str>,
    style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(hints: Vec<KeyHint>, message: Option<&'a str>, style: Style) -> Self {
        Self {
            hints,
            message,
            style,
        }
    }

    pub fn hints_line(&self) -> String {
        self.hints
            .iter()
            .map(|hint| format!("[{}] {}", hint.key, hint.description))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Paragraph::new(self.hints_line())
            .style(self.style)
            .render(area, buf);

        if let Some(message) = self.message {
            Line::styled(message, self.style.italic())
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}
