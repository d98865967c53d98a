use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::presentation::config::Styles;

pub const FEATURES: [(&str, &str, &str); 3] = [
    ("[#]", "Private", "Encrypted locally."),
    ("[~]", "Real-time", "Instant support."),
    ("<3", "Empathetic", "Designed for humans."),
];

pub struct LandingWidget<'a> {
    styles: &'a Styles,
    start_keys: Vec<String>,
}

impl<'a> LandingWidget<'a> {
    pub fn new(styles: &'a Styles, start_keys: Vec<String>) -> Self {
        Self { styles, start_keys }
    }

    fn button_label(&self) -> String {
        match self.start_keys.first() {
            Some(key) => format!(" Initialize Session <-> [{key}] "),
            None => " Initialize Session <-> ".to_string(),
        }
    }
}

impl<'a> Widget for LandingWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [hero_area, cards_area, button_area] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let accent = self.styles.get_or_default("accent");
        Paragraph::new(vec![
            Line::raw("( @ )"),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Mind_OS ", self.styles.get_or_default("brand")),
                Span::styled("v1.0", accent),
            ]),
            Line::raw(""),
            Line::styled(
                "A secure, decentralized operating system for your mental well-being.",
                self.styles.get_or_default("muted"),
            ),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(hero_area, buf);

        let card_areas = Layout::horizontal([Constraint::Length(24); 3])
            .flex(Flex::Center)
            .spacing(2)
            .split(cards_area);
        for ((icon, title, desc), card_area) in FEATURES.iter().zip(card_areas.iter()) {
            Paragraph::new(vec![
                Line::styled(*icon, accent),
                Line::styled(*title, Style::default().bold()),
                Line::styled(*desc, self.styles.get_or_default("muted")),
            ])
            .block(Block::bordered().border_type(BorderType::Rounded))
            .render(*card_area, buf);
        }

        let label = self.button_label();
        let [button] = Layout::horizontal([Constraint::Length(label.chars().count() as u16 + 2)])
            .flex(Flex::Center)
            .areas(button_area);
        Paragraph::new(label)
            .style(self.styles.get_or_default("button"))
            .block(Block::bordered().border_type(BorderType::Thick))
            .render(button, buf);
    }
}
