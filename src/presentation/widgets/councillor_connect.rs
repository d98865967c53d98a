use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::{domain::Mood, presentation::config::Styles};

/// Static "connection" diagram between the user and a councillor.
/// Nothing is actually sent anywhere; the copy is illustrative.
pub struct CouncillorConnectWidget<'a> {
    styles: &'a Styles,
    mood: Mood,
}

impl<'a> CouncillorConnectWidget<'a> {
    pub fn new(styles: &'a Styles, mood: Mood) -> Self {
        Self { styles, mood }
    }

    pub fn you_label(&self) -> String {
        format!("YOU ({})", self.mood.as_str())
    }
}

fn person(label: String, glyph: &'static str, style: Style) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::raw(""),
        Line::raw(glyph),
        Line::raw(""),
        Line::styled(label, style),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().border_type(BorderType::Rounded).border_style(style))
}

impl<'a> Widget for CouncillorConnectWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let outer = Block::bordered().border_type(BorderType::Rounded);
        let inner = outer.inner(area);
        outer.render(area, buf);

        let [diagram_area, footer_area] =
            Layout::vertical([Constraint::Length(6), Constraint::Length(6)])
                .flex(Flex::SpaceAround)
                .areas(inner);

        let [you_area, link_area, councillor_area] = Layout::horizontal([
            Constraint::Length(18),
            Constraint::Min(16),
            Constraint::Length(18),
        ])
        .horizontal_margin(1)
        .spacing(1)
        .areas(diagram_area);

        let you_style = self.styles.get_or_default("you");
        person(self.you_label(), "(o)", you_style).render(you_area, buf);
        person(
            "COUNCILLOR".to_string(),
            "(v)",
            self.styles.get_or_default("councillor"),
        )
        .render(councillor_area, buf);

        let muted = self.styles.get_or_default("muted");
        let wire = "─".repeat(link_area.width.saturating_sub(1) as usize);
        Paragraph::new(vec![
            Line::styled("ENCRYPTED LINK", muted.bold()),
            Line::from(vec![
                Span::styled("●", self.styles.get_or_default("link")),
                Span::styled(wire.clone(), muted),
            ]),
            Line::raw("[ Requesting... ]"),
            Line::styled(wire, muted),
        ])
        .alignment(Alignment::Center)
        .render(link_area.inner(Margin::new(0, 1)), buf);

        Paragraph::new(vec![
            Line::styled("Connection Established", Style::default().bold()),
            Line::styled("A councillor has been notified of your status.", muted),
            Line::raw(""),
            Line::styled("[ Start Chat ]", self.styles.get_or_default("online").bold()),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().border_style(muted))
        .render(footer_area.inner(Margin::new(1, 0)), buf);
    }
}
