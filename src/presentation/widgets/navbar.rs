use ratatui::{prelude::*, widgets::*};

use crate::presentation::config::Styles;

/// Top bar with the brand (which leads home) and the system status
pub struct NavbarWidget<'a> {
    styles: &'a Styles,
    home_keys: Vec<String>,
}

impl<'a> NavbarWidget<'a> {
    pub fn new(styles: &'a Styles, home_keys: Vec<String>) -> Self {
        Self { styles, home_keys }
    }
}

impl<'a> Widget for NavbarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::new()
            .borders(Borders::BOTTOM)
            .border_style(self.styles.get_or_default("muted"));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut brand = vec![Span::styled(">_ MIND_OS", self.styles.get_or_default("brand"))];
        if let Some(key) = self.home_keys.first() {
            brand.push(Span::styled(
                format!(" [{key}]"),
                self.styles.get_or_default("muted"),
            ));
        }
        Line::from(brand).render(inner, buf);

        Line::from(vec![
            Span::styled("SYS.STATUS: ", self.styles.get_or_default("muted")),
            Span::styled("ONLINE", self.styles.get_or_default("online")),
        ])
        .alignment(Alignment::Right)
        .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::test_support::buffer_text;

    #[test]
    fn test_render_brand_and_status() {
        let styles = Styles::default();
        let area = Rect::new(0, 0, 60, 2);
        let mut buffer = Buffer::empty(area);

        NavbarWidget::new(&styles, vec!["h".to_string()]).render(area, &mut buffer);

        let text = buffer_text(&buffer);
        let first_line = text.lines().next().unwrap_or_default();
        assert!(first_line.starts_with(">_ MIND_OS [h]"));
        assert!(first_line.trim_end().ends_with("SYS.STATUS: ONLINE"));
    }
}
