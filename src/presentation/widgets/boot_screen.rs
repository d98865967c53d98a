use ratatui::{prelude::*, widgets::*};

use crate::presentation::config::Styles;

pub const BOOT_LINES: [&str; 4] = [
    "> INITIALIZING MIND_OS KERNEL...",
    "> LOADING SERENITY PROTOCOLS... [OK]",
    "> ESTABLISHING SECURE CONNECTION...",
    "> DECRYPTING EMOTIONAL STATES...",
];

/// Retro intro shown until the boot timer fires
pub struct BootScreenWidget<'a> {
    styles: &'a Styles,
}

impl<'a> BootScreenWidget<'a> {
    pub fn new(styles: &'a Styles) -> Self {
        Self { styles }
    }
}

impl<'a> Widget for BootScreenWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let boot = self.styles.get_or_default("boot");
        let alert = self.styles.get_or_default("boot_alert");

        Block::new().style(boot).render(area, buf);

        // Text sits at the bottom of the screen, like a console scrolling up
        let [_, text_area, _, bar_area, _] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(BOOT_LINES.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .horizontal_margin(2)
        .areas(area);

        let last = BOOT_LINES.len() - 1;
        let lines: Vec<Line> = BOOT_LINES
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let style = if i == last { alert } else { boot };
                Line::styled(*text, style)
            })
            .collect();
        Paragraph::new(lines).render(text_area, buf);

        Line::styled("━".repeat(bar_area.width as usize), boot).render(bar_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::test_support::buffer_text;

    #[test]
    fn test_render_shows_kernel_lines() {
        let styles = Styles::default();
        let area = Rect::new(0, 0, 60, 12);
        let mut buffer = Buffer::empty(area);

        BootScreenWidget::new(&styles).render(area, &mut buffer);

        let text = buffer_text(&buffer);
        for line in BOOT_LINES {
            assert!(text.contains(line), "missing `{line}` in\n{text}");
        }
    }

    #[test]
    fn test_render_small_area() {
        let styles = Styles::default();
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);

        // Render with small area should not panic
        BootScreenWidget::new(&styles).render(area, &mut buffer);
    }
}
