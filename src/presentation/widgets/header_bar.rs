use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub title: Style,
    pub route: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: theme.accent_label(),
            version: theme.key_style,
            title: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            title: Style::default().add_modifier(Modifier::BOLD),
            route: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Top bar: application badge on the left, screen title and route on the right.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    title: &'a str,
    route: Option<&'a str>,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            title: "",
            route: None,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub const fn route(mut self, route: &'a str) -> Self {
        self.route = Some(route);
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn right_spans(&self) -> Vec<Span<'a>> {
        let mut spans = vec![Span::styled(self.title, self.style.title)];
        if let Some(route) = self.route {
            spans.push(Span::styled(format!("  {route} "), self.style.route));
        }
        spans
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let left_line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::raw(" "),
            Span::styled(format!(" v{} ", self.version), self.style.version),
        ]);
        let left_width = u16::try_from(left_line.width()).unwrap_or(u16::MAX);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let right_line = Line::from(self.right_spans());
        let right_width = u16::try_from(right_line.width()).unwrap_or(u16::MAX);
        if right_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(right_line).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(header: HeaderBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        header.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_header_shows_badge_and_route() {
        let text = render(
            HeaderBar::new("staffdeck", "0.1.0")
                .title("Employee List")
                .route("/"),
            60,
        );
        assert!(text.starts_with(" STAFFDECK   v0.1.0 "));
        assert!(text.contains("Employee List  / "));
    }

    #[test]
    fn test_narrow_header_drops_right_side() {
        let text = render(
            HeaderBar::new("staffdeck", "0.1.0").title("Employee List"),
            24,
        );
        assert!(!text.contains("Employee"));
        assert!(text.trim_end().ends_with("v0.1.0"));
    }

    #[test]
    fn test_title_width_counts_unicode() {
        let header = HeaderBar::new("a", "1").title("Çalışan");
        let width: usize = header.right_spans().iter().map(|s| s.content.width()).sum();
        assert_eq!(width, 7);
    }
}
