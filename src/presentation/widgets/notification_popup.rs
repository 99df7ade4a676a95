use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationLevel};
use crate::presentation::theme::Theme;

const MAX_POPUP_WIDTH: u16 = 60;
const MAX_POPUP_HEIGHT: u16 = 10;

/// Toast anchored to the top-right corner.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> NotificationPopup<'a> {
    #[must_use]
    pub const fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
        }
    }

    fn level_style(&self) -> Style {
        match self.notification.level {
            NotificationLevel::Success => self.theme.success_style,
            NotificationLevel::Info => Style::default().fg(self.theme.accent),
            NotificationLevel::Error => self.theme.error_style,
        }
    }

    fn popup_area(&self, area: Rect) -> Rect {
        let title_width = u16::try_from(self.notification.title.width() + 2).unwrap_or(u16::MAX);
        let message_width = u16::try_from(self.notification.message.width()).unwrap_or(u16::MAX);

        let width = message_width
            .max(title_width)
            .saturating_add(4)
            .min(MAX_POPUP_WIDTH.min(area.width.saturating_sub(2)));
        let inner_width = width.saturating_sub(2).max(1);
        let lines = message_width.div_ceil(inner_width);
        let height = lines.saturating_add(2).clamp(3, MAX_POPUP_HEIGHT);

        let x = area.x + area.width.saturating_sub(width).saturating_sub(2);
        let y = area.y + 2;
        area.intersection(Rect::new(x, y, width, height))
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = self.popup_area(area);
        if popup_area.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.notification.title))
            .style(self.level_style());

        let paragraph = Paragraph::new(self.notification.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(popup_area, buf);
        paragraph.render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_fits_in_corner() {
        let notification = Notification::success("Deleted", "Ada Lovelace was removed");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);

        let popup = NotificationPopup::new(&notification, &theme).popup_area(area);

        assert_eq!(popup.y, 2);
        assert_eq!(popup.right(), 78);
        assert_eq!(popup.height, 3);
    }

    #[test]
    fn test_render_message() {
        let notification = Notification::error("Not found", "Employee does not exist");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);

        NotificationPopup::new(&notification, &theme).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Not found"));
        assert!(text.contains("Employee does not exist"));
    }

    #[test]
    fn test_tiny_area_renders_nothing() {
        let notification = Notification::success("Saved", "ok");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);

        NotificationPopup::new(&notification, &theme).render(area, &mut buf);

        assert!(buf.content().iter().all(|c| c.symbol() == " "));
    }
}
