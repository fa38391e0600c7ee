use crate::constants::{BOT_AVATAR, FALLBACK_ERROR_TEXT, USER_AVATAR};
use crate::utils::{format_clock, sanitize};
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// One transcript bubble. Created on send/receive and never mutated.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    content: String,
    from_user: bool,
    is_error: bool,
    timestamp: DateTime<Local>,
}

impl ChatMessage {
    /// The user's own message, echoed optimistically before the request is
    /// dispatched. Untrusted text is sanitized here, once.
    pub fn user(content: &str) -> Self {
        Self {
            content: sanitize(content),
            from_user: true,
            is_error: false,
            timestamp: Local::now(),
        }
    }

    /// A reply from the backend. Server text is untrusted too.
    pub fn bot(content: &str) -> Self {
        Self {
            content: sanitize(content),
            from_user: false,
            is_error: false,
            timestamp: Local::now(),
        }
    }

    /// The fixed fallback bubble shown when an exchange fails. The text is a
    /// trusted constant, so no sanitizing pass.
    pub fn error() -> Self {
        Self {
            content: FALLBACK_ERROR_TEXT.to_string(),
            from_user: false,
            is_error: true,
            timestamp: Local::now(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_from_user(&self) -> bool {
        self.from_user
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn render(&self, area: Rect) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let style = self.base_style();

        self.render_header(&mut lines, style);
        self.render_content(&mut lines, area, style);
        self.render_footer(&mut lines, style);

        lines
    }

    fn base_style(&self) -> Style {
        if self.is_error {
            Style::default().fg(Color::Red)
        } else if self.from_user {
            Style::default().fg(Color::Rgb(255, 223, 128))
        } else {
            Style::default().fg(Color::Rgb(144, 238, 144))
        }
    }

    fn avatar(&self) -> &'static str {
        if self.from_user {
            USER_AVATAR
        } else {
            BOT_AVATAR
        }
    }

    fn render_header(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let indent = if self.from_user { "  " } else { "" };
        let mut spans = vec![
            Span::styled(indent.to_string(), style),
            Span::styled("┌─".to_string(), style),
            Span::styled(format!("{} ", self.avatar()), style),
            Span::styled(
                format_clock(self.timestamp),
                style.add_modifier(Modifier::DIM),
            ),
        ];
        if self.is_error {
            spans.push(Span::styled(" ✗".to_string(), style));
        }
        lines.push(Line::from(spans));
    }

    fn render_content(&self, lines: &mut Vec<Line<'static>>, area: Rect, style: Style) {
        let indent = if self.from_user { "  " } else { "" };
        let wrap_width = (area.width as usize).saturating_sub(4).max(1);

        for content_line in self.content.lines() {
            if content_line.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled(indent.to_string(), style),
                    Span::styled("│".to_string(), style),
                ]));
                continue;
            }
            for wrapped_line in wrap(content_line, wrap_width) {
                lines.push(Line::from(vec![
                    Span::styled(indent.to_string(), style),
                    Span::styled("│ ".to_string(), style),
                    Span::styled(wrapped_line.to_string(), style),
                ]));
            }
        }
    }

    fn render_footer(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let indent = if self.from_user { "  " } else { "" };
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("╰─".to_string(), style),
        ]));
    }
}
