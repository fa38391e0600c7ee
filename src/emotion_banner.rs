use crate::constants::EMOTION_BANNER_SECS;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::{Duration, Instant};

/// Transient banner announcing the emotion the backend detected in the last
/// exchange. Self-dismisses after its lifetime, and a new send hides it early.
#[derive(Debug)]
pub struct EmotionBanner {
    current: Option<(String, Instant)>,
    lifetime: Duration,
}

impl EmotionBanner {
    pub fn new() -> Self {
        Self {
            current: None,
            lifetime: Duration::from_secs(EMOTION_BANNER_SECS),
        }
    }

    pub fn show(&mut self, emotion: &str, now: Instant) {
        self.current = Some((format!("Detected emotion: {}", emotion), now));
    }

    pub fn hide(&mut self) {
        self.current = None;
    }

    /// Drops the banner once its lifetime has elapsed. Called from the tick
    /// path with the current instant, which keeps expiry testable.
    pub fn expire(&mut self, now: Instant) {
        if let Some((_, shown_at)) = self.current {
            if now.duration_since(shown_at) >= self.lifetime {
                self.current = None;
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(text) = self.text() {
            let line = Line::from(Span::styled(
                text.to_string(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        }
    }
}

impl Default for EmotionBanner {
    fn default() -> Self {
        Self::new()
    }
}
