use crate::models::HealthState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Colored dot plus label reflecting the startup health probe. Stays on
/// whatever the single probe reported; there is no periodic re-check.
#[derive(Debug)]
pub struct StatusIndicator {
    health: HealthState,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self {
            health: HealthState::Unknown,
        }
    }

    pub fn set_health(&mut self, health: HealthState) {
        self.health = health;
    }

    pub fn health(&self) -> HealthState {
        self.health
    }

    pub fn label(&self) -> &'static str {
        match self.health {
            HealthState::Unknown => "Connecting...",
            HealthState::Online => "Online",
            HealthState::Offline => "Offline",
        }
    }

    fn dot_color(&self) -> Color {
        match self.health {
            HealthState::Unknown => Color::DarkGray,
            HealthState::Online => Color::Green,
            HealthState::Offline => Color::Red,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("●", Style::default().fg(self.dot_color())),
            Span::raw(" "),
            Span::styled(self.label(), Style::default().fg(Color::Gray)),
        ]);

        frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
    }
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unknown() {
        let indicator = StatusIndicator::new();
        assert_eq!(indicator.health(), HealthState::Unknown);
        assert_eq!(indicator.label(), "Connecting...");
    }

    #[test]
    fn label_follows_probe_result() {
        let mut indicator = StatusIndicator::new();
        indicator.set_health(HealthState::Online);
        assert_eq!(indicator.label(), "Online");
        indicator.set_health(HealthState::Offline);
        assert_eq!(indicator.label(), "Offline");
    }
}
