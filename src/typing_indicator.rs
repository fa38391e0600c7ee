use crate::constants::BOT_AVATAR;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Identity of one in-flight chat exchange. Minted from a monotonically
/// increasing counter, so two exchanges can never share a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTicket(u64);

impl TypingTicket {
    pub fn new(seq: u64) -> Self {
        TypingTicket(seq)
    }
}

/// Transient placeholder shown in the transcript while a reply is pending.
/// Exists exactly between dispatch and settlement.
#[derive(Debug)]
pub struct TypingIndicator {
    ticket: TypingTicket,
    frame: usize,
}

const DOT_FRAMES: [&str; 4] = ["●  ○  ○", "○  ●  ○", "○  ○  ●", "○  ●  ○"];

impl TypingIndicator {
    pub fn new(ticket: TypingTicket) -> Self {
        Self { ticket, frame: 0 }
    }

    pub fn ticket(&self) -> TypingTicket {
        self.ticket
    }

    pub fn advance(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn render(&self) -> Vec<Line<'static>> {
        let style = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM);
        let dots = DOT_FRAMES[self.frame % DOT_FRAMES.len()];

        vec![
            Line::from(vec![
                Span::styled("┌─".to_string(), style),
                Span::styled(format!("{} ", BOT_AVATAR), style),
            ]),
            Line::from(vec![
                Span::styled("│ ".to_string(), style),
                Span::styled(dots.to_string(), Style::default().fg(Color::Gray)),
            ]),
            Line::from(Span::styled("╰─".to_string(), style)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_compare_by_sequence() {
        assert_eq!(TypingTicket::new(3), TypingTicket::new(3));
        assert_ne!(TypingTicket::new(3), TypingTicket::new(4));
    }

    #[test]
    fn advance_cycles_through_frames() {
        let mut indicator = TypingIndicator::new(TypingTicket::new(1));
        let first = format!("{:?}", indicator.render());
        indicator.advance();
        let second = format!("{:?}", indicator.render());
        assert_ne!(first, second);
    }
}
