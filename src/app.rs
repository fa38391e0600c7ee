use crate::chat_message::ChatMessage;
use crate::emotion_banner::EmotionBanner;
use crate::log_view::LogView;
use crate::models::{ChatReply, HealthState};
use crate::status_indicator::StatusIndicator;
use crate::typing_indicator::{TypingIndicator, TypingTicket};
use chrono::{DateTime, Local};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Chat,
    QuitConfirm,
    Quit,
}

/// How one chat exchange settled, as reported by the worker task. Every error
/// kind collapses to `Failed`; the user sees a single fallback bubble.
#[derive(Debug, Clone)]
pub enum ExchangeOutcome {
    Reply(ChatReply),
    Failed,
}

/// The chat controller. Owns the transcript, the compose buffer, and the
/// lifecycle of the single permitted in-flight exchange.
pub struct App {
    pub screen: AppScreen,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub typing: Option<TypingIndicator>,
    pub status_indicator: StatusIndicator,
    pub emotion_banner: EmotionBanner,
    pub logs: LogView,
    pub chat_scroll: u16,
    pub logs_scroll: u16,
    pub command_history: Vec<String>,
    pub command_index: Option<usize>,
    pub started_at: DateTime<Local>,
    busy: bool,
    ticket_seq: u64,
}

impl App {
    pub fn new() -> App {
        App {
            screen: AppScreen::Chat,
            messages: Vec::new(),
            input: String::new(),
            typing: None,
            status_indicator: StatusIndicator::new(),
            emotion_banner: EmotionBanner::new(),
            logs: LogView::new(),
            chat_scroll: 0,
            logs_scroll: 0,
            command_history: Vec::new(),
            command_index: None,
            started_at: Local::now(),
            busy: false,
            ticket_seq: 0,
        }
    }

    /// True while one exchange is in flight; the compose surface is refused
    /// for exactly this window.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Collects the compose buffer for dispatch. Blank input is a no-op with
    /// no visible effect; a second submit while busy is refused outright, so
    /// the single-in-flight invariant does not rest on the UI alone.
    pub fn submit(&mut self) -> Option<(TypingTicket, String)> {
        if self.busy {
            return None;
        }

        let text = self.input.trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.input.clear();
        self.command_history.push(text.clone());
        self.command_index = None;

        // Optimistic echo before the request goes out
        self.push_message(ChatMessage::user(&text));
        self.emotion_banner.hide();

        self.busy = true;
        self.ticket_seq += 1;
        let ticket = TypingTicket::new(self.ticket_seq);
        self.typing = Some(TypingIndicator::new(ticket));

        self.logs.add(format!("Sending message ({} chars)", text.len()));
        log::info!("Dispatching chat message ({} chars)", text.len());

        Some((ticket, text))
    }

    /// Settles the in-flight exchange: removes the typing placeholder,
    /// appends the reply or the fallback error bubble, and re-enables the
    /// compose surface on both paths.
    pub fn finish_exchange(&mut self, ticket: TypingTicket, outcome: ExchangeOutcome, now: Instant) {
        match self.typing.as_ref().map(|t| t.ticket()) {
            Some(current) if current != ticket => {
                // Settlement for an exchange this controller no longer
                // tracks; dropping it keeps the live placeholder intact.
                log::warn!("Dropping settlement for a stale exchange");
                return;
            }
            _ => self.typing = None,
        }

        match outcome {
            ExchangeOutcome::Reply(reply) => {
                if let Some(emotion) = reply.notable_emotion() {
                    self.emotion_banner.show(emotion, now);
                    self.logs.add(format!("Emotion detected: {}", emotion));
                }
                self.push_message(ChatMessage::bot(&reply.response));
                self.logs.add("Reply received");
            }
            ExchangeOutcome::Failed => {
                self.push_message(ChatMessage::error());
                self.logs.add("Chat request failed");
            }
        }

        self.busy = false;
    }

    /// Applies the startup probe result. Independent of the send flow; an
    /// offline backend does not block sending.
    pub fn apply_health(&mut self, state: HealthState) {
        self.status_indicator.set_health(state);
        self.logs.add(format!(
            "Health probe: {}",
            self.status_indicator.label()
        ));
        log::info!("Health probe settled: {:?}", state);
    }

    /// Periodic housekeeping: spinner animation and banner expiry.
    pub fn tick(&mut self, now: Instant) {
        if let Some(typing) = self.typing.as_mut() {
            typing.advance();
        }
        self.emotion_banner.expire(now);
    }

    fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        // Snap to the bottom; the draw pass clamps to content height
        self.chat_scroll = u16::MAX;
    }

    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn history_prev(&mut self) {
        if self.command_history.is_empty() {
            return;
        }
        let index = match self.command_index {
            None => self.command_history.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.command_index = Some(index);
        self.input = self.command_history[index].clone();
    }

    pub fn history_next(&mut self) {
        match self.command_index {
            None => {}
            Some(i) if i + 1 < self.command_history.len() => {
                self.command_index = Some(i + 1);
                self.input = self.command_history[i + 1].clone();
            }
            Some(_) => {
                self.command_index = None;
                self.input.clear();
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
