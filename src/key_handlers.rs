use crate::app::{App, AppScreen};
use crate::typing_indicator::TypingTicket;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the event loop should do after a key was applied to the controller.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    /// A message left the compose buffer and must be handed to the worker.
    Dispatch {
        ticket: TypingTicket,
        message: String,
    },
}

pub fn handle_chat_input(key: KeyEvent, app: &mut App) -> KeyOutcome {
    match key.code {
        KeyCode::Esc => {
            app.screen = AppScreen::QuitConfirm;
        }
        KeyCode::Enter => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                // Shift+Enter extends the compose buffer instead of sending
                if !app.is_busy() {
                    app.input.push('\n');
                }
            } else if let Some((ticket, message)) = app.submit() {
                return KeyOutcome::Dispatch { ticket, message };
            }
        }
        KeyCode::Backspace => {
            if !app.is_busy() {
                app.input.pop();
            }
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Up if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !app.is_busy() {
                app.history_prev();
            }
        }
        KeyCode::Down if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !app.is_busy() {
                app.history_next();
            }
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.screen = AppScreen::QuitConfirm,
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else if !app.is_busy() {
                app.input.push(c);
            }
        }
        _ => {}
    }
    KeyOutcome::Continue
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.screen = AppScreen::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.screen = AppScreen::Chat;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn enter_dispatches_non_empty_input() {
        let mut app = App::new();
        app.input = "hello".to_string();

        let outcome = handle_chat_input(key(KeyCode::Enter), &mut app);
        assert!(matches!(
            outcome,
            KeyOutcome::Dispatch { message, .. } if message == "hello"
        ));
    }

    #[test]
    fn enter_on_blank_input_does_nothing() {
        let mut app = App::new();
        app.input = "   ".to_string();

        let outcome = handle_chat_input(key(KeyCode::Enter), &mut app);
        assert_eq!(outcome, KeyOutcome::Continue);
        assert!(app.messages.is_empty());
    }

    #[test]
    fn shift_enter_inserts_newline_instead_of_sending() {
        let mut app = App::new();
        app.input = "line one".to_string();

        let outcome = handle_chat_input(
            key_with(KeyCode::Enter, KeyModifiers::SHIFT),
            &mut app,
        );
        assert_eq!(outcome, KeyOutcome::Continue);
        assert_eq!(app.input, "line one\n");
        assert!(app.messages.is_empty());
    }

    #[test]
    fn editing_keys_are_refused_while_busy() {
        let mut app = App::new();
        app.input = "hello".to_string();
        let _ = app.submit().unwrap();

        handle_chat_input(key(KeyCode::Char('x')), &mut app);
        handle_chat_input(key(KeyCode::Backspace), &mut app);
        assert!(app.input.is_empty());

        let outcome = handle_chat_input(key(KeyCode::Enter), &mut app);
        assert_eq!(outcome, KeyOutcome::Continue);
    }

    #[test]
    fn typed_characters_reach_the_compose_buffer() {
        let mut app = App::new();
        for c in ['h', 'i'] {
            handle_chat_input(key(KeyCode::Char(c)), &mut app);
        }
        assert_eq!(app.input, "hi");
    }

    #[test]
    fn esc_opens_quit_confirm_and_n_cancels() {
        let mut app = App::new();
        handle_chat_input(key(KeyCode::Esc), &mut app);
        assert_eq!(app.screen, AppScreen::QuitConfirm);

        handle_quit_confirm_input(key(KeyCode::Char('n')), &mut app);
        assert_eq!(app.screen, AppScreen::Chat);
    }

    #[test]
    fn quit_confirm_y_quits() {
        let mut app = App::new();
        app.screen = AppScreen::QuitConfirm;
        handle_quit_confirm_input(key(KeyCode::Char('y')), &mut app);
        assert_eq!(app.screen, AppScreen::Quit);
    }
}
