// src/ui.rs

use crate::api;
use crate::app::{App, AppScreen, ExchangeOutcome};
use crate::chat_view::draw_chat;
use crate::config::get_config;
use crate::errors::EmpathResult;
use crate::key_handlers::{handle_chat_input, handle_quit_confirm_input, KeyOutcome};
use crate::typing_indicator::TypingTicket;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the terminal UI until the user quits.
pub async fn run_ui(mut app: App) -> EmpathResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> EmpathResult<()> {
    let config = get_config();
    let client = api::build_client()?;

    // Terminal events and the periodic tick share one channel
    let (event_tx, mut event_rx) = mpsc::channel::<Event>(100);

    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            let timeout = Duration::from_millis(50);
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(event) = event::read() {
                    if event_tx.send(Event::Input(event)).await.is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= Duration::from_millis(100) {
                if event_tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    // Worker: one exchange at a time, outcomes flow back to the loop
    let (query_tx, mut query_rx) = mpsc::channel::<(TypingTicket, String)>(16);
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<(TypingTicket, ExchangeOutcome)>(16);

    {
        let client = client.clone();
        let base_url = config.base_url.clone();
        tokio::spawn(async move {
            while let Some((ticket, message)) = query_rx.recv().await {
                let outcome = match api::send_chat(&client, &base_url, &message).await {
                    Ok(reply) => ExchangeOutcome::Reply(reply),
                    Err(e) => {
                        log::error!("Chat request failed: {}", e);
                        ExchangeOutcome::Failed
                    }
                };
                if outcome_tx.send((ticket, outcome)).await.is_err() {
                    return;
                }
            }
        });
    }

    // Fire-and-forget startup probe
    let (health_tx, mut health_rx) = mpsc::channel(1);
    {
        let client = client.clone();
        let base_url = config.base_url.clone();
        tokio::spawn(async move {
            let state = api::check_health(&client, &base_url).await;
            let _ = health_tx.send(state).await;
        });
    }

    loop {
        terminal.draw(|f| draw_chat(f, app))?;

        tokio::select! {
            Some(event) = event_rx.recv() => {
                match event {
                    Event::Input(CEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        match app.screen {
                            AppScreen::Chat => {
                                if let KeyOutcome::Dispatch { ticket, message } =
                                    handle_chat_input(key, app)
                                {
                                    if query_tx.send((ticket, message)).await.is_err() {
                                        // Worker is gone; settle immediately
                                        app.finish_exchange(
                                            ticket,
                                            ExchangeOutcome::Failed,
                                            Instant::now(),
                                        );
                                    }
                                }
                            }
                            AppScreen::QuitConfirm => handle_quit_confirm_input(key, app),
                            AppScreen::Quit => {}
                        }
                    }
                    Event::Tick => app.tick(Instant::now()),
                    _ => {}
                }
            }
            Some((ticket, outcome)) = outcome_rx.recv() => {
                app.finish_exchange(ticket, outcome, Instant::now());
            }
            Some(state) = health_rx.recv() => {
                app.apply_health(state);
            }
            else => break,
        }

        if app.screen == AppScreen::Quit {
            break;
        }
    }

    Ok(())
}
