use crate::app::{App, AppScreen};
use crate::constants::BOT_AVATAR;
use crate::utils::format_clock;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw_chat(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .margin(1)
        .split(size);

    let banner_height = if app.emotion_banner.is_visible() { 1 } else { 0 };
    let chat_vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(banner_height),
                Constraint::Min(1),
                Constraint::Length(4),
            ]
            .as_ref(),
        )
        .split(horizontal_chunks[0]);

    draw_header(f, app, chat_vertical_chunks[0]);
    app.emotion_banner.render(f, chat_vertical_chunks[1]);
    draw_messages(f, app, chat_vertical_chunks[2]);
    draw_input(f, app, chat_vertical_chunks[3]);
    draw_logs(f, app, horizontal_chunks[1], size);

    if app.screen == AppScreen::QuitConfirm {
        draw_quit_confirm(f, size);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "empath",
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(title, area);

    app.status_indicator.render(f, area);
}

fn draw_messages(f: &mut Frame, app: &App, area: Rect) {
    if app.messages.is_empty() && app.typing.is_none() {
        draw_welcome(f, app, area);
        return;
    }

    let mut lines = Vec::new();
    for message in app.messages.iter() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message.render(area));
    }
    if let Some(typing) = app.typing.as_ref() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(typing.render());
    }

    let total_lines = lines.len() as u16;
    let available_height = area.height;
    let max_scroll = total_lines.saturating_sub(available_height);
    let chat_scroll = app.chat_scroll.min(max_scroll);

    let msgs_para = Paragraph::new(lines)
        .style(Style::default())
        .block(Block::default())
        .wrap(Wrap { trim: true });
    f.render_widget(msgs_para.scroll((chat_scroll, 0)), area);
}

/// One-time placeholder shown until the first message lands, stamped with
/// the startup time.
fn draw_welcome(f: &mut Frame, app: &App, area: Rect) {
    let style = Style::default().fg(Color::Rgb(144, 238, 144));
    let lines = vec![
        Line::from(vec![
            Span::styled("┌─", style),
            Span::styled(format!("{} ", BOT_AVATAR), style),
            Span::styled(
                format_clock(app.started_at),
                style.add_modifier(Modifier::DIM),
            ),
        ]),
        Line::from(vec![
            Span::styled("│ ", style),
            Span::styled(crate::constants::WELCOME_TEXT, style),
        ]),
        Line::from(Span::styled("╰─", style)),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator.clone(),
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    // The prefix doubles as the in-flight indicator: sending refuses input
    let (prefix, prefix_style) = if app.is_busy() {
        ("⋯ ", Style::default().fg(Color::DarkGray))
    } else if app.command_index.is_some() {
        ("⌃ ", Style::default().fg(Color::Yellow))
    } else {
        ("→ ", Style::default().fg(Color::DarkGray))
    };

    let input_style = if app.is_busy() {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::White)
    };

    let mut input_lines: Vec<Line> = Vec::new();
    for (i, buffer_line) in app.input.split('\n').enumerate() {
        if i == 0 {
            input_lines.push(Line::from(vec![
                Span::styled(prefix, prefix_style),
                Span::styled(buffer_line.to_string(), input_style),
            ]));
        } else {
            input_lines.push(Line::from(vec![
                Span::styled("  ", prefix_style),
                Span::styled(buffer_line.to_string(), input_style),
            ]));
        }
    }

    let visible_lines = area.height.saturating_sub(2).max(1);
    let line_count = input_lines.len() as u16;
    let vertical_scroll = line_count.saturating_sub(visible_lines);

    f.render_widget(
        Paragraph::new(input_lines).scroll((vertical_scroll, 0)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height - 2,
        },
    );

    // History mode indicator when recalling earlier messages
    if let Some(index) = app.command_index {
        let history_text = format!(
            " [Ctrl History {}/{}] ",
            index + 1,
            app.command_history.len()
        );
        let indicator_width = history_text.len() as u16;
        let indicator_x = area.x + area.width - indicator_width;

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                history_text,
                Style::default().fg(Color::Yellow).bg(Color::Black),
            ))),
            Rect {
                x: indicator_x,
                y: area.y + 1,
                width: indicator_width,
                height: 1,
            },
        );
    }

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        },
    );

    if !app.is_busy() {
        let last_line = app.input.split('\n').last().unwrap_or("");
        let cursor_row = (line_count.saturating_sub(1)).min(visible_lines - 1);
        let cursor_x = area.x + 2 + last_line.width() as u16;
        f.set_cursor_position((cursor_x.min(area.x + area.width - 1), area.y + 1 + cursor_row));
    }
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect, size: Rect) {
    let vsep = "│".repeat(size.height.saturating_sub(2) as usize);
    f.render_widget(
        Paragraph::new(Span::raw(vsep)).style(Style::default().fg(Color::DarkGray)),
        Rect {
            x: area.x.saturating_sub(1),
            y: 1,
            width: 1,
            height: size.height.saturating_sub(2),
        },
    );

    let log_lines: Vec<Line> = app
        .logs
        .entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(entry.clone()),
            ])
        })
        .collect();

    let total_log_lines = log_lines.len() as u16;
    let max_log_scroll = total_log_lines.saturating_sub(area.height);
    let logs_scroll = app.logs_scroll.min(max_log_scroll);

    let logs_para = Paragraph::new(log_lines)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(logs_para.scroll((logs_scroll, 0)), area);
}

fn draw_quit_confirm(f: &mut Frame, size: Rect) {
    let width = 44.min(size.width);
    let height = 5.min(size.height);
    let area = Rect {
        x: (size.width - width) / 2,
        y: (size.height - height) / 2,
        width,
        height,
    };

    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(ratatui::widgets::Borders::ALL)
        .title("Confirm Quit")
        .style(Style::default().fg(Color::LightYellow));
    f.render_widget(block, area);

    let text = "Leave the chat?\n\nPress 'y' to quit or 'n' to stay.";
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(
        paragraph,
        Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        },
    );
}
