//! Main scene: the lottery box, the draw animation, and the result banner.

use super::throbber;
use crate::app::App;
use crate::draw::DrawPhase;
use crate::storage::PrizeStore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BOX_ART: [&str; 6] = [
    r"      _______      ",
    r"     /______/|     ",
    r"    |       ||     ",
    r"    |  ???  ||     ",
    r"    |       |/     ",
    r"    '-------'      ",
];

const BOX_ART_TILTED: [&str; 6] = [
    r"       _______     ",
    r"      /______/|    ",
    r"     |       ||    ",
    r"     |  ???  ||    ",
    r"     |       |/    ",
    r"     '-------'     ",
];

pub fn draw_box_scene<S: PrizeStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(8), // Box art
            Constraint::Length(3), // Status line (spinner / reveal)
            Constraint::Length(3), // Result banner
            Constraint::Min(0),    // Filler
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let title = Paragraph::new("神秘抽奖箱")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_box_art(frame, chunks[1], app);
    draw_status_line(frame, chunks[2], app);
    draw_result_banner(frame, chunks[3], app);
    draw_footer(frame, chunks[5], app);
}

fn draw_box_art<S: PrizeStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    // Shake by alternating the art on the settle countdown.
    let art = match app.active_draw.as_ref().map(|s| &s.phase) {
        Some(DrawPhase::Drawing { ticks_remaining }) if ticks_remaining % 2 == 0 => &BOX_ART_TILTED,
        _ => &BOX_ART,
    };

    let color = if app.draw_in_progress() {
        Color::Yellow
    } else {
        Color::LightYellow
    };

    let lines: Vec<Line> = art
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(color))))
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn draw_status_line<S: PrizeStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let line = match app.active_draw.as_ref().map(|s| &s.phase) {
        Some(DrawPhase::Drawing { ticks_remaining }) => Line::from(vec![
            Span::styled(
                format!("{} 抽奖中... ", throbber::spinner_char()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                throbber::drawing_message(ticks_remaining / 10),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Some(DrawPhase::Revealing { .. }) => Line::from(Span::styled(
            "✦ 结果已定... ✦",
            Style::default().fg(Color::Yellow),
        )),
        Some(DrawPhase::Revealed) => Line::from(Span::styled(
            "✨ 揭晓！ ✨",
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "按 [空格] 开始抽奖",
            Style::default().fg(Color::Gray),
        )),
    };

    let widget = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn draw_result_banner<S: PrizeStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let Some(outcome) = app.revealed_outcome() else {
        return;
    };

    let (text, color) = if outcome.is_win() {
        (
            format!("恭喜您获得了 {}！", outcome.display_name()),
            Color::Green,
        )
    } else {
        ("很遗憾，未中奖".to_string(), Color::Red)
    };

    let banner = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
    frame.render_widget(banner, area);
}

fn draw_footer<S: PrizeStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let hints = if app.draw_in_progress() {
        "[空格] 开始抽奖 (进行中...)    [S] 奖项设置    [Q] 退出"
    } else {
        "[空格] 开始抽奖    [S] 奖项设置    [Q] 退出"
    };

    let footer = Paragraph::new(hints)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}
