//! Rendering for the game scene: play area, HUD, and phase overlays.

use crate::constants::*;
use crate::game::types::{Session, SessionPhase};
use crate::ui::background::Background;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const PIPE_TOP_COLOR: Color = Color::Rgb(0, 100, 0);
const PIPE_BOTTOM_COLOR: Color = Color::Rgb(144, 238, 144);
const GROUND_COLOR: Color = Color::Rgb(139, 69, 19);
const BIRD_COLOR: Color = Color::Rgb(255, 223, 0);

/// Render the whole session into the given area.
pub fn render_session(frame: &mut Frame, area: Rect, session: &Session, background: &Background) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    render_play_area(frame, area, session, background);
    render_hud(frame, area, session);

    match session.phase {
        SessionPhase::Start => render_start_overlay(frame, area),
        SessionPhase::GameOver => render_game_over_overlay(frame, area, session),
        SessionPhase::Playing => {}
    }
}

/// Scan the display area cell by cell, mapping each cell center back into
/// the 400x600 virtual space and picking what lives there: bird, pipe,
/// ground, or sky.
fn render_play_area(frame: &mut Frame, area: Rect, session: &Session, background: &Background) {
    let width = area.width as usize;
    let height = area.height as usize;

    let bird_box = session.bird.bounding_box();

    let mut lines = Vec::with_capacity(height);
    for display_row in 0..height {
        let vy = (display_row as f64 + 0.5) / height as f64 * SCREEN_HEIGHT;
        let mut spans = Vec::with_capacity(width);

        for display_col in 0..width {
            let vx = (display_col as f64 + 0.5) / width as f64 * SCREEN_WIDTH;

            if bird_box.contains(vx, vy) {
                spans.push(Span::styled(
                    bird_glyph(session.bird.velocity),
                    Style::default()
                        .fg(BIRD_COLOR)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let mut in_top = false;
            let mut in_bottom = false;
            for pipe in &session.pipes {
                if pipe.top_rect().contains(vx, vy) {
                    in_top = true;
                    break;
                }
                if pipe.bottom_rect().contains(vx, vy) {
                    in_bottom = true;
                    break;
                }
            }

            if in_top {
                spans.push(Span::styled("█", Style::default().fg(PIPE_TOP_COLOR)));
            } else if in_bottom {
                spans.push(Span::styled("█", Style::default().fg(PIPE_BOTTOM_COLOR)));
            } else if vy >= GROUND_Y {
                spans.push(Span::styled("▓", Style::default().fg(GROUND_COLOR)));
            } else {
                spans.push(Span::styled(
                    " ",
                    Style::default().bg(background.color_at(vy)),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Bird glyph tilted by vertical velocity.
fn bird_glyph(velocity: f64) -> &'static str {
    if velocity < -2.0 {
        "▲"
    } else if velocity > 2.0 {
        "▼"
    } else {
        "►"
    }
}

/// Score, high score, and autopilot indicator in the top-left corner.
fn render_hud(frame: &mut Frame, area: Rect, session: &Session) {
    let hud_area = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2).min(26),
        height: area.height.min(3),
    };
    if hud_area.width == 0 || hud_area.height == 0 {
        return;
    }

    let autopilot_span = if session.autopilot {
        Span::styled("Autopilot ON  [a]", Style::default().fg(Color::Cyan))
    } else {
        Span::styled("Autopilot OFF [a]", Style::default().fg(Color::DarkGray))
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Score: {}", session.score),
            Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("High Score: {}", session.high_score),
            Style::default().fg(Color::Black),
        )),
        Line::from(autopilot_span),
    ];

    frame.render_widget(Paragraph::new(lines), hud_area);
}

/// Centered start screen panel.
fn render_start_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(area, 30, 5);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(
            "Skyward",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Space to Start",
            Style::default().fg(Color::White),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

/// Centered game-over panel with the final and best scores.
fn render_game_over_overlay(frame: &mut Frame, area: Rect, session: &Session) {
    let popup = centered_rect(area, 34, 7);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(
            "Game Over!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}   High Score: {}", session.score, session.high_score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press R to Restart",
            Style::default().fg(Color::White),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

/// A fixed-size rect centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
