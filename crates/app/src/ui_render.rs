//! Rendering for the fight screen and the outcome screen.

use crate::game_layout::{FrameLayout, PanelRect};
use crate::ui_text::{KEY_LEGEND, REMATCH_HINT, outcome_recap_lines, outcome_title, status_text};
use fight_app::app_loop::{AppScreen, AppState};
use fight_core::{Outcome, Session};
use macroquad::prelude::*;

const BORDER_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };
const BORDER_THICKNESS: f32 = 1.0;
const PANEL_PAD_X: f32 = 15.0;
const PANEL_PAD_Y: f32 = 25.0;
const LINE_HEIGHT: f32 = 26.0;
const BAR_HEIGHT: f32 = 16.0;

pub fn draw_frame(app_state: &AppState, session: &Session, run_seed: u64, layout: &FrameLayout) {
    match app_state.screen {
        AppScreen::Fight => draw_fight(app_state, session, layout),
        AppScreen::Outcome(outcome) => draw_outcome(outcome, session, run_seed),
    }
}

fn draw_fight(app_state: &AppState, session: &Session, layout: &FrameLayout) {
    for panel in [layout.player, layout.enemy, layout.info] {
        draw_rectangle_lines(
            panel.x,
            panel.y,
            panel.width,
            panel.height,
            BORDER_THICKNESS,
            BORDER_COLOR,
        );
    }

    draw_text(status_text(session.phase()), layout.header.x, layout.header.y + 30.0, 36.0, YELLOW);

    let max_health = session.config().starting_health;
    draw_fighter_panel(
        "YOU",
        &app_state.texts.player_health,
        health_bar_fraction(session.player_health(), max_health),
        layout.player,
        GREEN,
    );
    draw_fighter_panel(
        "ENEMY",
        &app_state.texts.opponent_health,
        health_bar_fraction(session.opponent_health(), max_health),
        layout.enemy,
        RED,
    );

    let mut text_y = layout.info.y + PANEL_PAD_Y;
    for line in app_state.texts.info.lines() {
        draw_text(line, layout.info.x + PANEL_PAD_X, text_y, 24.0, WHITE);
        text_y += LINE_HEIGHT;
    }

    draw_text(KEY_LEGEND, layout.footer.x, layout.footer.y + 20.0, 20.0, LIGHTGRAY);
}

fn draw_fighter_panel(
    label: &str,
    health_text: &str,
    fraction: f32,
    panel: PanelRect,
    color: Color,
) {
    let text_x = panel.x + PANEL_PAD_X;
    draw_text(label, text_x, panel.y + PANEL_PAD_Y, 24.0, color);
    draw_text(health_text, text_x, panel.y + PANEL_PAD_Y + 45.0, 48.0, WHITE);

    let bar_width = (panel.width - 2.0 * PANEL_PAD_X).max(0.0);
    let bar_y = panel.y + panel.height - PANEL_PAD_Y;
    draw_rectangle(text_x, bar_y, bar_width, BAR_HEIGHT, DARKGRAY);
    draw_rectangle(text_x, bar_y, bar_width * fraction, BAR_HEIGHT, color);
}

fn draw_outcome(outcome: Outcome, session: &Session, run_seed: u64) {
    let title = outcome_title(outcome);
    let title_size = 64.0;
    let dimensions = measure_text(title, None, title_size as u16, 1.0);
    let center_y = screen_height() / 2.0;
    let color = if outcome.is_win() { GREEN } else { RED };
    draw_text(title, centered_x(dimensions.width, screen_width()), center_y, title_size, color);

    let mut text_y = center_y + 40.0;
    for line in outcome_recap_lines(run_seed, session.exchanges_resolved(), session.snapshot_hash())
    {
        let dimensions = measure_text(&line, None, 20, 1.0);
        draw_text(&line, centered_x(dimensions.width, screen_width()), text_y, 20.0, LIGHTGRAY);
        text_y += 22.0;
    }

    let dimensions = measure_text(REMATCH_HINT, None, 24, 1.0);
    draw_text(
        REMATCH_HINT,
        centered_x(dimensions.width, screen_width()),
        text_y + 20.0,
        24.0,
        WHITE,
    );
}

/// Share of the health bar to fill, kept within `0.0..=1.0`.
fn health_bar_fraction(health: i32, max_health: i32) -> f32 {
    if max_health <= 0 {
        return 0.0;
    }
    (health as f32 / max_health as f32).clamp(0.0, 1.0)
}

fn centered_x(content_width: f32, container_width: f32) -> f32 {
    ((container_width - content_width) / 2.0).max(0.0)
}

#[cfg(test)]
mod tests;
