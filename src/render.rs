//! Rendering layer — translates a `GameState` into drawing calls.
//!
//! The renderer only reads the state.  Where the pixels end up is decided
//! by the `Surface` implementation (the terminal canvas in the binary, a
//! recorder in tests).

use crossterm::style::Color;

use crate::entities::{GameState, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_PLAYER: Color = Color::White;
pub const C_PROJECTILE: Color = Color::White;
pub const C_ENEMY: Color = Color::Red;
pub const C_TEXT: Color = Color::White;

// ── Text layout ───────────────────────────────────────────────────────────────

const SCORE_FONT_PX: f32 = 20.0;
const TITLE_FONT_PX: f32 = 40.0;
const PROMPT_FONT_PX: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// `x` is the left edge of the text.
    #[default]
    Left,
    /// `x` is the horizontal centre of the text.
    Center,
}

/// A 2D drawing target in canvas coordinates.
///
/// Text is anchored on its baseline; the horizontal anchor depends on the
/// current alignment, which stays in effect until changed.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_triangle(&mut self, points: [(f32, f32); 3], color: Color);
    fn set_text_align(&mut self, align: TextAlign);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: f32, color: Color);
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<S: Surface>(surface: &mut S, state: &GameState) {
    surface.clear();

    draw_player(surface, state);
    for projectile in &state.projectiles {
        surface.fill_rect(projectile.rect, C_PROJECTILE);
    }
    for enemy in &state.enemies {
        surface.fill_rect(enemy.rect, C_ENEMY);
    }

    surface.fill_text(
        &format!("Score: {}", state.score),
        10.0,
        20.0,
        SCORE_FONT_PX,
        C_TEXT,
    );

    if state.is_over() {
        draw_game_over(surface, state);
    }
}

/// Filled triangle with its apex at the middle of the top edge.
pub fn player_triangle(rect: &Rect) -> [(f32, f32); 3] {
    [
        (rect.x, rect.bottom()),
        (rect.x + rect.width / 2.0, rect.y),
        (rect.right(), rect.bottom()),
    ]
}

fn draw_player<S: Surface>(surface: &mut S, state: &GameState) {
    surface.fill_triangle(player_triangle(&state.player.rect), C_PLAYER);
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<S: Surface>(surface: &mut S, state: &GameState) {
    let cx = state.config.canvas_width / 2.0;
    let cy = state.config.canvas_height / 2.0;

    surface.set_text_align(TextAlign::Center);
    surface.fill_text("GAME OVER", cx, cy - 20.0, TITLE_FONT_PX, C_TEXT);
    surface.fill_text("Press Enter to Retry", cx, cy + 20.0, PROMPT_FONT_PX, C_TEXT);
    surface.set_text_align(TextAlign::Left);
}
