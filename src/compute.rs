//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::config::Config;
use crate::entities::{Enemy, GameState, GameStatus, Player, Projectile, Rect};
use crate::input::InputIntent;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: player centred at the bottom, empty world.
pub fn init_state(config: Config) -> GameState {
    GameState {
        player: Player::spawn(&config),
        projectiles: Vec::new(),
        enemies: Vec::new(),
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
        config,
    }
}

/// Start over with the same tuning, regardless of the current state.
pub fn reset(state: &GameState) -> GameState {
    tracing::info!(final_score = state.score, "game reset");
    init_state(state.config)
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Apply one input intent.  While the game is over only `Retry` does
/// anything; while playing `Retry` is ignored.
pub fn apply_input(state: &GameState, intent: InputIntent) -> GameState {
    match (state.status, intent) {
        (GameStatus::GameOver, InputIntent::Retry) => reset(state),
        (GameStatus::GameOver, _) => state.clone(),
        (GameStatus::Playing, InputIntent::MoveLeft) => move_player_left(state),
        (GameStatus::Playing, InputIntent::MoveRight) => move_player_right(state),
        (GameStatus::Playing, InputIntent::Fire) => player_shoot(state),
        (GameStatus::Playing, InputIntent::Retry | InputIntent::None) => state.clone(),
    }
}

pub fn move_player_left(state: &GameState) -> GameState {
    let x = state.player.rect.x - state.config.player_speed;
    with_player_x(state, x)
}

pub fn move_player_right(state: &GameState) -> GameState {
    let x = state.player.rect.x + state.config.player_speed;
    with_player_x(state, x)
}

fn with_player_x(state: &GameState, x: f32) -> GameState {
    let max_x = (state.config.canvas_width - state.player.rect.width).max(0.0);
    GameState {
        player: Player {
            rect: Rect {
                x: x.clamp(0.0, max_x),
                ..state.player.rect
            },
        },
        ..state.clone()
    }
}

/// Fire a projectile from the centre of the player's top edge.
/// No-op once the game is over.
pub fn player_shoot(state: &GameState) -> GameState {
    if state.is_over() {
        return state.clone();
    }
    let cfg = &state.config;
    let p = &state.player.rect;
    let new_projectile = Projectile {
        rect: Rect::new(
            p.x + p.width / 2.0 - cfg.projectile_width / 2.0,
            p.y,
            cfg.projectile_width,
            cfg.projectile_height,
        ),
    };
    let mut projectiles = state.projectiles.clone();
    projectiles.push(new_projectile);
    GameState {
        projectiles,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// A finished game is frozen: the state comes back unchanged.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.is_over() {
        return state.clone();
    }
    let cfg = &state.config;

    // ── 1. Move projectiles up, drop the ones past the top edge ─────────────
    let projectiles: Vec<Projectile> = state
        .projectiles
        .iter()
        .map(|p| Projectile {
            rect: Rect {
                y: p.rect.y - cfg.projectile_speed,
                ..p.rect
            },
        })
        .filter(|p| p.rect.y >= 0.0)
        .collect();

    // ── 2. Move enemies down, drop the ones past the bottom edge ────────────
    let mut enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| Enemy {
            rect: Rect {
                y: e.rect.y + cfg.enemy_speed,
                ..e.rect
            },
        })
        .filter(|e| e.rect.y <= cfg.canvas_height)
        .collect();

    // ── 3. Maybe spawn a new enemy ───────────────────────────────────────────
    if let Some(enemy) = maybe_spawn_enemy(cfg, rng) {
        tracing::debug!(x = enemy.rect.x, frame = state.frame + 1, "enemy spawned");
        enemies.push(enemy);
    }

    // ── 4. Collision: projectiles ↔ enemies ──────────────────────────────────
    let (enemies, projectiles, hits) = resolve_hits(enemies, projectiles);
    if hits > 0 {
        tracing::debug!(hits, "enemies destroyed");
    }
    let score = state.score.saturating_add(hits.saturating_mul(cfg.score_per_kill));

    // ── 5. Collision: surviving enemies ↔ player ─────────────────────────────
    let status = if enemies.iter().any(|e| e.rect.overlaps(&state.player.rect)) {
        GameStatus::GameOver
    } else {
        GameStatus::Playing
    };

    GameState {
        projectiles,
        enemies,
        score,
        status,
        frame: state.frame + 1,
        ..state.clone()
    }
}

/// Roll the per-frame spawn chance; on success the enemy sits on the top
/// edge at a random x that keeps it fully inside the canvas.
pub fn maybe_spawn_enemy(config: &Config, rng: &mut impl Rng) -> Option<Enemy> {
    if !rng.gen_bool(config.spawn_probability) {
        return None;
    }
    let span = (config.canvas_width - config.enemy_size).max(0.0);
    let x = rng.gen::<f32>() * span;
    Some(Enemy {
        rect: Rect::new(x, 0.0, config.enemy_size, config.enemy_size),
    })
}

/// Pairwise projectile/enemy resolution.
///
/// Enemies are visited in order; each is matched against the first
/// remaining projectile it overlaps, and both are removed.  A projectile is
/// consumed by at most one enemy.  Returns the survivors and the hit count.
pub fn resolve_hits(
    enemies: Vec<Enemy>,
    mut projectiles: Vec<Projectile>,
) -> (Vec<Enemy>, Vec<Projectile>, u32) {
    let mut hits = 0;
    let survivors: Vec<Enemy> = enemies
        .into_iter()
        .filter(|enemy| {
            match projectiles.iter().position(|p| p.rect.overlaps(&enemy.rect)) {
                Some(hit) => {
                    projectiles.remove(hit);
                    hits += 1;
                    false
                }
                None => true,
            }
        })
        .collect();
    (survivors, projectiles, hits)
}
