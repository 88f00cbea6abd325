//! Gameplay tuning.
//!
//! Every size and speed is in canvas pixels (speeds are per frame or per
//! key press).  The defaults reproduce the classic feel; a RON file named
//! by `TRIANGLE_SHOOTER_CONFIG` may override any subset of fields.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable holding the path of an optional RON tuning file.
pub const CONFIG_ENV: &str = "TRIANGLE_SHOOTER_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// Side of the (square) player bounding box.
    pub player_size: f32,
    /// Horizontal step per movement key press.
    pub player_speed: f32,

    pub projectile_width: f32,
    pub projectile_height: f32,
    /// Upward step per frame.
    pub projectile_speed: f32,

    /// Side of the (square) enemy bounding box.
    pub enemy_size: f32,
    /// Downward step per frame.
    pub enemy_speed: f32,
    /// Chance that one enemy spawns on any given frame, in `[0, 1]`.
    pub spawn_probability: f64,

    pub score_per_kill: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: 480.0,
            canvas_height: 640.0,

            player_size: 30.0,
            player_speed: 5.0,

            projectile_width: 5.0,
            projectile_height: 10.0,
            projectile_speed: 10.0,

            enemy_size: 20.0,
            enemy_speed: 2.0,
            spawn_probability: 0.02,

            score_per_kill: 10,
        }
    }
}

impl Config {
    /// Parse a RON document; missing fields fall back to the defaults.
    pub fn from_ron_str(source: &str) -> Result<Self> {
        let config: Config = ron::from_str(source).context("invalid RON in game config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_ron_str(&source).with_context(|| format!("in config file {}", path.display()))
    }

    /// Load from `$TRIANGLE_SHOOTER_CONFIG` if set, otherwise use the defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = Path::new(&path);
                tracing::info!(path = %path.display(), "loading game config");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("player_size", self.player_size),
            ("player_speed", self.player_speed),
            ("projectile_width", self.projectile_width),
            ("projectile_height", self.projectile_height),
            ("projectile_speed", self.projectile_speed),
            ("enemy_size", self.enemy_size),
            ("enemy_speed", self.enemy_speed),
        ];
        for (name, value) in lengths {
            ensure!(value.is_finite(), "{name} must be finite, got {value}");
        }
        ensure!(
            self.canvas_width > 0.0 && self.canvas_height > 0.0,
            "canvas must have a positive size, got {}x{}",
            self.canvas_width,
            self.canvas_height
        );
        ensure!(
            self.fits_canvas(self.player_size, self.player_size),
            "player_size {} does not fit the canvas",
            self.player_size
        );
        ensure!(
            self.fits_canvas(self.enemy_size, self.enemy_size),
            "enemy_size {} does not fit the canvas",
            self.enemy_size
        );
        ensure!(
            self.fits_canvas(self.projectile_width, self.projectile_height),
            "projectile {}x{} does not fit the canvas",
            self.projectile_width,
            self.projectile_height
        );
        ensure!(
            self.player_speed >= 0.0 && self.projectile_speed >= 0.0 && self.enemy_speed >= 0.0,
            "speeds must not be negative"
        );
        // NaN fails `contains`, so this also rejects non-finite probabilities
        ensure!(
            (0.0..=1.0).contains(&self.spawn_probability),
            "spawn_probability must be within [0, 1], got {}",
            self.spawn_probability
        );
        Ok(())
    }

    fn fits_canvas(&self, width: f32, height: f32) -> bool {
        width > 0.0 && height > 0.0 && width <= self.canvas_width && height <= self.canvas_height
    }
}
