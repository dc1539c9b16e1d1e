//! Game settings and tuning
//!
//! Persisted separately from the high-score record under its own storage key.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::storage::{KeyValueStore, StorageError};

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Surface ===
    /// Surface width used when no real canvas is present (headless runs)
    pub surface_width: f32,
    /// Surface height used when no real canvas is present (headless runs)
    pub surface_height: f32,

    // === Rods ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each rod and its edge of the surface
    pub paddle_inset: f32,
    /// Distance covered by one move command
    pub paddle_step: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed of a serve
    pub serve_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            paddle_step: PADDLE_STEP,

            ball_radius: BALL_RADIUS,
            serve_speed: SERVE_SPEED,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "rod_bounce_settings";

    /// Copy with every value forced into a playable range for a surface
    /// `surface_width` wide
    ///
    /// Non-finite or non-positive values fall back to their defaults and the
    /// rods never get wider than the surface.
    pub fn sanitized(&self, surface_width: f32) -> Self {
        let defaults = Self::default();
        let positive = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };

        let mut paddle_width = positive(self.paddle_width, defaults.paddle_width);
        if surface_width.is_finite() && surface_width > 0.0 {
            paddle_width = paddle_width.min(surface_width);
        }

        Self {
            surface_width: positive(self.surface_width, defaults.surface_width),
            surface_height: positive(self.surface_height, defaults.surface_height),
            paddle_width,
            paddle_height: positive(self.paddle_height, defaults.paddle_height),
            paddle_inset: if self.paddle_inset.is_finite() && self.paddle_inset >= 0.0 {
                self.paddle_inset
            } else {
                defaults.paddle_inset
            },
            paddle_step: positive(self.paddle_step, defaults.paddle_step),
            ball_radius: positive(self.ball_radius, defaults.ball_radius),
            serve_speed: positive(self.serve_speed, defaults.serve_speed),
        }
    }

    /// Load settings from a key-value store, falling back to defaults
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from storage");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Settings storage unavailable: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings, repair out-of-range values and store the repaired copy
    ///
    /// Missing or unreadable settings are replaced by the defaults, which
    /// leaves an editable entry in storage.
    pub fn sync(store: &mut impl KeyValueStore) -> Self {
        let loaded = Self::load(&*store);
        let settings = loaded.sanitized(loaded.surface_width);
        settings.save(store);
        settings
    }

    /// Save settings to a key-value store
    pub fn save(&self, store: &mut impl KeyValueStore) {
        let result = serde_json::to_string(self)
            .map_err(StorageError::from)
            .and_then(|json| store.set_item(Self::STORAGE_KEY, &json));
        match result {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings: {}", e),
        }
    }
}
