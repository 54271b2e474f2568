//! Scene configuration and quality presets
//!
//! Every numeric tunable of the simulation lives here. A config is
//! validated once at scene construction; a malformed value is a
//! programming error, not a runtime condition.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Number of drifting shapes for this preset
    pub fn shape_count(&self) -> usize {
        match self {
            QualityPreset::Low => 40,
            QualityPreset::Medium => NUM_SHAPES,
            QualityPreset::High => 140,
        }
    }

    /// Hard cap on live trail particles
    pub fn particle_cap(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => PARTICLE_CAP,
            QualityPreset::High => 800,
        }
    }

    /// Whether shapes get a glow halo
    pub fn glow_enabled(&self) -> bool {
        !matches!(self, QualityPreset::Low)
    }

    /// Whether connection lines are drawn between near shapes
    pub fn connections_enabled(&self) -> bool {
        !matches!(self, QualityPreset::Low)
    }
}

/// All simulation tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub quality: QualityPreset,

    // === Population ===
    /// Shape count (0 = take from quality preset)
    pub shape_count: usize,

    // === Pointer interaction ===
    /// Pointer influence radius at startup; resize rescales it
    pub pointer_radius: f32,
    /// Peak pointer repulsion (linear falloff to zero at the radius)
    pub pointer_force: f32,
    /// Short-range pure repulsion radius (anti-collapse near pointer)
    pub close_repel_radius: f32,
    pub close_repel_force: f32,

    // === Peer interaction ===
    pub peer_radius: f32,
    pub peer_force: f32,
    pub peer_buffer: f32,

    // === Global motion ===
    pub center_pull: f32,
    pub force_clamp: f32,
    pub max_speed: f32,
    /// Velocity damping per tick, in (0, 1]
    pub friction: f32,
    pub spin_boost: f32,
    pub hue_boost: f32,

    // === Trail particles ===
    /// Particle cap (0 = take from quality preset)
    pub particle_cap: usize,
    pub emit_rate: f32,
    pub particle_life: i32,
    pub particle_life_jitter: i32,
    pub particle_friction: f32,

    // === Click effects ===
    pub explosion_radius: f32,
    pub explosion_force: f32,
    pub shockwave_fade_step: f32,
    pub shockwave_expansion_decay: f32,
    pub shockwave_stroke_decay: f32,

    // === Connections ===
    pub connect_dist: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            shape_count: 0,
            pointer_radius: POINTER_RADIUS,
            pointer_force: POINTER_FORCE,
            close_repel_radius: CLOSE_REPEL_RADIUS,
            close_repel_force: CLOSE_REPEL_FORCE,
            peer_radius: PEER_RADIUS,
            peer_force: PEER_FORCE,
            peer_buffer: PEER_BUFFER,
            center_pull: CENTER_PULL,
            force_clamp: FORCE_CLAMP,
            max_speed: MAX_SPEED,
            friction: FRICTION,
            spin_boost: SPIN_BOOST,
            hue_boost: HUE_BOOST,
            particle_cap: 0,
            emit_rate: EMIT_RATE,
            particle_life: PARTICLE_LIFE,
            particle_life_jitter: PARTICLE_LIFE_JITTER,
            particle_friction: PARTICLE_FRICTION,
            explosion_radius: EXPLOSION_RADIUS,
            explosion_force: EXPLOSION_FORCE,
            shockwave_fade_step: SHOCKWAVE_FADE_STEP,
            shockwave_expansion_decay: SHOCKWAVE_EXPANSION_DECAY,
            shockwave_stroke_decay: SHOCKWAVE_STROKE_DECAY,
            connect_dist: CONNECT_DIST,
        }
    }
}

impl SceneConfig {
    /// Create a config from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective shape count (explicit value or preset default)
    pub fn effective_shape_count(&self) -> usize {
        if self.shape_count > 0 {
            self.shape_count
        } else {
            self.quality.shape_count()
        }
    }

    /// Effective particle cap (explicit value or preset default)
    pub fn effective_particle_cap(&self) -> usize {
        if self.particle_cap > 0 {
            self.particle_cap
        } else {
            self.quality.particle_cap()
        }
    }

    /// Precondition checks. Panics on a malformed config; construction
    /// with bad tunables is a programming error, not something the scene
    /// recovers from at runtime.
    pub fn validate(&self) {
        assert!(
            self.effective_shape_count() > 0,
            "shape count must be positive"
        );
        assert!(
            self.pointer_radius > 0.0 && self.pointer_radius.is_finite(),
            "pointer_radius must be positive and finite"
        );
        assert!(
            self.close_repel_radius > 0.0,
            "close_repel_radius must be positive"
        );
        assert!(self.peer_radius > 0.0, "peer_radius must be positive");
        assert!(self.peer_buffer >= 0.0, "peer_buffer must be non-negative");
        assert!(
            self.max_speed > 0.0 && self.max_speed.is_finite(),
            "max_speed must be positive and finite"
        );
        assert!(
            self.friction > 0.0 && self.friction <= 1.0,
            "friction must be in (0, 1]"
        );
        assert!(self.force_clamp > 0.0, "force_clamp must be positive");
        assert!(
            (0.0..=1.0).contains(&self.emit_rate),
            "emit_rate must be in [0, 1]"
        );
        assert!(self.particle_life > 0, "particle_life must be positive");
        assert!(
            self.particle_life_jitter >= 0 && self.particle_life_jitter < self.particle_life,
            "particle_life_jitter must be in [0, particle_life)"
        );
        assert!(
            self.particle_friction > 0.0 && self.particle_friction <= 1.0,
            "particle_friction must be in (0, 1]"
        );
        assert!(
            self.explosion_radius > 0.0,
            "explosion_radius must be positive"
        );
        assert!(
            self.shockwave_fade_step > 0.0,
            "shockwave_fade_step must be positive"
        );
        assert!(
            self.shockwave_expansion_decay > 0.0 && self.shockwave_expansion_decay < 1.0,
            "shockwave_expansion_decay must be in (0, 1)"
        );
        assert!(
            self.shockwave_stroke_decay > 0.0 && self.shockwave_stroke_decay < 1.0,
            "shockwave_stroke_decay must be in (0, 1)"
        );
        assert!(self.connect_dist >= 0.0, "connect_dist must be non-negative");
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "driftfield_config";

    /// Load a config override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(config) = serde_json::from_str(&json) {
                    log::info!("Loaded config from LocalStorage");
                    return config;
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save the config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        SceneConfig::default().validate();
    }

    #[test]
    fn test_preset_overrides() {
        let cfg = SceneConfig::from_preset(QualityPreset::Low);
        assert_eq!(cfg.effective_shape_count(), 40);
        assert!(!cfg.quality.glow_enabled());

        let mut cfg = SceneConfig::default();
        cfg.shape_count = 12;
        cfg.particle_cap = 64;
        assert_eq!(cfg.effective_shape_count(), 12);
        assert_eq!(cfg.effective_particle_cap(), 64);
    }

    #[test]
    #[should_panic(expected = "pointer_radius")]
    fn test_negative_radius_rejected() {
        let mut cfg = SceneConfig::default();
        cfg.pointer_radius = -1.0;
        cfg.validate();
    }

    #[test]
    #[should_panic(expected = "friction")]
    fn test_friction_above_one_rejected() {
        let mut cfg = SceneConfig::default();
        cfg.friction = 1.5;
        cfg.validate();
    }

    #[test]
    fn test_round_trip_json() {
        let cfg = SceneConfig::from_preset(QualityPreset::High);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.quality, QualityPreset::High);
        assert_eq!(back.effective_shape_count(), cfg.effective_shape_count());
    }
}
