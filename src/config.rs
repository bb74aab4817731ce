//! Runtime configuration
//!
//! Optional RON file next to the executable's working directory. Every field
//! has a default, so a partial file only overrides what it names.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use crate::player::PlayerController;
use crate::raycaster::{Color, RayMarch, RenderSettings};

/// Default config file name
pub const CONFIG_FILE: &str = "tilecaster.ron";

/// Error type for config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Text-generation service settings for the F2 message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// `host:port` of the Ollama server
    pub host: String,
    pub model: String,
    pub prompt: String,
    /// How long a fetched message stays on screen
    pub duration_ms: u64,
    /// Socket timeout; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1:11434".to_string(),
            model: "llama3.1".to_string(),
            prompt: "in a few words imply that there is a secret in this stage. \
                     its like a type of maze game. dont print anything else"
                .to_string(),
            duration_ms: 3000,
            timeout_secs: None,
        }
    }
}

impl MessageConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaycasterConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub fullscreen: bool,
    pub fps: u32,
    /// Field of view in radians
    pub fov: f32,
    pub num_rays: usize,
    pub max_depth: u32,
    /// World units per map cell (x, y)
    pub cell_size: (f32, f32),
    pub wall_height: f32,
    pub ray_march: RayMarch,
    pub sky: Color,
    pub ground: Color,
    pub player_speed: f32,
    pub mouse_sensitivity: f32,
    pub map_path: PathBuf,
    /// Used when the map has no start marker
    pub default_start: (f32, f32),
    pub message: MessageConfig,
}

impl Default for RaycasterConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            fullscreen: true,
            fps: 60,
            fov: std::f32::consts::FRAC_PI_3,
            num_rays: 300,
            max_depth: 1200,
            cell_size: (60.0, 60.0),
            wall_height: 60.0,
            ray_march: RayMarch::Fixed,
            sky: Color::SKY,
            ground: Color::GROUND,
            player_speed: 5.0,
            mouse_sensitivity: 0.005,
            map_path: PathBuf::from("map.txt"),
            default_start: (150.0, 150.0),
            message: MessageConfig::default(),
        }
    }
}

impl RaycasterConfig {
    /// Load from a RON file. A missing file yields `Ok(None)`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ConfigError::Io { path: path.to_path_buf(), source }),
        };
        Ok(Some(Self::from_ron(&contents)?))
    }

    /// Load from a RON file, falling back to defaults (logged) on any problem
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(Some(config)) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Ok(None) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config ignored, using defaults");
                Self::default()
            }
        }
    }

    /// Parse config from a RON string. Out-of-range geometry is replaced
    /// by defaults (see `sanitized`).
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(s)?;
        Ok(config.sanitized())
    }

    /// Replace geometry values the renderer cannot use with their defaults.
    ///
    /// Cell sizes and wall height must be finite and positive, the field of
    /// view must lie in `(0, PI)`, and `max_depth` must be at least 1.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let usable = |v: f32| v.is_finite() && v > 0.0;

        if !(usable(self.cell_size.0) && usable(self.cell_size.1)) {
            warn!(cell_size = ?self.cell_size, "cell_size must be positive, using default");
            self.cell_size = defaults.cell_size;
        }
        if !(usable(self.fov) && self.fov < std::f32::consts::PI) {
            warn!(fov = self.fov, "fov must be in (0, pi), using default");
            self.fov = defaults.fov;
        }
        if !usable(self.wall_height) {
            warn!(wall_height = self.wall_height, "wall_height must be positive, using default");
            self.wall_height = defaults.wall_height;
        }
        if self.max_depth == 0 {
            warn!("max_depth must be at least 1, using default");
            self.max_depth = defaults.max_depth;
        }
        self
    }

    /// Projection settings for the renderer
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            fov: self.fov,
            num_rays: self.num_rays.max(1),
            max_depth: self.max_depth,
            wall_height: self.wall_height,
            march: self.ray_march,
            sky: self.sky,
            ground: self.ground,
        }
    }

    pub fn player_controller(&self) -> PlayerController {
        PlayerController::new(self.player_speed, self.mouse_sensitivity)
    }

    /// Target time per frame
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_settings() {
        let cfg = RaycasterConfig::default();
        assert_eq!((cfg.window_width, cfg.window_height), (800, 600));
        assert_eq!(cfg.num_rays, 300);
        assert_eq!(cfg.max_depth, 1200);
        assert_eq!(cfg.map_path, PathBuf::from("map.txt"));
        assert_eq!(cfg.message.duration(), Duration::from_millis(3000));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg = RaycasterConfig::from_ron("(num_rays: 120, ray_march: Dda, message: (model: \"mistral\"))").unwrap();
        assert_eq!(cfg.num_rays, 120);
        assert_eq!(cfg.ray_march, RayMarch::Dda);
        assert_eq!(cfg.message.model, "mistral");
        assert_eq!(cfg.message.host, "127.0.0.1:11434");
        assert_eq!(cfg.fps, 60);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        assert!(matches!(RaycasterConfig::from_ron("(num_rays: \"many\")"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unusable_geometry_falls_back() {
        let cfg = RaycasterConfig::from_ron("(cell_size: (0.0, -5.0), fov: 3.5, max_depth: 0, wall_height: 0.0, ray_march: Dda)").unwrap();
        let defaults = RaycasterConfig::default();
        assert_eq!(cfg.cell_size, defaults.cell_size);
        assert_eq!(cfg.fov, defaults.fov);
        assert_eq!(cfg.max_depth, defaults.max_depth);
        assert_eq!(cfg.wall_height, defaults.wall_height);
        assert_eq!(cfg.ray_march, RayMarch::Dda);
    }

    #[test]
    fn test_valid_geometry_is_kept() {
        let cfg = RaycasterConfig::from_ron("(cell_size: (32.0, 48.0), fov: 1.2, max_depth: 500)").unwrap();
        assert_eq!(cfg.cell_size, (32.0, 48.0));
        assert_eq!(cfg.fov, 1.2);
        assert_eq!(cfg.max_depth, 500);
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = std::env::temp_dir().join("tilecaster-no-such-config.ron");
        assert!(RaycasterConfig::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_bad_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!("tilecaster-bad-config-{}.ron", std::process::id()));
        fs::write(&path, "(fps: [1, 2])").unwrap();
        assert_eq!(RaycasterConfig::load_or_default(&path), RaycasterConfig::default());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_round_trip_through_ron() {
        let cfg = RaycasterConfig { fps: 30, ..Default::default() };
        let text = ron::ser::to_string_pretty(&cfg, ron::ser::PrettyConfig::default()).unwrap();
        assert_eq!(RaycasterConfig::from_ron(&text).unwrap(), cfg);
    }

    #[test]
    fn test_frame_time() {
        let cfg = RaycasterConfig { fps: 50, ..Default::default() };
        assert_eq!(cfg.frame_time(), Duration::from_millis(20));
        let cfg = RaycasterConfig { fps: 0, ..Default::default() };
        assert_eq!(cfg.frame_time(), Duration::from_secs(1));
    }
}
