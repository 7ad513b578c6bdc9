//! Settings read from the environment.

use prattle_diagnostic::emitter::ColorMode;
use prattle_eval::DEFAULT_MAX_DEPTH;
use tracing::warn;

const MAX_DEPTH_VAR: &str = "PRATTLE_MAX_DEPTH";
const COLOR_VAR: &str = "PRATTLE_COLOR";

/// CLI configuration.
///
/// | Variable | Values | Default |
/// |---|---|---|
/// | `PRATTLE_MAX_DEPTH` | positive integer | 10000 |
/// | `PRATTLE_COLOR` | `auto`, `always`, `never` | `auto` |
///
/// Invalid values are logged and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub max_depth: usize,
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: DEFAULT_MAX_DEPTH,
            color: ColorMode::Auto,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(raw) = lookup(MAX_DEPTH_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => config.max_depth = depth,
                _ => warn!(variable = MAX_DEPTH_VAR, value = %raw, "ignoring invalid depth"),
            }
        }

        if let Some(raw) = lookup(COLOR_VAR) {
            match ColorMode::parse(raw.trim()) {
                Some(mode) => config.color = mode,
                None => warn!(variable = COLOR_VAR, value = %raw, "ignoring invalid color mode"),
            }
        }

        config
    }
}
