//! Surface configuration and its `data-*` attribute form.

use std::str::FromStr;

use log::LevelFilter;

use crate::error::ConfigError;

/// Which fragment shader the surface links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Each line is drawn in its own color via `uVertexColor`.
    #[default]
    Uniform,
    /// Every line is drawn opaque white.
    White,
}

/// How vertex buffers are managed across draw passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferStrategy {
    /// Upload every line into a new buffer on each pass, releasing the
    /// previous pass's buffers first.
    #[default]
    PerDraw,
    /// Upload each line once and reuse its buffer until the lines are cleared.
    Cached,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceConfig {
    /// Draw right after construction.
    pub auto_draw: bool,
    /// Lines generated at construction, at most 2.
    pub initial_line_count: u8,
    pub color_mode: ColorMode,
    pub buffer_strategy: BufferStrategy,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            auto_draw: true,
            initial_line_count: 2,
            color_mode: ColorMode::Uniform,
            buffer_strategy: BufferStrategy::PerDraw,
        }
    }
}

impl SurfaceConfig {
    pub const MAX_INITIAL_LINES: u8 = 2;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_line_count > Self::MAX_INITIAL_LINES {
            return Err(ConfigError::InitialLineCount(self.initial_line_count));
        }
        Ok(())
    }

    /// Applies overrides read through `attr`, typically an element's
    /// `data-*` attributes. Absent attributes keep their defaults.
    pub fn from_attributes(
        attr: impl Fn(&str) -> Option<String>,
    ) -> Result<SurfaceConfig, ConfigError> {
        let mut config = SurfaceConfig::default();
        if let Some(value) = attr("data-auto-draw") {
            config.auto_draw = parse("data-auto-draw", &value)?;
        }
        if let Some(value) = attr("data-initial-lines") {
            config.initial_line_count = parse("data-initial-lines", &value)?;
        }
        if let Some(value) = attr("data-color") {
            config.color_mode = parse("data-color", &value)?;
        }
        if let Some(value) = attr("data-buffers") {
            config.buffer_strategy = parse("data-buffers", &value)?;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Options of the page shell that mounts a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountConfig {
    pub surface: SurfaceConfig,
    /// Append one random line right after mounting, without drawing it.
    pub add_line_on_mount: bool,
}

impl Default for MountConfig {
    fn default() -> Self {
        MountConfig {
            surface: SurfaceConfig::default(),
            add_line_on_mount: true,
        }
    }
}

impl MountConfig {
    pub fn from_attributes(
        attr: impl Fn(&str) -> Option<String>,
    ) -> Result<MountConfig, ConfigError> {
        let add_line_on_mount = match attr("data-add-on-mount") {
            Some(value) => parse("data-add-on-mount", &value)?,
            None => true,
        };
        Ok(MountConfig {
            surface: SurfaceConfig::from_attributes(attr)?,
            add_line_on_mount,
        })
    }
}

/// Reads `data-log-level`, defaulting to `info` when it is absent.
pub fn log_level(attr: impl Fn(&str) -> Option<String>) -> Result<LevelFilter, ConfigError> {
    match attr("data-log-level") {
        Some(value) => parse("data-log-level", &value),
        None => Ok(LevelFilter::Info),
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

impl FromStr for ColorMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(ColorMode::Uniform),
            "white" => Ok(ColorMode::White),
            _ => Err(()),
        }
    }
}

impl FromStr for BufferStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-draw" => Ok(BufferStrategy::PerDraw),
            "cached" => Ok(BufferStrategy::Cached),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn no_attributes_gives_defaults() {
        let config = SurfaceConfig::from_attributes(attrs(&[])).unwrap();
        assert_eq!(config, SurfaceConfig::default());
    }

    #[test]
    fn overrides_every_field() {
        let config = SurfaceConfig::from_attributes(attrs(&[
            ("data-auto-draw", "false"),
            ("data-initial-lines", " 1 "),
            ("data-color", "white"),
            ("data-buffers", "cached"),
        ]))
        .unwrap();
        assert_eq!(
            config,
            SurfaceConfig {
                auto_draw: false,
                initial_line_count: 1,
                color_mode: ColorMode::White,
                buffer_strategy: BufferStrategy::Cached,
            }
        );
    }

    #[test]
    fn rejects_too_many_initial_lines() {
        let err =
            SurfaceConfig::from_attributes(attrs(&[("data-initial-lines", "3")])).unwrap_err();
        assert_eq!(err, ConfigError::InitialLineCount(3));
    }

    #[test]
    fn rejects_unknown_values() {
        let err = SurfaceConfig::from_attributes(attrs(&[("data-color", "red")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "data-color",
                value: "red".into()
            }
        );
    }

    #[test]
    fn mount_adds_a_line_unless_disabled() {
        assert!(MountConfig::from_attributes(attrs(&[])).unwrap().add_line_on_mount);
        let config = MountConfig::from_attributes(attrs(&[
            ("data-add-on-mount", "false"),
            ("data-initial-lines", "0"),
        ]))
        .unwrap();
        assert!(!config.add_line_on_mount);
        assert_eq!(config.surface.initial_line_count, 0);
    }

    #[test]
    fn mount_rejects_bad_surface_values() {
        let err = MountConfig::from_attributes(attrs(&[("data-buffers", "pooled")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "data-buffers", .. }));
    }

    #[test]
    fn log_level_defaults_and_parses() {
        assert_eq!(log_level(attrs(&[])), Ok(LevelFilter::Info));
        assert_eq!(log_level(attrs(&[("data-log-level", "debug")])), Ok(LevelFilter::Debug));
        assert_eq!(log_level(attrs(&[("data-log-level", "off")])), Ok(LevelFilter::Off));
    }

    #[test]
    fn log_level_rejects_unknown_names() {
        assert_eq!(
            log_level(attrs(&[("data-log-level", "verbose")])),
            Err(ConfigError::InvalidValue {
                key: "data-log-level",
                value: "verbose".into()
            })
        );
    }
}
