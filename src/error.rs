use thiserror::Error;

use crate::shader::ShaderStage;

/// Failures while building a [`Line`](crate::line::Line).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    #[error("point data must hold (x, y) pairs, got {0} values")]
    OddCoordinateCount(usize),
    #[error("color channel {channel} is {value}, expected a value in [0, 1]")]
    ColorOutOfRange { channel: usize, value: f32 },
}

/// Failures while compiling or linking the line shader program.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShaderError {
    #[error("an error occurred compiling the {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("unable to initialize the shader program: {log}")]
    Link { log: String },
    #[error("the backend could not allocate a program object")]
    ProgramUnavailable,
}

/// Invalid values in a [`SurfaceConfig`](crate::config::SurfaceConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("initial line count must be 0, 1 or 2, got {0}")]
    InitialLineCount(u8),
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Failures that prevent a surface controller from reaching the ready state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    #[error("unable to initialize WebGL, your browser or machine may not support it")]
    ContextUnavailable,
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
