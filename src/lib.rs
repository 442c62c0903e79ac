//! WebGL2 time-series line chart.
//!
//! The rendering pipeline ([`shader`], [`buffer`], [`renderer`], [`surface`])
//! is generic over [`backend::GlBackend`] and builds on any target. The
//! WebGL2 backend and the DOM shell only exist when targeting wasm32.

pub mod backend;
pub mod buffer;
pub mod config;
pub mod error;
pub mod line;
pub mod renderer;
pub mod shader;
pub mod surface;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{BufferStrategy, ColorMode, SurfaceConfig};
pub use error::{ConfigError, LineError, ShaderError, SurfaceError};
pub use line::{random_line, Line, Rgba};
pub use surface::SurfaceController;
