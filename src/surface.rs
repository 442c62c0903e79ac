//! The controller that owns a rendering context and the lines drawn into it.

use crate::backend::{GlBackend, Surface};
use crate::config::{BufferStrategy, ColorMode, SurfaceConfig};
use crate::error::SurfaceError;
use crate::line::{seed_line, Line};
use crate::renderer::{draw_line, render_line, Transforms};
use crate::shader::{
    ShaderProgram, UNIFORM_COLOR_FRAGMENT_SHADER, VERTEX_SHADER, WHITE_FRAGMENT_SHADER,
};

/// Opaque black.
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Owns a context, the line program and an ordered set of lines.
///
/// A value of this type is always ready to draw. Construction either yields a
/// ready controller or fails without one. Dropping it (or calling
/// [`dispose`](Self::dispose)) releases the program and every buffer it still
/// holds.
pub struct SurfaceController<B: GlBackend> {
    gl: B,
    program: ShaderProgram<B>,
    config: SurfaceConfig,
    transforms: Transforms,
    lines: Vec<Line>,
    // Buffers uploaded by the last pass, released when the next one starts.
    frame_buffers: Vec<B::Buffer>,
    // One slot per line when buffers are cached.
    cached_buffers: Vec<Option<B::Buffer>>,
}

impl<B: GlBackend> SurfaceController<B> {
    /// Acquires a context from `surface`, clears it and links the line program.
    ///
    /// Then seeds `config.initial_line_count` lines with `rng` and draws them
    /// when `config.auto_draw` is set. No further work is attempted once
    /// acquiring the context fails.
    pub fn new<S>(
        surface: &S,
        config: SurfaceConfig,
        rng: &mut impl FnMut() -> f64,
    ) -> Result<SurfaceController<B>, SurfaceError>
    where
        S: Surface<Backend = B>,
    {
        config.validate()?;
        let gl = surface
            .acquire_context()
            .ok_or(SurfaceError::ContextUnavailable)?;

        let [r, g, b, a] = CLEAR_COLOR;
        gl.clear_color(r, g, b, a);
        gl.clear_color_buffer();

        let program = match config.color_mode {
            ColorMode::Uniform => {
                ShaderProgram::build(&gl, VERTEX_SHADER, UNIFORM_COLOR_FRAGMENT_SHADER, true)?
            }
            ColorMode::White => {
                ShaderProgram::build(&gl, VERTEX_SHADER, WHITE_FRAGMENT_SHADER, false)?
            }
        };

        let lines = (0..config.initial_line_count as usize)
            .map(|i| seed_line(i, rng))
            .collect::<Vec<_>>();
        let cached_buffers = lines.iter().map(|_| None).collect();

        let mut controller = SurfaceController {
            gl,
            program,
            config,
            transforms: Transforms::default(),
            lines,
            frame_buffers: Vec::new(),
            cached_buffers,
        };
        log::debug!(
            "surface ready with {} initial line(s), {:?}",
            controller.lines.len(),
            controller.config
        );

        if controller.config.auto_draw {
            controller.draw();
        }
        Ok(controller)
    }

    /// Appends `line`; it shows up on the next [`draw`](Self::draw).
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
        self.cached_buffers.push(None);
    }

    /// Removes every line. The surface keeps its content until the next draw.
    pub fn clear(&mut self) {
        self.lines.clear();
        for buffer in self.cached_buffers.drain(..).flatten() {
            self.gl.delete_buffer(&buffer);
        }
    }

    /// Clears the surface and draws every line in insertion order.
    ///
    /// Leaves the last line's buffer and the line program bound.
    pub fn draw(&mut self) {
        for buffer in self.frame_buffers.drain(..) {
            self.gl.delete_buffer(&buffer);
        }

        let [r, g, b, a] = CLEAR_COLOR;
        self.gl.clear_color(r, g, b, a);
        self.gl.clear_color_buffer();

        match self.config.buffer_strategy {
            BufferStrategy::PerDraw => {
                for line in &self.lines {
                    if let Some(buffer) =
                        render_line(&self.gl, &self.program, &self.transforms, line)
                    {
                        self.frame_buffers.push(buffer);
                    }
                }
            }
            BufferStrategy::Cached => {
                for (line, slot) in self.lines.iter().zip(self.cached_buffers.iter_mut()) {
                    match slot {
                        Some(buffer) => {
                            draw_line(&self.gl, &self.program, &self.transforms, line, buffer)
                        }
                        None => {
                            *slot = render_line(&self.gl, &self.program, &self.transforms, line)
                        }
                    }
                }
            }
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn program(&self) -> &ShaderProgram<B> {
        &self.program
    }

    pub fn backend(&self) -> &B {
        &self.gl
    }

    /// Releases all GPU resources held by the controller.
    pub fn dispose(self) {}

    fn release(&mut self) {
        let buffers = self
            .frame_buffers
            .drain(..)
            .chain(self.cached_buffers.drain(..).flatten())
            .collect::<Vec<_>>();
        for buffer in &buffers {
            self.gl.delete_buffer(buffer);
        }
        self.program.release(&self.gl);
        log::debug!("surface disposed, released {} buffer(s)", buffers.len());
    }
}

impl<B: GlBackend> Drop for SurfaceController<B> {
    fn drop(&mut self) {
        self.release();
    }
}
