//! Draws a single line with the line program.

use crate::backend::{GlBackend, Mat4, IDENTITY};
use crate::buffer::upload;
use crate::line::Line;
use crate::shader::ShaderProgram;

/// Components per vertex: tightly packed `(x, y)` pairs.
const COMPONENTS: i32 = 2;

/// Projection and model-view matrices applied to every line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transforms {
    pub projection: Mat4,
    pub model_view: Mat4,
}

impl Default for Transforms {
    fn default() -> Self {
        Transforms {
            projection: IDENTITY,
            model_view: IDENTITY,
        }
    }
}

/// Uploads `line`'s points into a fresh buffer and draws it.
///
/// Returns the buffer so the caller can release it. Nothing is drawn when the
/// line is empty or no buffer could be allocated.
pub fn render_line<B: GlBackend>(
    gl: &B,
    program: &ShaderProgram<B>,
    transforms: &Transforms,
    line: &Line,
) -> Option<B::Buffer> {
    if line.vertex_count() == 0 {
        log::warn!("skipping line without points");
        return None;
    }
    let buffer = upload(gl, line.points())?;
    draw_line(gl, program, transforms, line, &buffer);
    Some(buffer)
}

/// Binds `buffer` as the vertex source and issues a line-strip draw for `line`.
///
/// `buffer` must already hold `line`'s points. On return the buffer and the
/// program are left bound.
pub fn draw_line<B: GlBackend>(
    gl: &B,
    program: &ShaderProgram<B>,
    transforms: &Transforms,
    line: &Line,
    buffer: &B::Buffer,
) {
    gl.bind_array_buffer(Some(buffer));
    if let Some(index) = program.vertex_position {
        gl.vertex_attrib_pointer_f32(index, COMPONENTS, false, 0, 0);
        gl.enable_vertex_attrib_array(index);
    }

    gl.use_program(Some(&program.program));

    gl.uniform_matrix4fv(program.projection_matrix.as_ref(), &transforms.projection);
    gl.uniform_matrix4fv(program.model_view_matrix.as_ref(), &transforms.model_view);
    if let Some(color) = program.vertex_color.as_ref() {
        gl.uniform4fv(Some(color), &line.color());
    }

    gl.draw_line_strip(0, line.vertex_count() as i32);
}
