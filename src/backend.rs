//! The slice of the WebGL2 API the chart needs.
//!
//! Rendering code is written against [`GlBackend`] instead of
//! `WebGl2RenderingContext` directly so the same pipeline runs in the browser
//! and against recording backends on the host. Every method maps one-to-one
//! onto a WebGL call and shares its bind-state semantics: binding a buffer or
//! a program stays in effect until something else is bound.

use crate::shader::ShaderStage;

/// Column-major 4x4 matrix as uploaded with `uniformMatrix4fv`.
pub type Mat4 = [f32; 16];

pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

pub trait GlBackend {
    type Shader;
    type Program;
    type Buffer;
    type UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;
    fn delete_shader(&self, shader: &Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn link_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn delete_program(&self, program: &Self::Program);

    /// Attribute index, or `-1` when the name is not an active attribute.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> i32;
    fn uniform_location(&self, program: &Self::Program, name: &str)
        -> Option<Self::UniformLocation>;

    fn create_buffer(&self) -> Option<Self::Buffer>;
    /// Binds `buffer` to the `ARRAY_BUFFER` target.
    fn bind_array_buffer(&self, buffer: Option<&Self::Buffer>);
    /// Uploads `data` to the bound `ARRAY_BUFFER` with `STATIC_DRAW` usage.
    fn array_buffer_data(&self, data: &[f32]);
    fn delete_buffer(&self, buffer: &Self::Buffer);

    /// `vertexAttribPointer` with `FLOAT` components read from `ARRAY_BUFFER`.
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn enable_vertex_attrib_array(&self, index: u32);

    fn use_program(&self, program: Option<&Self::Program>);
    fn uniform_matrix4fv(&self, location: Option<&Self::UniformLocation>, value: &Mat4);
    fn uniform4fv(&self, location: Option<&Self::UniformLocation>, value: &[f32; 4]);

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    /// Clears `COLOR_BUFFER_BIT`.
    fn clear_color_buffer(&self);
    /// `drawArrays(LINE_STRIP, first, count)`.
    fn draw_line_strip(&self, first: i32, count: i32);
}

/// Something a rendering context can be requested from, e.g. a canvas.
pub trait Surface {
    type Backend: GlBackend;

    /// Returns `None` when the platform cannot provide a context.
    fn acquire_context(&self) -> Option<Self::Backend>;
}
