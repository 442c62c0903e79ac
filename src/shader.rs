//! Line shader sources and program construction.

use std::fmt;

use crate::backend::GlBackend;
use crate::error::ShaderError;

/// Maps x from `[0, 1000]` and y from `[-1000, 1000]` onto clip space.
pub const VERTEX_SHADER: &str = r#"#version 300 es

in vec4 aVertexPosition;

uniform mat4 uModelViewMatrix;
uniform mat4 uProjectionMatrix;

void main() {
  vec4 aScaledVertexPosition = vec4((-1.0 + 2.0 * (aVertexPosition.x / 1000.0)), (-1.0 + 2.0 * ((aVertexPosition.y + 1000.0) / 2000.0)), 0, 1);
  gl_Position = uProjectionMatrix * uModelViewMatrix * aScaledVertexPosition;
}
"#;

pub const UNIFORM_COLOR_FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;

uniform vec4 uVertexColor;

out vec4 fragColor;

void main() {
  fragColor = uVertexColor;
}
"#;

pub const WHITE_FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;

out vec4 fragColor;

void main() {
  fragColor = vec4(1.0, 1.0, 1.0, 1.0);
}
"#;

pub const VERTEX_POSITION: &str = "aVertexPosition";
pub const PROJECTION_MATRIX: &str = "uProjectionMatrix";
pub const MODEL_VIEW_MATRIX: &str = "uModelViewMatrix";
pub const VERTEX_COLOR: &str = "uVertexColor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// A linked program and the locations the line renderer feeds.
pub struct ShaderProgram<B: GlBackend> {
    pub(crate) program: B::Program,
    pub(crate) vertex_position: Option<u32>,
    pub(crate) projection_matrix: Option<B::UniformLocation>,
    pub(crate) model_view_matrix: Option<B::UniformLocation>,
    pub(crate) vertex_color: Option<B::UniformLocation>,
}

impl<B: GlBackend> ShaderProgram<B> {
    /// Compiles both stages, links them and resolves locations by name.
    ///
    /// `uVertexColor` is only looked up when `with_color` is set. Missing
    /// locations are logged and tolerated, compile and link failures are not.
    pub fn build(
        gl: &B,
        vertex_source: &str,
        fragment_source: &str,
        with_color: bool,
    ) -> Result<ShaderProgram<B>, ShaderError> {
        let vertex = load_shader(gl, ShaderStage::Vertex, vertex_source)?;
        let fragment = match load_shader(gl, ShaderStage::Fragment, fragment_source) {
            Ok(shader) => shader,
            Err(err) => {
                gl.delete_shader(&vertex);
                return Err(err);
            }
        };

        let linked = link(gl, &vertex, &fragment);
        // The program holds on to attached shaders, our handles are no longer needed.
        gl.delete_shader(&vertex);
        gl.delete_shader(&fragment);
        let program = linked?;

        let vertex_position = match gl.attrib_location(&program, VERTEX_POSITION) {
            index if index >= 0 => Some(index as u32),
            _ => {
                log::warn!("attribute {VERTEX_POSITION} not found in line program");
                None
            }
        };
        let projection_matrix = uniform(gl, &program, PROJECTION_MATRIX);
        let model_view_matrix = uniform(gl, &program, MODEL_VIEW_MATRIX);
        let vertex_color = if with_color {
            uniform(gl, &program, VERTEX_COLOR)
        } else {
            None
        };

        log::debug!("line program linked");
        Ok(ShaderProgram {
            program,
            vertex_position,
            projection_matrix,
            model_view_matrix,
            vertex_color,
        })
    }

    pub fn program(&self) -> &B::Program {
        &self.program
    }

    pub fn has_color_uniform(&self) -> bool {
        self.vertex_color.is_some()
    }

    /// Releases the GPU program. The value must not be used afterwards.
    pub(crate) fn release(&self, gl: &B) {
        gl.delete_program(&self.program);
    }
}

fn load_shader<B: GlBackend>(
    gl: &B,
    stage: ShaderStage,
    source: &str,
) -> Result<B::Shader, ShaderError> {
    let shader = gl.create_shader(stage).ok_or_else(|| ShaderError::Compile {
        stage,
        log: "unable to create shader object".to_string(),
    })?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if !gl.compile_status(&shader) {
        let log = gl.shader_info_log(&shader).unwrap_or_default();
        log::error!("an error occurred compiling the {stage} shader: {log}");
        gl.delete_shader(&shader);
        return Err(ShaderError::Compile { stage, log });
    }
    Ok(shader)
}

fn link<B: GlBackend>(
    gl: &B,
    vertex: &B::Shader,
    fragment: &B::Shader,
) -> Result<B::Program, ShaderError> {
    let program = gl.create_program().ok_or(ShaderError::ProgramUnavailable)?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if !gl.link_status(&program) {
        let log = gl.program_info_log(&program).unwrap_or_default();
        log::error!("unable to initialize the shader program: {log}");
        gl.delete_program(&program);
        return Err(ShaderError::Link { log });
    }
    Ok(program)
}

fn uniform<B: GlBackend>(gl: &B, program: &B::Program, name: &str) -> Option<B::UniformLocation> {
    let location = gl.uniform_location(program, name);
    if location.is_none() {
        log::warn!("uniform {name} not found in line program");
    }
    location
}
