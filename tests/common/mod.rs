#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use timeseries_wasm::backend::{GlBackend, Mat4, Surface};
use timeseries_wasm::shader::ShaderStage;

/// Every backend call the pipeline made, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage, u32),
    ShaderSource(u32, String),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    DeleteProgram(u32),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    BufferData(Vec<f32>),
    DeleteBuffer(u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    UseProgram(Option<u32>),
    UniformMatrix4(Option<String>, Mat4),
    Uniform4(Option<String>, [f32; 4]),
    ClearColor([f32; 4]),
    Clear,
    DrawLineStrip { first: i32, count: i32 },
}

/// Knobs for making the recording backend misbehave.
#[derive(Debug, Clone, Default)]
pub struct Faults {
    pub compile: Option<ShaderStage>,
    pub link: bool,
    pub program: bool,
    pub buffers: bool,
    pub missing: Vec<&'static str>,
}

#[derive(Clone)]
pub struct RecordingGl {
    calls: Rc<RefCell<Vec<Call>>>,
    next_id: Rc<Cell<u32>>,
    stages: Rc<RefCell<Vec<(u32, ShaderStage)>>>,
    faults: Faults,
}

impl RecordingGl {
    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn stage_of(&self, shader: u32) -> Option<ShaderStage> {
        self.stages
            .borrow()
            .iter()
            .find(|(id, _)| *id == shader)
            .map(|(_, stage)| *stage)
    }
}

impl GlBackend for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = String;

    fn create_shader(&self, stage: ShaderStage) -> Option<u32> {
        let id = self.id();
        self.stages.borrow_mut().push((id, stage));
        self.push(Call::CreateShader(stage, id));
        Some(id)
    }

    fn shader_source(&self, shader: &u32, source: &str) {
        self.push(Call::ShaderSource(*shader, source.to_string()));
    }

    fn compile_shader(&self, shader: &u32) {
        self.push(Call::CompileShader(*shader));
    }

    fn compile_status(&self, shader: &u32) -> bool {
        self.faults.compile.is_none() || self.faults.compile != self.stage_of(*shader)
    }

    fn shader_info_log(&self, shader: &u32) -> Option<String> {
        Some(format!("ERROR: 0:1: shader {shader} is broken"))
    }

    fn delete_shader(&self, shader: &u32) {
        self.push(Call::DeleteShader(*shader));
    }

    fn create_program(&self) -> Option<u32> {
        if self.faults.program {
            return None;
        }
        let id = self.id();
        self.push(Call::CreateProgram(id));
        Some(id)
    }

    fn attach_shader(&self, program: &u32, shader: &u32) {
        self.push(Call::AttachShader(*program, *shader));
    }

    fn link_program(&self, program: &u32) {
        self.push(Call::LinkProgram(*program));
    }

    fn link_status(&self, _program: &u32) -> bool {
        !self.faults.link
    }

    fn program_info_log(&self, _program: &u32) -> Option<String> {
        Some("varying mismatch".to_string())
    }

    fn delete_program(&self, program: &u32) {
        self.push(Call::DeleteProgram(*program));
    }

    fn attrib_location(&self, _program: &u32, name: &str) -> i32 {
        if self.faults.missing.contains(&name) {
            -1
        } else {
            0
        }
    }

    fn uniform_location(&self, _program: &u32, name: &str) -> Option<String> {
        if self.faults.missing.contains(&name) {
            None
        } else {
            Some(name.to_string())
        }
    }

    fn create_buffer(&self) -> Option<u32> {
        if self.faults.buffers {
            return None;
        }
        let id = self.id();
        self.push(Call::CreateBuffer(id));
        Some(id)
    }

    fn bind_array_buffer(&self, buffer: Option<&u32>) {
        self.push(Call::BindArrayBuffer(buffer.copied()));
    }

    fn array_buffer_data(&self, data: &[f32]) {
        self.push(Call::BufferData(data.to_vec()));
    }

    fn delete_buffer(&self, buffer: &u32) {
        self.push(Call::DeleteBuffer(*buffer));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.push(Call::VertexAttribPointer {
            index,
            size,
            normalized,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.push(Call::EnableVertexAttribArray(index));
    }

    fn use_program(&self, program: Option<&u32>) {
        self.push(Call::UseProgram(program.copied()));
    }

    fn uniform_matrix4fv(&self, location: Option<&String>, value: &Mat4) {
        self.push(Call::UniformMatrix4(location.cloned(), *value));
    }

    fn uniform4fv(&self, location: Option<&String>, value: &[f32; 4]) {
        self.push(Call::Uniform4(location.cloned(), *value));
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.push(Call::ClearColor([r, g, b, a]));
    }

    fn clear_color_buffer(&self) {
        self.push(Call::Clear);
    }

    fn draw_line_strip(&self, first: i32, count: i32) {
        self.push(Call::DrawLineStrip { first, count });
    }
}

/// A canvas stand-in that hands out [`RecordingGl`] contexts sharing one call log.
pub struct FakeCanvas {
    pub available: bool,
    pub requests: Cell<usize>,
    gl: RecordingGl,
}

impl FakeCanvas {
    pub fn new() -> FakeCanvas {
        FakeCanvas::with_faults(Faults::default())
    }

    pub fn with_faults(faults: Faults) -> FakeCanvas {
        FakeCanvas {
            available: true,
            requests: Cell::new(0),
            gl: RecordingGl {
                calls: Rc::default(),
                next_id: Rc::default(),
                stages: Rc::default(),
                faults,
            },
        }
    }

    pub fn unavailable() -> FakeCanvas {
        FakeCanvas {
            available: false,
            ..FakeCanvas::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.gl.calls.borrow().clone()
    }

    pub fn reset_calls(&self) {
        self.gl.calls.borrow_mut().clear();
    }

    pub fn draws(&self) -> Vec<i32> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::DrawLineStrip { count, .. } => Some(count),
                _ => None,
            })
            .collect()
    }

    pub fn colors(&self) -> Vec<[f32; 4]> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Uniform4(_, color) => Some(color),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|call| pred(call)).count()
    }
}

impl Surface for FakeCanvas {
    type Backend = RecordingGl;

    fn acquire_context(&self) -> Option<RecordingGl> {
        self.requests.set(self.requests.get() + 1);
        self.available.then(|| self.gl.clone())
    }
}

/// Deterministic stand-in for `Math.random`.
pub fn rng() -> impl FnMut() -> f64 {
    let mut state = 0.0_f64;
    move || {
        state = (state + 0.37) % 1.0;
        state
    }
}
