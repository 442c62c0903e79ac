use js_sys::{Float32Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation,
};

use crate::backend::{GlBackend, Mat4, Surface};
use crate::shader::ShaderStage;

impl GlBackend for GL {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        let kind = match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        };
        GL::create_shader(self, kind)
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        GL::shader_source(self, shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        GL::compile_shader(self, shader);
    }

    fn compile_status(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.get_shader_info_log(shader)
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        GL::delete_shader(self, Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        GL::create_program(self)
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        GL::attach_shader(self, program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        GL::link_program(self, program);
    }

    fn link_status(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.get_program_info_log(program)
    }

    fn delete_program(&self, program: &WebGlProgram) {
        GL::delete_program(self, Some(program));
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
        self.get_attrib_location(program, name)
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.get_uniform_location(program, name)
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        GL::create_buffer(self)
    }

    fn bind_array_buffer(&self, buffer: Option<&WebGlBuffer>) {
        self.bind_buffer(GL::ARRAY_BUFFER, buffer);
    }

    fn array_buffer_data(&self, data: &[f32]) {
        // Copy into JS memory so later wasm allocations cannot invalidate the view.
        let array = Float32Array::from(data);
        self.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
    }

    fn delete_buffer(&self, buffer: &WebGlBuffer) {
        GL::delete_buffer(self, Some(buffer));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.vertex_attrib_pointer_with_i32(index, size, GL::FLOAT, normalized, stride, offset);
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        GL::enable_vertex_attrib_array(self, index);
    }

    fn use_program(&self, program: Option<&WebGlProgram>) {
        GL::use_program(self, program);
    }

    fn uniform_matrix4fv(&self, location: Option<&WebGlUniformLocation>, value: &Mat4) {
        self.uniform_matrix4fv_with_f32_array(location, false, value);
    }

    fn uniform4fv(&self, location: Option<&WebGlUniformLocation>, value: &[f32; 4]) {
        self.uniform4fv_with_f32_array(location, value);
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        GL::clear_color(self, r, g, b, a);
    }

    fn clear_color_buffer(&self) {
        self.clear(GL::COLOR_BUFFER_BIT);
    }

    fn draw_line_strip(&self, first: i32, count: i32) {
        self.draw_arrays(GL::LINE_STRIP, first, count);
    }
}

impl Surface for HtmlCanvasElement {
    type Backend = GL;

    fn acquire_context(&self) -> Option<GL> {
        let options = Object::new();
        Reflect::set(&options, &"antialias".into(), &JsValue::TRUE).ok()?;
        self.get_context_with_context_options("webgl2", &options)
            .ok()
            .flatten()?
            .dyn_into::<GL>()
            .ok()
    }
}
