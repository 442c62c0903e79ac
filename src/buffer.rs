use crate::backend::GlBackend;

/// Allocates a vertex buffer and uploads `data` as static draw storage.
///
/// Leaves the new buffer bound to `ARRAY_BUFFER`. Returns `None`, after
/// logging a warning, when the backend cannot allocate a buffer.
pub fn upload<B: GlBackend>(gl: &B, data: &[f32]) -> Option<B::Buffer> {
    let Some(buffer) = gl.create_buffer() else {
        log::warn!("failed to allocate a vertex buffer for {} values", data.len());
        return None;
    };
    gl.bind_array_buffer(Some(&buffer));
    gl.array_buffer_data(data);
    Some(buffer)
}
