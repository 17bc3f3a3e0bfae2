use std::{ffi::c_void, mem::size_of_val};
use gl::types::{GLsizei, GLsizeiptr, GLuint};
use crate::geometry::{
	Triangle,
	COLOR_COMPONENTS,
	COLOR_LOCATION,
	COLOR_OFFSET,
	FLOATS_PER_TRIANGLE,
	POSITION_COMPONENTS,
	POSITION_LOCATION,
	POSITION_OFFSET,
	VERTEX_STRIDE
};

/// A vertex array and its vertex buffer holding one triangle. Both are deleted on drop, so the context must still be
/// current at that point.
#[derive(Debug)]
pub struct TriangleBuffer {
	vertex_array: GLuint,
	vertex_buffer: GLuint,
	vertex_count: usize
}

impl TriangleBuffer {
	/// Leaves the new vertex array bound.
	pub fn upload(triangle: &Triangle) -> Self {
		let attributes = triangle.attributes();
		let mut vertex_array = 0;
		let mut vertex_buffer = 0;

		unsafe {
			gl::GenVertexArrays(1, &mut vertex_array);
			gl::GenBuffers(1, &mut vertex_buffer);

			gl::BindVertexArray(vertex_array);
			gl::BindBuffer(gl::ARRAY_BUFFER, vertex_buffer);
			gl::BufferData(gl::ARRAY_BUFFER, size_of_val(attributes) as GLsizeiptr, attributes.as_ptr() as *const c_void, gl::STATIC_DRAW);

			gl::VertexAttribPointer(POSITION_LOCATION, POSITION_COMPONENTS as i32, gl::FLOAT, gl::FALSE, VERTEX_STRIDE as GLsizei, POSITION_OFFSET as *const c_void);
			gl::EnableVertexAttribArray(POSITION_LOCATION);

			gl::VertexAttribPointer(COLOR_LOCATION, COLOR_COMPONENTS as i32, gl::FLOAT, gl::FALSE, VERTEX_STRIDE as GLsizei, COLOR_OFFSET as *const c_void);
			gl::EnableVertexAttribArray(COLOR_LOCATION);
		}

		log::trace!("Uploaded triangle to vertex array {} buffer {}", vertex_array, vertex_buffer);

		Self {
			vertex_array,
			vertex_buffer,
			vertex_count: triangle.vertex_count()
		}
	}

	pub fn draw(&self) {
		unsafe {
			gl::BindVertexArray(self.vertex_array);
			gl::DrawArrays(gl::TRIANGLES, 0, self.vertex_count as GLsizei);
		}
	}

	/// Copies the payload back from device memory.
	pub fn read_back(&self) -> [f32; FLOATS_PER_TRIANGLE] {
		let mut attributes = [0.0f32; FLOATS_PER_TRIANGLE];

		unsafe {
			gl::BindBuffer(gl::ARRAY_BUFFER, self.vertex_buffer);
			gl::GetBufferSubData(gl::ARRAY_BUFFER, 0, size_of_val(&attributes) as GLsizeiptr, attributes.as_mut_ptr() as *mut c_void);
		}

		attributes
	}

	pub fn vertex_array(&self) -> GLuint {
		self.vertex_array
	}

	pub fn vertex_buffer(&self) -> GLuint {
		self.vertex_buffer
	}

	pub fn vertex_count(&self) -> usize {
		self.vertex_count
	}
}

impl Drop for TriangleBuffer {
	fn drop(&mut self) {
		unsafe {
			gl::DeleteBuffers(1, &self.vertex_buffer);
			gl::DeleteVertexArrays(1, &self.vertex_array);
		}
	}
}
