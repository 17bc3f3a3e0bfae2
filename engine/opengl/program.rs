use std::ffi::CString;
use gl::types::{GLint, GLuint};
use super::shader::{read_info_log, Shader, ShaderError, ShaderStage};
use crate::math::Matrix4;

pub const MODEL_UNIFORM: &str = "model";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProgramState {
	Linked,
	Failed
}

/// Linked shader program with its cached model matrix location.
///
/// Building never aborts: errors are logged and kept, and a failed program binds as program 0 so rendering carries on
/// without shading.
#[derive(Debug)]
pub struct Program {
	handle: GLuint,
	state: ProgramState,
	model_location: Option<GLint>,
	errors: Vec<ShaderError>
}

impl Program {
	pub fn build(sources: &[(ShaderStage, &str)]) -> Self {
		let handle = unsafe { gl::CreateProgram() };

		let mut program = Self {
			handle,
			state: ProgramState::Failed,
			model_location: None,
			errors: vec![]
		};

		if handle == 0 {
			program.report(ShaderError::CreateProgram);
			return program;
		}

		let mut shaders = Vec::with_capacity(sources.len());

		for (stage, source) in sources {
			match Shader::compile(source, *stage) {
				Ok(shader) => {
					unsafe { gl::AttachShader(handle, shader.handle()) };
					shaders.push(shader);
				},
				Err(error) => program.report(error)
			}
		}

		if let Err(error) = program.link() {
			program.report(error);
			return program;
		}

		// Attached shaders are only flagged for deletion and live as long as the program
		drop(shaders);

		program.state = ProgramState::Linked;
		program.model_location = program.uniform_location(MODEL_UNIFORM);

		log::debug!("Linked shader program {}", handle);
		program
	}

	/// The vertex and fragment shaders embedded in the binary.
	pub fn build_triangle() -> Self {
		Self::build(&[
			(ShaderStage::Vertex, super::shader::TRIANGLE_VERTEX_SOURCE),
			(ShaderStage::Fragment, super::shader::TRIANGLE_FRAGMENT_SOURCE)
		])
	}

	fn report(&mut self, error: ShaderError) {
		log::error!("{}", error);
		self.errors.push(error);
	}

	fn link(&self) -> Result<(), ShaderError> {
		let mut status = gl::FALSE as GLint;

		unsafe {
			gl::LinkProgram(self.handle);
			gl::GetProgramiv(self.handle, gl::LINK_STATUS, &mut status);
		}

		if status == gl::FALSE as GLint {
			return Err(ShaderError::Link(self.info_log()));
		}

		Ok(())
	}

	/// Not part of the normal startup path, see `Config::validate_program`.
	pub fn validate(&self) -> Result<(), ShaderError> {
		let mut status = gl::FALSE as GLint;

		unsafe {
			gl::ValidateProgram(self.handle);
			gl::GetProgramiv(self.handle, gl::VALIDATE_STATUS, &mut status);
		}

		if status == gl::FALSE as GLint {
			return Err(ShaderError::Validate(self.info_log()));
		}

		Ok(())
	}

	fn info_log(&self) -> String {
		let handle = self.handle;

		read_info_log(|capacity, length, buffer| unsafe {
			gl::GetProgramInfoLog(handle, capacity, length, buffer)
		})
	}

	fn uniform_location(&self, name: &str) -> Option<GLint> {
		let c_name = CString::new(name).ok()?;
		let location = unsafe { gl::GetUniformLocation(self.handle, c_name.as_ptr()) };

		if location < 0 {
			log::warn!("Uniform {} not found in program {}", name, self.handle);
			return None;
		}

		Some(location)
	}

	pub fn handle(&self) -> GLuint {
		self.handle
	}

	pub fn state(&self) -> ProgramState {
		self.state
	}

	pub fn is_linked(&self) -> bool {
		self.state == ProgramState::Linked
	}

	pub fn model_location(&self) -> Option<GLint> {
		self.model_location
	}

	pub fn errors(&self) -> &[ShaderError] {
		&self.errors
	}

	pub fn bind(&self) {
		let handle = if self.is_linked() { self.handle } else { 0 };
		unsafe { gl::UseProgram(handle) };
	}

	pub fn unbind() {
		unsafe { gl::UseProgram(0) };
	}

	/// Uploads column-major, so no transpose is requested.
	pub fn set_model(&self, model: &Matrix4) {
		if let Some(location) = self.model_location {
			let cols = model.to_cols_array();
			unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, cols.as_ptr()) };
		}
	}
}

impl Drop for Program {
	fn drop(&mut self) {
		if self.handle != 0 {
			unsafe { gl::DeleteProgram(self.handle) };
		}
	}
}
