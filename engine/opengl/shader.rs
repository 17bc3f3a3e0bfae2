use std::fmt::{self, Display};
use gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};
use thiserror::Error;

pub const TRIANGLE_VERTEX_SOURCE: &str = include_str!("../shaders/triangle.vert");
pub const TRIANGLE_FRAGMENT_SOURCE: &str = include_str!("../shaders/triangle.frag");

/// Diagnostic logs longer than this are truncated.
pub const INFO_LOG_CAPACITY: usize = 1024;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShaderStage {
	Vertex,
	Fragment
}

impl ShaderStage {
	pub fn gl_enum(self) -> GLenum {
		match self {
			ShaderStage::Vertex => gl::VERTEX_SHADER,
			ShaderStage::Fragment => gl::FRAGMENT_SHADER
		}
	}
}

impl Display for ShaderStage {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			ShaderStage::Vertex => write!(f, "vertex"),
			ShaderStage::Fragment => write!(f, "fragment")
		}
	}
}

#[derive(Debug, Error)]
pub enum ShaderError {
	#[error("Failed to create shader program")]
	CreateProgram,
	#[error("Failed to create the {0} shader")]
	CreateShader(ShaderStage),
	#[error("Error compiling the {stage} shader ({code}): '{log}'", code = .stage.gl_enum())]
	Compile {
		stage: ShaderStage,
		log: String
	},
	#[error("Error linking program: '{0}'")]
	Link(String),
	#[error("Error validating program: '{0}'")]
	Validate(String)
}

/// A compiled shader object, deleted on drop.
#[derive(Debug)]
pub struct Shader {
	handle: GLuint,
	stage: ShaderStage
}

impl Shader {
	pub fn compile(source: &str, stage: ShaderStage) -> Result<Self, ShaderError> {
		let handle = unsafe { gl::CreateShader(stage.gl_enum()) };
		if handle == 0 {
			return Err(ShaderError::CreateShader(stage));
		}

		let shader = Self { handle, stage };

		// Explicit length, the source doesn't need to be nul terminated
		let source_ptr = source.as_ptr() as *const GLchar;
		let source_len = source.len() as GLint;

		let mut status = gl::FALSE as GLint;

		unsafe {
			gl::ShaderSource(handle, 1, &source_ptr, &source_len);
			gl::CompileShader(handle);
			gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut status);
		}

		if status == gl::FALSE as GLint {
			let log = read_info_log(|capacity, length, buffer| unsafe {
				gl::GetShaderInfoLog(handle, capacity, length, buffer)
			});

			return Err(ShaderError::Compile { stage, log });
		}

		Ok(shader)
	}

	pub fn handle(&self) -> GLuint {
		self.handle
	}

	pub fn stage(&self) -> ShaderStage {
		self.stage
	}
}

impl Drop for Shader {
	fn drop(&mut self) {
		unsafe { gl::DeleteShader(self.handle) };
	}
}

/// Reads a shader or program info log through `get_log(capacity, length_out, buffer)`.
pub(crate) fn read_info_log<F>(get_log: F) -> String where
	F: FnOnce(GLsizei, *mut GLsizei, *mut GLchar)
{
	let mut buffer = vec![0u8; INFO_LOG_CAPACITY];
	let mut length: GLsizei = 0;

	get_log(INFO_LOG_CAPACITY as GLsizei, &mut length, buffer.as_mut_ptr() as *mut GLchar);

	let length = (length.max(0) as usize).min(INFO_LOG_CAPACITY);
	buffer.truncate(length);

	String::from_utf8_lossy(&buffer).trim_end().to_owned()
}
