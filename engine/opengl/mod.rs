pub mod context;
pub use context::{BootstrapError, Context};

pub mod shader;
pub use shader::{Shader, ShaderError, ShaderStage};

pub mod program;
pub use program::{Program, ProgramState};

pub mod triangle_buffer;
pub use triangle_buffer::TriangleBuffer;

pub mod renderer;
pub use renderer::Renderer;

use gl::types::GLenum;

/// Drains the OpenGL error queue into the log. Returns the number of errors found.
pub fn report_errors(label: &str) -> usize {
	drain_errors(|| unsafe { gl::GetError() }, label)
}

fn drain_errors<F: FnMut() -> GLenum>(mut next_error: F, label: &str) -> usize {
	let mut count = 0;

	loop {
		let error = next_error();
		if error == gl::NO_ERROR {
			break;
		}

		log::warn!("OpenGL error 0x{:04X} after {}", error, label);
		count += 1;
	}

	count
}

#[cfg(test)]
mod tests {
	use super::*;

	fn error_queue(errors: Vec<GLenum>) -> impl FnMut() -> GLenum {
		let mut errors = errors.into_iter();
		move || errors.next().unwrap_or(gl::NO_ERROR)
	}

	#[test]
	fn drain_errors_empty() {
		assert_eq!(drain_errors(error_queue(vec![]), "nothing"), 0);
	}

	#[test]
	fn drain_errors_counts_until_no_error() {
		let queue = error_queue(vec![gl::INVALID_ENUM, gl::INVALID_OPERATION]);
		assert_eq!(drain_errors(queue, "draw"), 2);
	}

	#[test]
	fn drain_errors_stops_at_first_no_error() {
		let queue = error_queue(vec![gl::INVALID_VALUE, gl::NO_ERROR, gl::OUT_OF_MEMORY]);
		assert_eq!(drain_errors(queue, "upload"), 1);
	}
}
