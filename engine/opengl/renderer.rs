use super::{report_errors, Program, TriangleBuffer};
use crate::{config::Config, geometry::Triangle, math::Matrix4};

pub struct Renderer {
	triangle_buffers: Vec<TriangleBuffer>,
	program: Program,
	clear_color: [f32; 4]
}

impl Renderer {
	/// Uploads the triangles, then builds the shader program. Shader failures are logged, not returned.
	pub fn new(config: &Config, triangles: &[Triangle]) -> Self {
		let triangle_buffers: Vec<TriangleBuffer> = triangles.iter().map(TriangleBuffer::upload).collect();
		unsafe { gl::BindVertexArray(0) };

		let program = Program::build_triangle();

		if config.validate_program {
			if let Err(error) = program.validate() {
				log::error!("{}", error);
			}
		}

		report_errors("renderer setup");
		log::info!("Uploaded {} triangles, shader program {:?}", triangle_buffers.len(), program.state());

		Self {
			triangle_buffers,
			program,
			clear_color: config.clear_color
		}
	}

	pub fn render(&self, model: &Matrix4) {
		let [r, g, b, a] = self.clear_color;

		unsafe {
			gl::ClearColor(r, g, b, a);
			gl::Clear(gl::COLOR_BUFFER_BIT);
		}

		self.program.bind();
		self.program.set_model(model);

		for triangle_buffer in &self.triangle_buffers {
			triangle_buffer.draw();
		}

		Program::unbind();
	}

	pub fn triangle_buffers(&self) -> &[TriangleBuffer] {
		&self.triangle_buffers
	}

	pub fn program(&self) -> &Program {
		&self.program
	}
}
