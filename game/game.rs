use engine::{geometry::Triangle, Animation, Config, Renderer};

pub struct Game {
	renderer: Renderer,
	animation: Animation
}

impl Game {
	/// Requires a current OpenGL context.
	pub fn new(config: &Config) -> Self {
		Self {
			renderer: Renderer::new(config, &Triangle::scene()),
			animation: Animation::new(config.animation.clone())
		}
	}

	pub fn update(&mut self) {
		self.animation.update();
	}

	pub fn render(&self) {
		self.renderer.render(&self.animation.model_matrix());
	}
}
