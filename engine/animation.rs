use crate::{config::AnimationConfig, math::{Matrix4, Vector3, DEG_TO_RAD}};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
	Forward,
	Backward
}

impl Direction {
	fn flipped(self) -> Self {
		match self {
			Direction::Forward => Direction::Backward,
			Direction::Backward => Direction::Forward
		}
	}
}

/// Per-frame animation state. Advances by fixed steps, so the speed depends on the frame rate.
#[derive(Clone, Debug)]
pub struct Animation {
	config: AnimationConfig,
	offset: f32,
	direction: Direction,
	angle: f32
}

impl Animation {
	pub fn new(config: AnimationConfig) -> Self {
		Self {
			config,
			offset: 0.0,
			direction: Direction::Forward,
			angle: 0.0
		}
	}

	pub fn offset(&self) -> f32 {
		self.offset
	}

	pub fn direction(&self) -> Direction {
		self.direction
	}

	/// Current angle in degrees.
	pub fn angle(&self) -> f32 {
		self.angle
	}

	pub fn update(&mut self) {
		let max = self.config.offset_max;

		match self.direction {
			Direction::Forward => self.offset += self.config.offset_step,
			Direction::Backward => self.offset -= self.config.offset_step
		}

		if self.offset.abs() >= max {
			self.offset = self.offset.max(-max).min(max);
			self.direction = self.direction.flipped();
		}

		// With the default negative step the angle never reaches the wrap point
		self.angle += self.config.angle_step;
		if self.angle >= self.config.angle_wrap {
			self.angle -= self.config.angle_wrap;
		}
	}

	pub fn model_matrix(&self) -> Matrix4 {
		let mut model = Matrix4::new();

		if self.config.translate_by_offset {
			model.translate(&Vector3::new(self.offset, 0.0, 0.0));
		}

		model.rotate(&self.config.rotation_axis, self.angle * DEG_TO_RAD * self.config.rotation_speed);
		model
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::assert_approx_eq;

	#[test]
	fn new() {
		let animation = Animation::new(AnimationConfig::default());
		assert_eq!(animation.offset(), 0.0);
		assert_eq!(animation.direction(), Direction::Forward);
		assert_eq!(animation.angle(), 0.0);
	}

	#[test]
	fn offset_stays_in_bounds() {
		let mut animation = Animation::new(AnimationConfig::default());

		for _ in 0..20_000 {
			animation.update();
			assert!(animation.offset().abs() <= 0.7, "offset {} out of bounds", animation.offset());
		}
	}

	#[test]
	fn direction_flips_at_bound() {
		let mut animation = Animation::new(AnimationConfig::default());

		while animation.direction() == Direction::Forward {
			animation.update();
		}

		let at_bound = animation.offset();
		assert_eq!(at_bound, 0.7);

		animation.update();
		assert!(animation.offset() < at_bound);
		assert_eq!(animation.direction(), Direction::Backward);

		while animation.direction() == Direction::Backward {
			animation.update();
		}

		let at_bound = animation.offset();
		assert_eq!(at_bound, -0.7);

		animation.update();
		assert!(animation.offset() > at_bound);
	}

	#[test]
	fn angle_decreases_every_frame() {
		let mut animation = Animation::new(AnimationConfig::default());
		let mut previous = animation.angle();

		for _ in 0..1000 {
			animation.update();
			assert_approx_eq(&(previous - animation.angle()), &0.01, 1e-4);
			previous = animation.angle();
		}

		assert_approx_eq(&animation.angle(), &-10.0, 1e-3);
	}

	#[test]
	fn angle_wraps_with_positive_step() {
		let config = AnimationConfig { angle_step: 100.0, ..AnimationConfig::default() };
		let mut animation = Animation::new(config);

		for _ in 0..4 {
			animation.update();
		}

		assert_approx_eq(&animation.angle(), &40.0, 1e-4);
	}

	#[test]
	fn model_matrix_starts_at_identity() {
		let animation = Animation::new(AnimationConfig::default());
		assert_approx_eq(&animation.model_matrix(), &Matrix4::new(), 1e-6);
	}

	#[test]
	fn model_matrix_rotates_around_axis() {
		let mut animation = Animation::new(AnimationConfig::default());
		animation.update();

		let mut expected = Matrix4::new();
		expected.rotate(&Vector3::new(0.0, 1.0, 1.0), animation.angle() * DEG_TO_RAD * 100.0);

		let model = animation.model_matrix();
		assert_approx_eq(&model, &expected, 1e-6);
		assert_approx_eq(&model.elements[0][3], &0.0, 1e-6);
	}

	#[test]
	fn model_matrix_translates_when_enabled() {
		let config = AnimationConfig { translate_by_offset: true, ..AnimationConfig::default() };
		let mut animation = Animation::new(config);
		animation.update();

		let model = animation.model_matrix();
		assert_approx_eq(&model.elements[0][3], &animation.offset(), 1e-6);
	}
}
