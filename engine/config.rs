use crate::math::Vector3;

#[derive(Clone, Debug)]
pub struct WindowConfig {
	pub width: u32,
	pub height: u32,
	pub title: String,
	/// Requested OpenGL (major, minor) version, always a forward compatible core profile.
	pub context_version: (u32, u32),
	pub visible: bool
}

impl Default for WindowConfig {
	fn default() -> Self {
		Self {
			width: 800,
			height: 600,
			title: String::from("Test Window"),
			context_version: (3, 3),
			visible: true
		}
	}
}

#[derive(Clone, Debug)]
pub struct AnimationConfig {
	pub offset_step: f32,
	pub offset_max: f32,
	/// Added to the angle every frame, in degrees.
	pub angle_step: f32,
	pub angle_wrap: f32,
	/// Multiplier applied to the angle after converting it to radians.
	pub rotation_speed: f32,
	pub rotation_axis: Vector3,
	pub translate_by_offset: bool
}

impl Default for AnimationConfig {
	fn default() -> Self {
		Self {
			offset_step: 0.0005,
			offset_max: 0.7,
			angle_step: -0.01,
			angle_wrap: 360.0,
			rotation_speed: 100.0,
			rotation_axis: Vector3::new(0.0, 1.0, 1.0),
			translate_by_offset: false
		}
	}
}

#[derive(Clone, Debug)]
pub struct Config {
	pub window: WindowConfig,
	pub animation: AnimationConfig,
	pub clear_color: [f32; 4],
	pub validate_program: bool
}

impl Default for Config {
	fn default() -> Self {
		Self {
			window: WindowConfig::default(),
			animation: AnimationConfig::default(),
			clear_color: [0.1, 0.1, 0.1, 1.0],
			validate_program: false
		}
	}
}
