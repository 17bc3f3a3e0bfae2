use super::{Vector3, ApproxEq};

pub const IDENTITY: Quaternion = Quaternion { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

#[derive(Default, Copy, Clone, Debug, PartialEq)]
pub struct Quaternion {
	pub x: f32,
	pub y: f32,
	pub z: f32,
	pub w: f32
}

impl Quaternion {
	pub fn new() -> Self {
		IDENTITY
	}

	pub fn from(x: f32, y: f32, z: f32, w: f32) -> Self {
		Self { x, y, z, w }
	}

	/// Expects `axis` to be normalized.
	pub fn set_from_axis_angle(&mut self, axis: &Vector3, angle: f32) {
		let half_angle = angle / 2.0;
		let s = half_angle.sin();

		self.x = axis.x * s;
		self.y = axis.y * s;
		self.z = axis.z * s;
		self.w = half_angle.cos();
	}
}

impl ApproxEq for Quaternion {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		let x_diff = (self.x - other.x).abs();
		let y_diff = (self.y - other.y).abs();
		let z_diff = (self.z - other.z).abs();
		let w_diff = (self.w - other.w).abs();

		x_diff <= tol && y_diff <= tol && z_diff <= tol && w_diff <= tol
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::assert_approx_eq;
	use std::f32::consts::{PI, FRAC_PI_2, FRAC_1_SQRT_2};

	#[test]
	fn new() {
		assert_eq!(Quaternion::new(), Quaternion { x: 0.0, y: 0.0, z: 0.0, w: 1.0 });
	}

	#[test]
	fn from() {
		assert_eq!(Quaternion::from(1.0, 2.0, 3.0, 4.0), Quaternion { x: 1.0, y: 2.0, z: 3.0, w: 4.0 });
	}

	#[test]
	fn set_from_axis_angle() {
		let mut q = Quaternion::new();
		q.set_from_axis_angle(&Vector3::new(1.0, 2.0, 3.0), PI);
		assert_approx_eq(&q, &Quaternion { x: 1.0, y: 2.0, z: 3.0, w: 0.0 }, 1e-6);

		q.set_from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2);
		assert_approx_eq(&q, &Quaternion { x: 0.0, y: 0.0, z: FRAC_1_SQRT_2, w: FRAC_1_SQRT_2 }, 1e-6);
	}
}
