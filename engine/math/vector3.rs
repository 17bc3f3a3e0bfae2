use super::ApproxEq;
use auto_ops::impl_op_ex;

pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };
pub const ONE: Vector3 = Vector3 { x: 1.0, y: 1.0, z: 1.0 };

#[derive(Default, Copy, Clone, Debug, PartialEq)]
pub struct Vector3 {
	pub x: f32,
	pub y: f32,
	pub z: f32
}

impl Vector3 {
	pub fn new(x: f32, y: f32, z: f32) -> Self {
		Self { x, y, z }
	}

	pub fn from_slice(slice: &[f32]) -> Self {
		Self { x: slice[0], y: slice[1], z: slice[2] }
	}

	pub fn length(&self) -> f32 {
		(self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
	}

	pub fn normalize(&mut self) {
		let length = self.length();

		if length != 0.0 {
			*self /= length;
		}
	}

	pub fn normalized(&self) -> Self {
		let mut v = *self;
		v.normalize();
		v
	}
}

impl_op_ex!(/= |a: &mut Vector3, b: f32| {
	a.x /= b;
	a.y /= b;
	a.z /= b;
});

impl ApproxEq for Vector3 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		let x_diff = (self.x - other.x).abs();
		let y_diff = (self.y - other.y).abs();
		let z_diff = (self.z - other.z).abs();

		x_diff <= tol && y_diff <= tol && z_diff <= tol
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::assert_approx_eq;
	use std::f32::consts::FRAC_1_SQRT_2;

	#[test]
	fn new() {
		assert_eq!(Vector3::new(1.0, 2.0, 3.0), Vector3 { x: 1.0, y: 2.0, z: 3.0 });
	}

	#[test]
	fn from_slice() {
		let attributes = [0.5, -0.5, 0.0, 0.0, 0.9, 0.0];
		assert_eq!(Vector3::from_slice(&attributes[3..6]), Vector3 { x: 0.0, y: 0.9, z: 0.0 });
	}

	#[test]
	fn length() {
		assert_eq!(Vector3::new(2.0, 3.0, 6.0).length(), 7.0);
	}

	#[test]
	fn normalize() {
		let mut v = Vector3::new(0.0, 1.0, 1.0);
		v.normalize();
		assert_approx_eq(&v, &Vector3::new(0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2), 1e-6);
	}

	#[test]
	fn normalize_zero() {
		let mut v = ZERO;
		v.normalize();
		assert_eq!(v, ZERO);
	}

	#[test]
	fn normalized_leaves_original() {
		let v = Vector3::new(3.0, 0.0, 4.0);
		let n = v.normalized();
		assert_eq!(v, Vector3::new(3.0, 0.0, 4.0));
		assert_approx_eq(&n, &Vector3::new(0.6, 0.0, 0.8), 1e-6);
	}

	#[test]
	fn div_assign() {
		let mut v = Vector3::new(2.0, 4.0, 6.0);
		v /= 2.0;
		assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
	}
}
