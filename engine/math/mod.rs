pub mod vector3;
pub use vector3::Vector3;

pub mod quaternion;
pub use quaternion::Quaternion;

pub mod matrix4;
pub use matrix4::Matrix4;

use std::fmt::Debug;

pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

pub trait ApproxEq {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool;
}

pub fn assert_approx_eq<T: ApproxEq + Debug>(left: &T, right: &T, tol: f32) {
	if !left.approx_eq(right, tol) {
		panic!("assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n   tol: `{}`", left, right, tol);
	}
}

impl ApproxEq for f32 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		(self - other).abs() <= tol
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deg_to_rad() {
		assert_approx_eq(&(180.0 * DEG_TO_RAD), &std::f32::consts::PI, 1e-6);
	}

	#[test]
	#[should_panic]
	fn assert_approx_eq_panics() {
		assert_approx_eq(&1.0f32, &1.1f32, 0.01);
	}
}
