use super::{vector3, Vector3, Quaternion, ApproxEq};
use std::ops::Mul;

const IDENTITY: [[f32; 4]; 4] = [
	[1.0, 0.0, 0.0, 0.0],
	[0.0, 1.0, 0.0, 0.0],
	[0.0, 0.0, 1.0, 0.0],
	[0.0, 0.0, 0.0, 1.0]
];

/// Row-major 4x4 matrix operating on column vectors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4 {
	pub elements: [[f32; 4]; 4]
}

impl Default for Matrix4 {
	fn default() -> Self {
		Self::new()
	}
}

impl Matrix4 {
	pub fn new() -> Self {
		Self { elements: IDENTITY }
	}

	pub fn from(elements: [[f32; 4]; 4]) -> Self {
		Self { elements }
	}

	pub fn compose(&mut self, position: &Vector3, rotation: &Quaternion, scale: &Vector3) {
		let (px, py, pz) = (position.x, position.y, position.z);
		let (qx, qy, qz, qw) = (rotation.x, rotation.y, rotation.z, rotation.w);
		let (sx, sy, sz) = (scale.x, scale.y, scale.z);

		let (qx2, qy2, qz2) = (qx * 2.0, qy * 2.0, qz * 2.0);
		let (qxx, qxy, qxz) = (qx * qx2, qx * qy2, qx * qz2);
		let (qyy, qyz, qzz) = (qy * qy2, qy * qz2, qz * qz2);
		let (qwx, qwy, qwz) = (qw * qx2, qw * qy2, qw * qz2);

		self.elements = [
			[(1.0 - (qyy + qzz)) * sx, (qxy - qwz) * sy, (qxz + qwy) * sz, px],
			[(qxy + qwz) * sx, (1.0 - (qxx + qzz)) * sy, (qyz - qwx) * sz, py],
			[(qxz - qwy) * sx, (qyz + qwx) * sy, (1.0 - (qxx + qyy)) * sz, pz],
			[0.0, 0.0, 0.0, 1.0]
		];
	}

	pub fn make_rotation_from_quaternion(&mut self, q: &Quaternion) {
		self.compose(&vector3::ZERO, q, &vector3::ONE);
	}

	pub fn make_translation(&mut self, v: &Vector3) {
		self.elements = [
			[1.0, 0.0, 0.0, v.x],
			[0.0, 1.0, 0.0, v.y],
			[0.0, 0.0, 1.0, v.z],
			[0.0, 0.0, 0.0, 1.0]
		];
	}

	/// Post-multiplies by a rotation of `angle` radians around `axis`. The axis doesn't need to be normalized.
	pub fn rotate(&mut self, axis: &Vector3, angle: f32) {
		let mut q = Quaternion::new();
		q.set_from_axis_angle(&axis.normalized(), angle);

		let mut rotation = Matrix4::new();
		rotation.make_rotation_from_quaternion(&q);

		*self = *self * rotation;
	}

	pub fn translate(&mut self, v: &Vector3) {
		let mut translation = Matrix4::new();
		translation.make_translation(v);

		*self = *self * translation;
	}

	/// Column-major copy of the elements, the layout OpenGL expects for a non-transposed upload.
	pub fn to_cols_array(&self) -> [f32; 16] {
		let e = &self.elements;
		let mut cols = [0.0; 16];

		for c in 0..4 {
			for r in 0..4 {
				cols[c * 4 + r] = e[r][c];
			}
		}

		cols
	}
}

impl Mul for Matrix4 {
	type Output = Matrix4;

	fn mul(self, rhs: Self) -> Self {
		let a = &self.elements;
		let b = &rhs.elements;
		let mut c = [[0.0; 4]; 4];

		for i in 0..4 {
			for j in 0..4 {
				c[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j] + a[i][3] * b[3][j];
			}
		}

		Self { elements: c }
	}
}

impl ApproxEq for Matrix4 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		for i in 0..4 {
			for j in 0..4 {
				if (self.elements[i][j] - other.elements[i][j]).abs() > tol {
					return false;
				}
			}
		}

		true
	}
}
