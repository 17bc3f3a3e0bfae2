use super::{COLOR_COMPONENTS, FLOATS_PER_TRIANGLE, FLOATS_PER_VERTEX, POSITION_COMPONENTS, VERTICES_PER_TRIANGLE};
use crate::math::Vector3;

// Position then color for each of the three corners
const BLUE_TRIANGLE: [f32; FLOATS_PER_TRIANGLE] = [
	-0.5, -0.5, -0.5, 0.0, 0.0, 0.9, // left
	 0.5, -0.5,  0.0, 0.0, 0.0, 0.9, // right
	 0.5, -0.5, -0.5, 0.0, 0.0, 0.9  // top
];

const GREEN_TRIANGLE: [f32; FLOATS_PER_TRIANGLE] = [
	-0.5, -0.5, -0.5, 0.0, 0.9, 0.0,
	 0.5, -0.5,  0.0, 0.0, 0.9, 0.0,
	-0.5,  0.5,  0.0, 0.0, 0.9, 0.0
];

const RED_TRIANGLE: [f32; FLOATS_PER_TRIANGLE] = [
	-0.5, -0.5, -0.5, 1.0, 0.1, 0.1,
	-0.5,  0.5,  0.0, 1.0, 0.1, 0.1,
	 0.5, -0.5, -0.5, 1.0, 0.1, 0.1
];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
	attributes: [f32; FLOATS_PER_TRIANGLE]
}

impl Triangle {
	pub fn new(attributes: [f32; FLOATS_PER_TRIANGLE]) -> Self {
		Self { attributes }
	}

	pub fn blue() -> Self {
		Self::new(BLUE_TRIANGLE)
	}

	pub fn green() -> Self {
		Self::new(GREEN_TRIANGLE)
	}

	pub fn red() -> Self {
		Self::new(RED_TRIANGLE)
	}

	/// The three triangles drawn every frame, in draw order.
	pub fn scene() -> [Self; 3] {
		[Self::blue(), Self::green(), Self::red()]
	}

	pub fn attributes(&self) -> &[f32; FLOATS_PER_TRIANGLE] {
		&self.attributes
	}

	pub fn vertex_count(&self) -> usize {
		VERTICES_PER_TRIANGLE
	}

	pub fn position(&self, vertex: usize) -> Vector3 {
		let start = vertex * FLOATS_PER_VERTEX;
		Vector3::from_slice(&self.attributes[start..start + POSITION_COMPONENTS])
	}

	pub fn color(&self, vertex: usize) -> Vector3 {
		let start = vertex * FLOATS_PER_VERTEX + POSITION_COMPONENTS;
		Vector3::from_slice(&self.attributes[start..start + COLOR_COMPONENTS])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scene_has_three_triangles() {
		let scene = Triangle::scene();
		assert_eq!(scene.len(), 3);
		assert!(scene.iter().all(|t| t.vertex_count() == 3));
	}

	#[test]
	fn scene_order() {
		let scene = Triangle::scene();
		assert_eq!(scene[0], Triangle::blue());
		assert_eq!(scene[1], Triangle::green());
		assert_eq!(scene[2], Triangle::red());
	}

	#[test]
	fn colors_are_uniform_per_triangle() {
		let expected = [
			Vector3::new(0.0, 0.0, 0.9),
			Vector3::new(0.0, 0.9, 0.0),
			Vector3::new(1.0, 0.1, 0.1)
		];

		for (triangle, color) in Triangle::scene().iter().zip(expected.iter()) {
			for v in 0..triangle.vertex_count() {
				assert_eq!(triangle.color(v), *color);
			}
		}
	}

	#[test]
	fn position() {
		let t = Triangle::green();
		assert_eq!(t.position(0), Vector3::new(-0.5, -0.5, -0.5));
		assert_eq!(t.position(1), Vector3::new(0.5, -0.5, 0.0));
		assert_eq!(t.position(2), Vector3::new(-0.5, 0.5, 0.0));
	}

	#[test]
	fn attributes_match_source() {
		assert_eq!(Triangle::red().attributes(), &RED_TRIANGLE);
		assert_eq!(Triangle::new(BLUE_TRIANGLE).attributes().len(), FLOATS_PER_TRIANGLE);
	}

	#[test]
	#[should_panic]
	fn position_out_of_range_panics() {
		Triangle::blue().position(3);
	}
}
