pub mod triangle;
pub use triangle::Triangle;

use std::mem::size_of;

pub const POSITION_COMPONENTS: usize = 3;
pub const COLOR_COMPONENTS: usize = 3;
pub const FLOATS_PER_VERTEX: usize = POSITION_COMPONENTS + COLOR_COMPONENTS;
pub const VERTICES_PER_TRIANGLE: usize = 3;
pub const FLOATS_PER_TRIANGLE: usize = FLOATS_PER_VERTEX * VERTICES_PER_TRIANGLE;

/// Byte distance between consecutive vertices.
pub const VERTEX_STRIDE: usize = FLOATS_PER_VERTEX * size_of::<f32>();
pub const POSITION_OFFSET: usize = 0;
pub const COLOR_OFFSET: usize = POSITION_COMPONENTS * size_of::<f32>();

pub const POSITION_LOCATION: u32 = 0;
pub const COLOR_LOCATION: u32 = 1;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn layout() {
		assert_eq!(FLOATS_PER_VERTEX, 6);
		assert_eq!(FLOATS_PER_TRIANGLE, 18);
		assert_eq!(VERTEX_STRIDE, 24);
		assert_eq!(POSITION_OFFSET, 0);
		assert_eq!(COLOR_OFFSET, 12);
	}
}
