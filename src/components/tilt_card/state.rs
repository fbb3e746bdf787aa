const HOVER_SCALE: f64 = 1.02;

/// 3D rotation applied to a card, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
	pub rotate_x: f64,
	pub rotate_y: f64,
	pub scale: f64,
}

impl Tilt {
	pub const REST: Tilt = Tilt {
		rotate_x: 0.0,
		rotate_y: 0.0,
		scale: 1.0,
	};

	/// Tilt for a pointer at `(x, y)` inside a `width` x `height` box. The top
	/// edge leans away and the right edge leans in, up to `max_deg`.
	pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, max_deg: f64) -> Self {
		if width <= 0.0 || height <= 0.0 {
			return Self::REST;
		}
		let (cx, cy) = (width / 2.0, height / 2.0);
		let max_deg = max_deg.abs();
		Self {
			rotate_x: (-(y - cy) / cy * max_deg).clamp(-max_deg, max_deg),
			rotate_y: ((x - cx) / cx * max_deg).clamp(-max_deg, max_deg),
			scale: HOVER_SCALE,
		}
	}

	pub fn css(&self) -> String {
		format!(
			"perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s})",
			self.rotate_x,
			self.rotate_y,
			s = self.scale
		)
	}
}

#[cfg(test)]
mod tests {
	use approx::assert_abs_diff_eq;

	use super::*;

	#[test]
	fn center_is_flat() {
		let tilt = Tilt::from_pointer(100.0, 50.0, 200.0, 100.0, 10.0);
		assert_abs_diff_eq!(tilt.rotate_x, 0.0);
		assert_abs_diff_eq!(tilt.rotate_y, 0.0);
		assert_eq!(tilt.scale, HOVER_SCALE);
	}

	#[test]
	fn corners_reach_max_tilt() {
		let top_left = Tilt::from_pointer(0.0, 0.0, 200.0, 100.0, 10.0);
		assert_abs_diff_eq!(top_left.rotate_x, 10.0);
		assert_abs_diff_eq!(top_left.rotate_y, -10.0);

		let bottom_right = Tilt::from_pointer(200.0, 100.0, 200.0, 100.0, 10.0);
		assert_abs_diff_eq!(bottom_right.rotate_x, -10.0);
		assert_abs_diff_eq!(bottom_right.rotate_y, 10.0);
	}

	#[test]
	fn pointer_outside_box_is_clamped() {
		let tilt = Tilt::from_pointer(-500.0, 900.0, 200.0, 100.0, 8.0);
		assert_abs_diff_eq!(tilt.rotate_x, -8.0);
		assert_abs_diff_eq!(tilt.rotate_y, -8.0);
	}

	#[test]
	fn empty_box_rests() {
		assert_eq!(Tilt::from_pointer(3.0, 4.0, 0.0, 100.0, 10.0), Tilt::REST);
	}

	#[test]
	fn css_transform() {
		assert_eq!(
			Tilt::REST.css(),
			"perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) scale3d(1, 1, 1)"
		);
		let tilt = Tilt::from_pointer(150.0, 25.0, 200.0, 100.0, 10.0);
		assert_eq!(
			tilt.css(),
			"perspective(1000px) rotateX(5.00deg) rotateY(5.00deg) scale3d(1.02, 1.02, 1.02)"
		);
	}
}
