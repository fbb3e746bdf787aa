/// Viewports narrower than this get the compact preset.
pub const COMPACT_BREAKPOINT: f64 = 768.0;

/// Physics constants for one simulation. Fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
	/// Numerator of the inverse-square repulsion between every pair of nodes.
	pub repulsion: f64,
	/// Spring constant applied to the displacement from `rest_length`.
	pub stiffness: f64,
	/// Velocity multiplier applied once per tick, expected in `(0, 1)`.
	pub damping: f64,
	pub rest_length: f64,
	/// Lower bound on squared distance in the repulsion term.
	pub min_distance_sq: f64,
	/// Per-axis velocity cap.
	pub max_velocity: f64,
	/// Pull toward the container center, proportional to the offset.
	pub centering: f64,
}

impl SimulationConfig {
	pub fn normal() -> Self {
		Self {
			repulsion: 3000.0,
			stiffness: 0.05,
			damping: 0.75,
			rest_length: 120.0,
			min_distance_sq: 100.0,
			max_velocity: 8.0,
			centering: 0.002,
		}
	}

	pub fn compact() -> Self {
		Self {
			repulsion: 1500.0,
			rest_length: 80.0,
			..Self::normal()
		}
	}

	pub fn for_viewport_width(width: f64) -> Self {
		if width < COMPACT_BREAKPOINT {
			Self::compact()
		} else {
			Self::normal()
		}
	}
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self::normal()
	}
}
