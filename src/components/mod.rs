use rand::SeedableRng;
use rand::rngs::SmallRng;

pub mod frame_loop;
pub mod scramble_text;
pub mod skill_graph;
pub mod tilt_card;

/// Non-deterministic generator seeded from the browser's `Math.random`.
pub(crate) fn entropy_rng() -> SmallRng {
	SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}
