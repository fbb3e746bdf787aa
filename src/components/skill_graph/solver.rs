use log::trace;

use super::config::SimulationConfig;
use super::model::{GraphModel, Node};

/// Live container size, re-queried every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

impl Bounds {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}
}

/// Keeps `value` in `[half, extent - half]`. A container too small for the
/// node pins it to the middle of the axis.
pub fn clamp_axis(value: f64, half: f64, extent: f64) -> f64 {
	if extent <= 2.0 * half {
		return extent / 2.0;
	}
	value.clamp(half, extent - half)
}

pub fn clamp_to_bounds(node: &mut Node, bounds: Bounds) {
	let (hw, hh) = node.half_extent();
	node.x = clamp_axis(node.x, hw, bounds.width);
	node.y = clamp_axis(node.y, hh, bounds.height);
}

/// Explicit Euler force solver. Forces for a tick are accumulated from one
/// snapshot of positions before any node moves.
#[derive(Debug, Default)]
pub struct Solver {
	deltas: Vec<(f64, f64)>,
}

impl Solver {
	pub fn step(&mut self, model: &mut GraphModel, config: &SimulationConfig, bounds: Bounds) {
		let nodes = model.nodes();
		self.deltas.clear();
		self.deltas.resize(nodes.len(), (0.0, 0.0));

		accumulate_repulsion(nodes, config, &mut self.deltas);
		accumulate_centering(nodes, config, bounds, &mut self.deltas);
		accumulate_springs(model, config, &mut self.deltas);

		for (node, &(dvx, dvy)) in model.nodes_mut().iter_mut().zip(&self.deltas) {
			if node.dragging {
				node.vx = 0.0;
				node.vy = 0.0;
				continue;
			}
			let max = config.max_velocity;
			node.vx = ((node.vx + dvx) * config.damping).min(max).max(-max);
			node.vy = ((node.vy + dvy) * config.damping).min(max).max(-max);
			node.x += node.vx;
			node.y += node.vy;
			clamp_to_bounds(node, bounds);
		}
	}
}

fn accumulate_repulsion(nodes: &[Node], config: &SimulationConfig, deltas: &mut [(f64, f64)]) {
	for (i, a) in nodes.iter().enumerate() {
		if a.dragging {
			continue;
		}
		for (j, b) in nodes.iter().enumerate() {
			if i == j {
				continue;
			}
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let dist_sq = dx * dx + dy * dy;
			// Coincident nodes have no direction to push along.
			if dist_sq == 0.0 {
				continue;
			}
			let dist = dist_sq.sqrt();
			let force = config.repulsion / dist_sq.max(config.min_distance_sq);
			deltas[i].0 += dx / dist * force;
			deltas[i].1 += dy / dist * force;
		}
	}
}

fn accumulate_centering(
	nodes: &[Node],
	config: &SimulationConfig,
	bounds: Bounds,
	deltas: &mut [(f64, f64)],
) {
	let (cx, cy) = bounds.center();
	for (node, delta) in nodes.iter().zip(deltas.iter_mut()) {
		if node.dragging {
			continue;
		}
		delta.0 += (cx - node.x) * config.centering;
		delta.1 += (cy - node.y) * config.centering;
	}
}

fn accumulate_springs(model: &GraphModel, config: &SimulationConfig, deltas: &mut [(f64, f64)]) {
	let nodes = model.nodes();
	for link in model.links() {
		let (s, t) = match model.resolve(link) {
			Ok(pair) => pair,
			Err(err) => {
				trace!("skill graph: spring {} -> {} skipped: {}", link.source, link.target, err);
				continue;
			}
		};
		let (a, b) = (&nodes[s], &nodes[t]);
		let (dx, dy) = (b.x - a.x, b.y - a.y);
		let mut dist = (dx * dx + dy * dy).sqrt();
		if dist == 0.0 {
			dist = 1.0;
		}
		// Each endpoint takes half of the spring force.
		let force = (dist - config.rest_length) * config.stiffness * 0.5;
		let (fx, fy) = (dx / dist * force, dy / dist * force);
		if !a.dragging {
			deltas[s].0 += fx;
			deltas[s].1 += fy;
		}
		if !b.dragging {
			deltas[t].0 -= fx;
			deltas[t].1 -= fy;
		}
	}
}

#[cfg(test)]
mod tests {
	use approx::assert_abs_diff_eq;

	use super::*;
	use crate::components::skill_graph::model::fixtures::placed;

	fn springs_only() -> SimulationConfig {
		SimulationConfig {
			repulsion: 0.0,
			stiffness: 0.05,
			damping: 0.75,
			rest_length: 100.0,
			min_distance_sq: 100.0,
			max_velocity: 1000.0,
			centering: 0.0,
		}
	}

	fn distance(model: &GraphModel) -> f64 {
		let (a, b) = (&model.nodes()[0], &model.nodes()[1]);
		((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
	}

	#[test]
	fn one_tick_of_a_stretched_spring() {
		let mut model = placed(&[("A", 100.0, 200.0), ("B", 300.0, 200.0)], &[("A", "B")], 0.0);
		let mut solver = Solver::default();
		solver.step(&mut model, &springs_only(), Bounds::new(1000.0, 1000.0));

		let (a, b) = (&model.nodes()[0], &model.nodes()[1]);
		assert_abs_diff_eq!(a.vx, 1.875, epsilon = 1e-12);
		assert_abs_diff_eq!(b.vx, -1.875, epsilon = 1e-12);
		assert_abs_diff_eq!(a.x, 101.875, epsilon = 1e-12);
		assert_abs_diff_eq!(b.x, 298.125, epsilon = 1e-12);
		assert_abs_diff_eq!(distance(&model), 196.25, epsilon = 1e-12);
		assert_eq!((a.y, b.y), (200.0, 200.0));
	}

	#[test]
	fn linked_pair_settles_at_rest_length() {
		let mut model = placed(&[("A", 300.0, 500.0), ("B", 700.0, 520.0)], &[("A", "B")], 20.0);
		let mut solver = Solver::default();
		for _ in 0..300 {
			solver.step(&mut model, &springs_only(), Bounds::new(1000.0, 1000.0));
		}

		assert_abs_diff_eq!(distance(&model), 100.0, epsilon = 0.5);
		for node in model.nodes() {
			assert!(node.vx.hypot(node.vy) < 1e-3);
		}
	}

	#[test]
	fn isolated_node_velocity_never_grows() {
		let mut model = placed(&[("A", 500.0, 500.0)], &[], 20.0);
		model.nodes_mut()[0].vx = 6.0;
		model.nodes_mut()[0].vy = -4.0;
		let config = SimulationConfig {
			centering: 0.0,
			..SimulationConfig::normal()
		};
		let mut solver = Solver::default();

		let mut last = f64::INFINITY;
		for _ in 0..50 {
			solver.step(&mut model, &config, Bounds::new(1000.0, 1000.0));
			let node = &model.nodes()[0];
			let speed = node.vx.hypot(node.vy);
			assert!(speed <= last);
			last = speed;
		}
		assert!(last < 1e-4);
	}

	#[test]
	fn close_pair_repels_at_capped_strength_along_unit_vector() {
		let config = SimulationConfig {
			repulsion: 3000.0,
			stiffness: 0.0,
			damping: 1.0,
			rest_length: 0.0,
			min_distance_sq: 100.0,
			max_velocity: 1000.0,
			centering: 0.0,
		};
		let mut model = placed(&[("A", 500.0, 500.0), ("B", 501.0, 500.0)], &[], 0.0);
		Solver::default().step(&mut model, &config, Bounds::new(1000.0, 1000.0));

		let (a, b) = (&model.nodes()[0], &model.nodes()[1]);
		assert_abs_diff_eq!(a.vx, -30.0, epsilon = 1e-12);
		assert_abs_diff_eq!(b.vx, 30.0, epsilon = 1e-12);
		assert_eq!((a.vy, b.vy), (0.0, 0.0));
	}

	#[test]
	fn dragged_node_is_not_moved() {
		let mut model = placed(
			&[("A", 250.0, 250.0), ("B", 260.0, 250.0), ("C", 400.0, 100.0)],
			&[("A", "B"), ("A", "C")],
			30.0,
		);
		model.nodes_mut()[0].dragging = true;
		model.nodes_mut()[0].vx = 3.0;
		let mut solver = Solver::default();
		for _ in 0..20 {
			solver.step(&mut model, &SimulationConfig::normal(), Bounds::new(500.0, 500.0));
		}

		let a = &model.nodes()[0];
		assert_eq!((a.x, a.y), (250.0, 250.0));
		assert_eq!((a.vx, a.vy), (0.0, 0.0));
	}

	#[test]
	fn dragged_node_still_repels_and_pulls_others() {
		let config = SimulationConfig {
			centering: 0.0,
			..SimulationConfig::normal()
		};
		let mut model = placed(&[("A", 200.0, 200.0), ("B", 220.0, 200.0)], &[], 10.0);
		model.nodes_mut()[0].dragging = true;
		Solver::default().step(&mut model, &config, Bounds::new(1000.0, 1000.0));
		assert!(model.nodes()[1].x > 220.0);

		let mut model = placed(&[("A", 200.0, 200.0), ("B", 800.0, 200.0)], &[("A", "B")], 10.0);
		model.nodes_mut()[0].dragging = true;
		Solver::default().step(&mut model, &springs_only(), Bounds::new(1000.0, 1000.0));
		assert_eq!(model.nodes()[0].x, 200.0);
		assert!(model.nodes()[1].x < 800.0);
	}

	#[test]
	fn missing_endpoint_skips_only_that_link() {
		let nodes = [("A", 100.0, 100.0), ("B", 300.0, 150.0), ("C", 200.0, 400.0)];
		let mut with_ghost = placed(&nodes, &[("A", "B"), ("C", "ghost"), ("ghost", "A")], 24.0);
		let mut clean = placed(&nodes, &[("A", "B")], 24.0);
		let mut solver = Solver::default();

		let config = SimulationConfig::normal();
		let bounds = Bounds::new(600.0, 600.0);
		solver.step(&mut with_ghost, &config, bounds);
		solver.step(&mut clean, &config, bounds);

		assert_eq!(with_ghost.nodes(), clean.nodes());
	}

	#[test]
	fn positions_stay_inside_bounds() {
		let nodes: Vec<(String, f64, f64)> = (0..12)
			.map(|i| (format!("n{i}"), 5.0 + i as f64, 395.0 - i as f64 * 0.5))
			.collect();
		let refs: Vec<(&str, f64, f64)> = nodes.iter().map(|(id, x, y)| (id.as_str(), *x, *y)).collect();
		let mut model = placed(&refs, &[("n0", "n1"), ("n1", "n2"), ("n3", "n11")], 40.0);
		let mut solver = Solver::default();
		let bounds = Bounds::new(300.0, 400.0);

		for _ in 0..200 {
			solver.step(&mut model, &SimulationConfig::normal(), bounds);
			for node in model.nodes() {
				assert!((20.0..=280.0).contains(&node.x), "x = {}", node.x);
				assert!((20.0..=380.0).contains(&node.y), "y = {}", node.y);
			}
		}
	}

	#[test]
	fn wall_contact_keeps_velocity() {
		let config = SimulationConfig {
			repulsion: 0.0,
			centering: 0.0,
			..SimulationConfig::normal()
		};
		let mut model = placed(&[("A", 11.0, 50.0)], &[], 20.0);
		model.nodes_mut()[0].vx = -4.0;
		Solver::default().step(&mut model, &config, Bounds::new(100.0, 100.0));

		let a = &model.nodes()[0];
		assert_eq!(a.x, 10.0);
		assert_abs_diff_eq!(a.vx, -3.0, epsilon = 1e-12);
	}

	#[test]
	fn coincident_nodes_and_self_links_stay_finite() {
		let mut model = placed(
			&[("A", 50.0, 50.0), ("B", 50.0, 50.0)],
			&[("A", "B"), ("A", "A"), ("A", "B")],
			10.0,
		);
		Solver::default().step(&mut model, &SimulationConfig::normal(), Bounds::new(100.0, 100.0));
		for node in model.nodes() {
			assert!(node.x.is_finite() && node.y.is_finite());
			assert!(node.vx.is_finite() && node.vy.is_finite());
		}
	}

	#[test]
	fn clamp_axis_handles_tiny_containers() {
		assert_eq!(clamp_axis(-5.0, 10.0, 100.0), 10.0);
		assert_eq!(clamp_axis(95.0, 10.0, 100.0), 90.0);
		assert_eq!(clamp_axis(42.0, 10.0, 100.0), 42.0);
		assert_eq!(clamp_axis(42.0, 10.0, 15.0), 7.5);
		assert_eq!(clamp_axis(42.0, 10.0, 0.0), 0.0);
	}
}
