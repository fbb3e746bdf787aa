use rand::Rng;

use super::config::SimulationConfig;
use super::error::GraphError;
use super::interaction::{Disposition, PointerInput, PointerPhase, dispatch};
use super::model::GraphModel;
use super::render::{Renderer, Surface};
use super::solver::{Bounds, Solver, clamp_to_bounds};
use super::types::GraphData;

/// A skill graph bound to a surface: model, physics and handles in one place.
pub struct Simulation<S: Surface> {
	model: GraphModel,
	config: SimulationConfig,
	solver: Solver,
	renderer: Renderer<S>,
}

impl<S: Surface> Simulation<S> {
	pub fn new<R: Rng + ?Sized>(
		surface: S,
		data: &GraphData,
		config: SimulationConfig,
		rng: &mut R,
	) -> Result<Self, GraphError> {
		let (width, height) = surface.size().unwrap_or((0.0, 0.0));
		let mut model = GraphModel::new(data, width, height, rng);
		let renderer = Renderer::new(surface, &model)?;

		renderer.measure(&mut model);
		if let Some(bounds) = renderer.bounds() {
			for node in model.nodes_mut() {
				clamp_to_bounds(node, bounds);
			}
			renderer.project(&model);
		}

		Ok(Self {
			model,
			config,
			solver: Solver::default(),
			renderer,
		})
	}

	/// Advances physics by one step and redraws. Returns `false` when the
	/// container is gone and the tick was skipped.
	pub fn tick(&mut self) -> bool {
		let Some(bounds) = self.renderer.bounds() else {
			return false;
		};
		self.renderer.measure(&mut self.model);
		self.solver.step(&mut self.model, &self.config, bounds);
		self.renderer.project(&self.model);
		true
	}

	pub fn handle_pointer(&mut self, input: PointerInput) -> Disposition {
		match (self.renderer.bounds(), input.phase) {
			(Some(bounds), _) => dispatch(&mut self.model, bounds, input),
			(None, PointerPhase::Start | PointerPhase::Move) => Disposition::Passthrough,
			(None, _) => dispatch(&mut self.model, Bounds::new(0.0, 0.0), input),
		}
	}

	pub fn model(&self) -> &GraphModel {
		&self.model
	}

	pub fn surface(&self) -> &S {
		self.renderer.surface()
	}

	/// Removes every visual handle from the surface.
	pub fn dispose(&mut self) {
		self.renderer.clear();
	}
}
