use super::model::{GraphModel, Node};
use super::solver::{Bounds, clamp_to_bounds};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
	Start,
	Move,
	End,
	Cancel,
	/// Pointer left the tracked surface.
	Leave,
}

/// One pointer or touch event, already translated to container-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
	pub phase: PointerPhase,
	/// Node whose handle received the event, if any.
	pub node: Option<usize>,
	pub x: f64,
	pub y: f64,
}

impl PointerInput {
	pub fn on_node(phase: PointerPhase, node: usize, x: f64, y: f64) -> Self {
		Self {
			phase,
			node: Some(node),
			x,
			y,
		}
	}

	pub fn global(phase: PointerPhase, x: f64, y: f64) -> Self {
		Self {
			phase,
			node: None,
			x,
			y,
		}
	}
}

/// Whether the host should suppress its default handling of the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
	PreventDefault,
	Passthrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
	Idle,
	Dragging,
}

impl Node {
	pub fn drag_phase(&self) -> DragPhase {
		if self.dragging {
			DragPhase::Dragging
		} else {
			DragPhase::Idle
		}
	}
}

pub fn dispatch(model: &mut GraphModel, bounds: Bounds, input: PointerInput) -> Disposition {
	match (input.phase, input.node) {
		(PointerPhase::Start, Some(idx)) => press(model, idx),
		(PointerPhase::Start, None) => Disposition::Passthrough,
		(PointerPhase::Move, _) => drag_to(model, bounds, input.x, input.y),
		(PointerPhase::End | PointerPhase::Cancel | PointerPhase::Leave, _) => {
			release(model);
			Disposition::Passthrough
		}
	}
}

/// At most one node is dragged at a time: a new press takes over from a
/// drag whose release was never seen, so a move never targets two nodes.
fn press(model: &mut GraphModel, idx: usize) -> Disposition {
	if idx >= model.nodes().len() {
		return Disposition::Passthrough;
	}
	release(model);
	let node = &mut model.nodes_mut()[idx];
	node.dragging = true;
	node.vx = 0.0;
	node.vy = 0.0;
	Disposition::PreventDefault
}

fn drag_to(model: &mut GraphModel, bounds: Bounds, x: f64, y: f64) -> Disposition {
	let mut any = false;
	for node in model.nodes_mut().iter_mut().filter(|n| n.dragging) {
		node.x = x;
		node.y = y;
		node.vx = 0.0;
		node.vy = 0.0;
		clamp_to_bounds(node, bounds);
		any = true;
	}
	if any {
		Disposition::PreventDefault
	} else {
		Disposition::Passthrough
	}
}

fn release(model: &mut GraphModel) {
	for node in model.nodes_mut().iter_mut() {
		node.dragging = false;
	}
}
