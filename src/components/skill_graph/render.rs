use log::trace;

use super::error::GraphError;
use super::interaction::DragPhase;
use super::model::{GraphModel, Link, Node};
use super::solver::Bounds;

/// On-screen shape owned by exactly one node. Anchored at its top-left corner.
pub trait NodeHandle {
	fn place(&self, left: f64, top: f64);
	fn set_dragging(&self, dragging: bool);
	/// Current rendered (width, height).
	fn extent(&self) -> (f64, f64);
	fn remove(&self);
}

/// Line-shaped handle owned by exactly one link.
pub trait LineHandle {
	fn set_endpoints(&self, from: (f64, f64), to: (f64, f64));
	fn remove(&self);
}

/// The container that hosts the node shapes and the line overlay.
pub trait Surface {
	type Node: NodeHandle;
	type Line: LineHandle;

	/// Live container size, or `None` once the container is gone.
	fn size(&self) -> Option<(f64, f64)>;
	fn create_node(&self, index: usize, node: &Node) -> Result<Self::Node, GraphError>;
	fn create_line(&self, link: &Link) -> Result<Self::Line, GraphError>;
	/// Tears down anything the surface itself added to the container.
	fn detach(&self) {}
}

/// Projects simulation state onto one handle per node and one per link,
/// index-aligned with the model.
pub struct Renderer<S: Surface> {
	surface: S,
	nodes: Vec<S::Node>,
	lines: Vec<S::Line>,
}

impl<S: Surface> Renderer<S> {
	pub fn new(surface: S, model: &GraphModel) -> Result<Self, GraphError> {
		let mut renderer = Self {
			surface,
			nodes: Vec::with_capacity(model.nodes().len()),
			lines: Vec::with_capacity(model.links().len()),
		};
		if let Err(err) = renderer.populate(model) {
			renderer.clear();
			return Err(err);
		}
		Ok(renderer)
	}

	fn populate(&mut self, model: &GraphModel) -> Result<(), GraphError> {
		for link in model.links() {
			self.lines.push(self.surface.create_line(link)?);
		}
		for (idx, node) in model.nodes().iter().enumerate() {
			self.nodes.push(self.surface.create_node(idx, node)?);
		}
		Ok(())
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn bounds(&self) -> Option<Bounds> {
		self.surface.size().map(|(w, h)| Bounds::new(w, h))
	}

	/// Copies each handle's rendered size into its node.
	pub fn measure(&self, model: &mut GraphModel) {
		for (node, handle) in model.nodes_mut().iter_mut().zip(&self.nodes) {
			node.extent = handle.extent();
		}
	}

	pub fn project(&self, model: &GraphModel) {
		let nodes = model.nodes();
		for (node, handle) in nodes.iter().zip(&self.nodes) {
			let (hw, hh) = node.half_extent();
			handle.place(node.x - hw, node.y - hh);
			handle.set_dragging(node.drag_phase() == DragPhase::Dragging);
		}
		for (link, line) in model.links().iter().zip(&self.lines) {
			match model.resolve(link) {
				Ok((s, t)) => line.set_endpoints((nodes[s].x, nodes[s].y), (nodes[t].x, nodes[t].y)),
				Err(err) => trace!("skill graph: line {} -> {} left as is: {}", link.source, link.target, err),
			}
		}
	}

	/// Removes every handle. The renderer draws nothing afterwards.
	pub fn clear(&mut self) {
		for handle in self.nodes.drain(..) {
			handle.remove();
		}
		for line in self.lines.drain(..) {
			line.remove();
		}
		self.surface.detach();
	}
}

#[cfg(test)]
pub(crate) mod fake {
	use std::cell::{Cell, RefCell};
	use std::rc::Rc;

	use super::*;

	pub(crate) type Point = (f64, f64);

	#[derive(Clone, Default)]
	pub(crate) struct Record {
		pub placed: Rc<Cell<Option<Point>>>,
		pub dragging: Rc<Cell<bool>>,
		pub endpoints: Rc<Cell<Option<(Point, Point)>>>,
		pub removed: Rc<Cell<bool>>,
	}

	/// In-memory surface; shares its records with the test through `Rc`s.
	#[derive(Clone)]
	pub(crate) struct FakeSurface {
		pub size: Rc<Cell<Option<Point>>>,
		pub node_extent: Point,
		pub nodes: Rc<RefCell<Vec<Record>>>,
		pub lines: Rc<RefCell<Vec<Record>>>,
		pub detached: Rc<Cell<bool>>,
		/// Fail when asked to create the node with this index.
		pub fail_node: Option<usize>,
	}

	impl FakeSurface {
		pub(crate) fn new(width: f64, height: f64, node_extent: Point) -> Self {
			Self {
				size: Rc::new(Cell::new(Some((width, height)))),
				node_extent,
				nodes: Rc::default(),
				lines: Rc::default(),
				detached: Rc::default(),
				fail_node: None,
			}
		}

		pub(crate) fn node(&self, idx: usize) -> Record {
			self.nodes.borrow()[idx].clone()
		}

		pub(crate) fn line(&self, idx: usize) -> Record {
			self.lines.borrow()[idx].clone()
		}
	}

	pub(crate) struct FakeNode {
		record: Record,
		extent: Point,
	}

	impl NodeHandle for FakeNode {
		fn place(&self, left: f64, top: f64) {
			self.record.placed.set(Some((left, top)));
		}

		fn set_dragging(&self, dragging: bool) {
			self.record.dragging.set(dragging);
		}

		fn extent(&self) -> Point {
			self.extent
		}

		fn remove(&self) {
			self.record.removed.set(true);
		}
	}

	pub(crate) struct FakeLine(Record);

	impl LineHandle for FakeLine {
		fn set_endpoints(&self, from: Point, to: Point) {
			self.0.endpoints.set(Some((from, to)));
		}

		fn remove(&self) {
			self.0.removed.set(true);
		}
	}

	impl Surface for FakeSurface {
		type Node = FakeNode;
		type Line = FakeLine;

		fn size(&self) -> Option<Point> {
			self.size.get()
		}

		fn create_node(&self, index: usize, _node: &Node) -> Result<FakeNode, GraphError> {
			if self.fail_node == Some(index) {
				return Err(GraphError::Surface("node refused".into()));
			}
			let record = Record::default();
			self.nodes.borrow_mut().push(record.clone());
			Ok(FakeNode {
				record,
				extent: self.node_extent,
			})
		}

		fn create_line(&self, _link: &Link) -> Result<FakeLine, GraphError> {
			let record = Record::default();
			self.lines.borrow_mut().push(record.clone());
			Ok(FakeLine(record))
		}

		fn detach(&self) {
			self.detached.set(true);
		}
	}
}
