use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::warn;
use rand::Rng;

use super::error::GraphError;
use super::types::GraphData;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: String,
	pub core: bool,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Set while the interaction controller owns this node's position.
	pub dragging: bool,
	/// Rendered (width, height) of the node's visual handle.
	pub extent: (f64, f64),
}

impl Node {
	fn new(id: String, core: bool, x: f64, y: f64) -> Self {
		Self {
			id,
			core,
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			dragging: false,
			extent: (0.0, 0.0),
		}
	}

	pub fn half_extent(&self) -> (f64, f64) {
		(self.extent.0 / 2.0, self.extent.1 / 2.0)
	}
}

/// Links refer to nodes by identity and are resolved on every use.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default)]
pub struct GraphModel {
	nodes: Vec<Node>,
	links: Vec<Link>,
	index: HashMap<String, usize>,
}

impl GraphModel {
	/// Builds the model with every node at a random point inside `width` x `height`.
	pub fn new<R: Rng + ?Sized>(data: &GraphData, width: f64, height: f64, rng: &mut R) -> Self {
		let mut nodes = Vec::with_capacity(data.nodes.len());
		let mut index = HashMap::with_capacity(data.nodes.len());

		for spec in &data.nodes {
			match index.entry(spec.id.clone()) {
				Entry::Occupied(_) => {
					warn!("skill graph: duplicate node `{}` ignored", spec.id);
					continue;
				}
				Entry::Vacant(slot) => {
					slot.insert(nodes.len());
				}
			}
			let (x, y) = (rng.r#gen::<f64>() * width.max(0.0), rng.r#gen::<f64>() * height.max(0.0));
			nodes.push(Node::new(spec.id.clone(), spec.core, x, y));
		}

		let links = data
			.links
			.iter()
			.map(|l| Link {
				source: l.source.clone(),
				target: l.target.clone(),
			})
			.collect();

		let model = Self {
			nodes,
			links,
			index,
		};
		for (link, err) in model.unresolved_links() {
			warn!(
				"skill graph: link {} -> {} will be skipped: {}",
				link.source, link.target, err
			);
		}
		model
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn nodes_mut(&mut self) -> &mut [Node] {
		&mut self.nodes
	}

	pub fn links(&self) -> &[Link] {
		&self.links
	}

	pub fn index_of(&self, id: &str) -> Result<usize, GraphError> {
		self.index
			.get(id)
			.copied()
			.ok_or_else(|| GraphError::NodeNotFound(id.to_string()))
	}

	/// Resolves both endpoints of `link` to node indices.
	pub fn resolve(&self, link: &Link) -> Result<(usize, usize), GraphError> {
		Ok((self.index_of(&link.source)?, self.index_of(&link.target)?))
	}

	pub fn unresolved_links(&self) -> impl Iterator<Item = (&Link, GraphError)> + '_ {
		self.links
			.iter()
			.filter_map(|link| self.resolve(link).err().map(|err| (link, err)))
	}
}
