use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{
	AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, MouseEvent,
	TouchEvent,
};

use super::config::{COMPACT_BREAKPOINT, SimulationConfig};
use super::error::GraphError;
use super::interaction::{Disposition, PointerInput, PointerPhase};
use super::model::{Link, Node};
use super::render::{LineHandle, NodeHandle, Surface};
use super::simulation::Simulation;
use super::types::GraphData;
use crate::components::entropy_rng;
use crate::components::frame_loop::FrameLoop;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const NODE_SELECTOR: &str = ".skill-node";

/// Absolutely positioned `<div>` per node plus an SVG overlay of `<line>`s.
pub struct DomSurface {
	document: Document,
	container: HtmlElement,
	overlay: Element,
}

impl DomSurface {
	pub fn attach(container: HtmlElement) -> Result<Self, GraphError> {
		let document = container
			.owner_document()
			.ok_or_else(|| GraphError::Surface("container is not in a document".into()))?;
		let overlay = document.create_element_ns(Some(SVG_NS), "svg")?;
		overlay.set_attribute("class", "skill-graph-links")?;
		overlay.set_attribute("width", "100%")?;
		overlay.set_attribute("height", "100%")?;
		container.append_child(&overlay)?;
		Ok(Self {
			document,
			container,
			overlay,
		})
	}

	/// Viewport client coordinates to container-local coordinates.
	pub fn to_local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
		let rect = self.container.get_bounding_client_rect();
		(client_x - rect.left(), client_y - rect.top())
	}
}

pub struct DomNode {
	el: HtmlElement,
}

impl NodeHandle for DomNode {
	fn place(&self, left: f64, top: f64) {
		let style = self.el.style();
		let _ = style.set_property("left", &format!("{left}px"));
		let _ = style.set_property("top", &format!("{top}px"));
	}

	fn set_dragging(&self, dragging: bool) {
		let _ = self.el.class_list().toggle_with_force("dragging", dragging);
	}

	fn extent(&self) -> (f64, f64) {
		(self.el.offset_width() as f64, self.el.offset_height() as f64)
	}

	fn remove(&self) {
		self.el.remove();
	}
}

pub struct DomLine {
	el: Element,
}

impl LineHandle for DomLine {
	fn set_endpoints(&self, from: (f64, f64), to: (f64, f64)) {
		for (name, value) in [("x1", from.0), ("y1", from.1), ("x2", to.0), ("y2", to.1)] {
			let _ = self.el.set_attribute(name, &value.to_string());
		}
	}

	fn remove(&self) {
		self.el.remove();
	}
}

impl Surface for DomSurface {
	type Node = DomNode;
	type Line = DomLine;

	fn size(&self) -> Option<(f64, f64)> {
		if !self.container.is_connected() {
			return None;
		}
		Some((
			self.container.client_width() as f64,
			self.container.client_height() as f64,
		))
	}

	fn create_node(&self, _index: usize, node: &Node) -> Result<DomNode, GraphError> {
		let el: HtmlElement = self
			.document
			.create_element("div")?
			.dyn_into()
			.map_err(|_| GraphError::Surface("div is not an HtmlElement".into()))?;
		el.set_class_name(if node.core {
			"skill-node core"
		} else {
			"skill-node"
		});
		el.set_attribute("data-id", &node.id)?;
		el.set_text_content(Some(&node.id));
		self.container.append_child(&el)?;
		Ok(DomNode { el })
	}

	fn create_line(&self, link: &Link) -> Result<DomLine, GraphError> {
		let el = self.document.create_element_ns(Some(SVG_NS), "line")?;
		el.set_attribute("class", "skill-link")?;
		el.set_attribute("data-link", &format!("{}->{}", link.source, link.target))?;
		self.overlay.append_child(&el)?;
		Ok(DomLine { el })
	}

	fn detach(&self) {
		self.overlay.remove();
	}
}

/// Event listener that unregisters itself on drop.
struct Listener {
	target: EventTarget,
	kind: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
	fn attach(
		target: &EventTarget,
		kind: &'static str,
		passive: bool,
		handler: impl FnMut(Event) + 'static,
	) -> Result<Self, GraphError> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		let options = AddEventListenerOptions::new();
		options.set_passive(passive);
		target.add_event_listener_with_callback_and_add_event_listener_options(
			kind,
			callback.as_ref().unchecked_ref(),
			&options,
		)?;
		Ok(Self {
			target: target.clone(),
			kind,
			callback,
		})
	}
}

impl Drop for Listener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
	}
}

fn client_point(event: &Event) -> Option<(f64, f64)> {
	if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
		return Some((mouse.client_x() as f64, mouse.client_y() as f64));
	}
	let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
	Some((touch.client_x() as f64, touch.client_y() as f64))
}

/// Identity of the node whose handle is (or contains) the event target.
fn node_identity(event: &Event) -> Option<String> {
	let target = event.target()?.dyn_into::<Element>().ok()?;
	let node = target.closest(NODE_SELECTOR).ok()??;
	node.get_attribute("data-id")
}

type SharedSimulation = Rc<RefCell<Simulation<DomSurface>>>;

fn route(sim: SharedSimulation, phase: PointerPhase) -> impl FnMut(Event) + 'static {
	move |event: Event| {
		let Ok(mut sim) = sim.try_borrow_mut() else {
			return;
		};
		let node = match phase {
			PointerPhase::Start => {
				match node_identity(&event).map(|id| sim.model().index_of(&id)) {
					Some(Ok(idx)) => Some(idx),
					_ => return,
				}
			}
			_ => None,
		};
		let (x, y) = client_point(&event)
			.map(|(cx, cy)| sim.surface().to_local(cx, cy))
			.unwrap_or_default();
		let input = match node {
			Some(idx) => PointerInput::on_node(phase, idx, x, y),
			None => PointerInput::global(phase, x, y),
		};
		if sim.handle_pointer(input) == Disposition::PreventDefault {
			event.prevent_default();
		}
	}
}

/// A skill graph live in the page: simulation, frame loop and input listeners.
/// Dropping it tears everything down.
pub struct MountedGraph {
	sim: SharedSimulation,
	frames: Option<FrameLoop>,
	listeners: Vec<Listener>,
}

impl MountedGraph {
	/// Renders `data` into `container`, binds pointer input and starts the frame loop.
	pub fn mount(
		container: HtmlElement,
		data: &GraphData,
		config: SimulationConfig,
	) -> Result<Self, GraphError> {
		let surface = DomSurface::attach(container.clone())?;
		let sim = Simulation::new(surface, data, config, &mut entropy_rng())?;
		let mut graph = Self {
			sim: Rc::new(RefCell::new(sim)),
			frames: None,
			listeners: Vec::new(),
		};

		graph.bind_input(&container)?;
		let sim = graph.sim.clone();
		graph.frames = Some(FrameLoop::start(move || {
			if let Ok(mut sim) = sim.try_borrow_mut() {
				sim.tick();
			}
		})?);

		info!(
			"skill graph mounted: {} nodes, {} links",
			data.nodes.len(),
			data.links.len()
		);
		Ok(graph)
	}

	fn bind_input(&mut self, container: &HtmlElement) -> Result<(), GraphError> {
		let window: EventTarget = web_sys::window()
			.ok_or_else(|| GraphError::Surface("no window".into()))?
			.into();
		let surface: &EventTarget = container.as_ref();

		let table = [
			(surface, "mousedown", PointerPhase::Start, false),
			(surface, "touchstart", PointerPhase::Start, false),
			(&window, "mousemove", PointerPhase::Move, false),
			(&window, "touchmove", PointerPhase::Move, false),
			(&window, "mouseup", PointerPhase::End, true),
			(&window, "touchend", PointerPhase::End, true),
			(&window, "touchcancel", PointerPhase::Cancel, true),
			(surface, "mouseleave", PointerPhase::Leave, true),
		];
		for (target, kind, phase, passive) in table {
			self.listeners
				.push(Listener::attach(target, kind, passive, route(self.sim.clone(), phase))?);
		}
		Ok(())
	}

	/// Stops the frame loop, removes listeners and every rendered element.
	pub fn dispose(self) {
		drop(self);
	}
}

impl Drop for MountedGraph {
	fn drop(&mut self) {
		if let Some(frames) = self.frames.take() {
			frames.stop();
		}
		self.listeners.clear();
		if let Ok(mut sim) = self.sim.try_borrow_mut() {
			sim.dispose();
		}
		debug!("skill graph disposed");
	}
}

/// Preset picked from the current window width.
pub fn viewport_config() -> SimulationConfig {
	let width = web_sys::window()
		.and_then(|w| w.inner_width().ok())
		.and_then(|w| w.as_f64())
		.unwrap_or(COMPACT_BREAKPOINT);
	SimulationConfig::for_viewport_width(width)
}

/// Mounts a skill graph into the element with the given id.
pub fn mount_by_id(
	id: &str,
	data: &GraphData,
	config: Option<SimulationConfig>,
) -> Result<MountedGraph, GraphError> {
	let container = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		.ok_or_else(|| GraphError::ContainerMissing(id.to_string()))?;
	MountedGraph::mount(container, data, config.unwrap_or_else(viewport_config))
}
