use leptos::prelude::*;
use log::error;

use super::config::SimulationConfig;
use super::dom::{MountedGraph, viewport_config};
use super::types::GraphData;

/// Force-directed graph of draggable skill nodes.
///
/// The graph is mounted into its own `<div>` once it is in the document and is
/// torn down on cleanup or when `data` changes. Without `config` the preset is
/// chosen from the window width.
#[component]
pub fn SkillGraph(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = "skill-graph")] id: &'static str,
	#[prop(optional)] config: Option<SimulationConfig>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let mounted = StoredValue::new_local(None::<MountedGraph>);

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		let data = data.get();
		mounted.update_value(|graph| {
			graph.take();
		});
		let config = config.clone().unwrap_or_else(viewport_config);
		match MountedGraph::mount(container.into(), &data, config) {
			Ok(graph) => mounted.set_value(Some(graph)),
			Err(err) => error!("skill graph disabled: {err}"),
		}
	});

	on_cleanup(move || {
		let _ = mounted.try_update_value(|graph| {
			graph.take();
		});
	});

	view! { <div node_ref=container_ref id=id class="skill-graph" /> }
}
