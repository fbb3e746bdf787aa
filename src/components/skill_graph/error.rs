use thiserror::Error;

/// Failures surfaced while building or mounting a skill graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
	/// A link or lookup named a node that was never declared.
	#[error("no node with identity `{0}`")]
	NodeNotFound(String),
	/// No element with the requested id.
	#[error("mount point `{0}` does not exist")]
	ContainerMissing(String),
	/// The host refused to create or attach an element.
	#[error("visual surface failure: {0}")]
	Surface(String),
}

impl From<wasm_bindgen::JsValue> for GraphError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		GraphError::Surface(format!("{value:?}"))
	}
}
