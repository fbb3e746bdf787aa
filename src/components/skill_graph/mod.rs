mod component;
mod config;
mod dom;
mod error;
mod interaction;
mod model;
mod render;
mod simulation;
mod solver;
mod types;

pub use component::SkillGraph;
pub use dom::{MountedGraph, mount_by_id};
pub use error::GraphError;
pub use types::{GraphData, SkillLinkSpec, SkillNodeSpec};
