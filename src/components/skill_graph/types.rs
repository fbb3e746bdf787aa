/// Declarative description of one skill, as written in page data.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillNodeSpec {
	/// Unique identity, also the label.
	pub id: String,
	/// Core skills are drawn emphasised.
	pub core: bool,
}

impl SkillNodeSpec {
	/// A regular skill.
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			core: false,
		}
	}

	/// A core skill.
	pub fn core(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			core: true,
		}
	}
}

/// Spring between two skills, by identity. Endpoint order has no effect.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillLinkSpec {
	/// Identity of one endpoint.
	pub source: String,
	/// Identity of the other endpoint.
	pub target: String,
}

impl SkillLinkSpec {
	/// Links `source` to `target`.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}
}

/// Everything a skill graph draws.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Skills in declaration order.
	pub nodes: Vec<SkillNodeSpec>,
	/// Springs; links naming unknown skills are ignored.
	pub links: Vec<SkillLinkSpec>,
}
