use leptos::prelude::*;

use crate::components::scramble_text::ScrambleText;
use crate::components::skill_graph::{GraphData, SkillGraph, SkillLinkSpec, SkillNodeSpec};
use crate::components::tilt_card::TiltCard;

const CORE_SKILLS: &[&str] = &["Rust", "TypeScript", "Linux"];
const SKILLS: &[&str] = &[
	"WebAssembly", "Leptos", "Tokio", "PostgreSQL", "React", "Node.js", "Docker", "Nix",
	"GraphQL", "CI/CD",
];
const LINKS: &[(&str, &str)] = &[
	("Rust", "WebAssembly"),
	("Rust", "Leptos"),
	("Rust", "Tokio"),
	("WebAssembly", "Leptos"),
	("Tokio", "PostgreSQL"),
	("TypeScript", "React"),
	("TypeScript", "Node.js"),
	("TypeScript", "WebAssembly"),
	("Node.js", "GraphQL"),
	("GraphQL", "PostgreSQL"),
	("Linux", "Docker"),
	("Linux", "Nix"),
	("Docker", "CI/CD"),
	("Nix", "CI/CD"),
	("Rust", "Linux"),
];

fn skills() -> GraphData {
	let nodes = CORE_SKILLS
		.iter()
		.map(|id| SkillNodeSpec::core(*id))
		.chain(SKILLS.iter().map(|id| SkillNodeSpec::new(*id)))
		.collect();
	let links = LINKS
		.iter()
		.map(|(source, target)| SkillLinkSpec::new(*source, *target))
		.collect();
	GraphData { nodes, links }
}

struct Project {
	title: &'static str,
	blurb: &'static str,
}

const PROJECTS: &[Project] = &[
	Project {
		title: "Closure analyzer",
		blurb: "Interactive treemap of a system closure, rendered at 60 fps.",
	},
	Project {
		title: "Diagram renderer",
		blurb: "Text-to-SVG diagrams without a headless browser.",
	},
	Project {
		title: "Notes server",
		blurb: "Markdown notes with backlinks and a live graph view.",
	},
];

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(skills);
	let phrases = vec![
		"Systems programmer".to_string(),
		"Web tinkerer".to_string(),
		"Rustacean".to_string(),
	];

	view! {
		<header class="hero">
			<h1>
				<ScrambleText phrases=phrases />
			</h1>
		</header>

		<section class="projects">
			{PROJECTS
				.iter()
				.map(|project| {
					view! {
						<TiltCard>
							<h2>{project.title}</h2>
							<p>{project.blurb}</p>
						</TiltCard>
					}
				})
				.collect_view()}
		</section>

		<section class="skills">
			<h2>"Skills"</h2>
			<p class="subtitle">"Drag a skill to pull its neighbours along."</p>
			<SkillGraph data=graph_data />
		</section>
	}
}
