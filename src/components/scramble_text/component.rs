use leptos::prelude::*;
use log::error;

use super::state::{Glyph, PhraseCycle};
use crate::components::entropy_rng;
use crate::components::frame_loop::FrameLoop;

/// Headline text that scrambles from one phrase to the next.
#[component]
pub fn ScrambleText(
	#[prop(into)] phrases: Vec<String>,
	/// Frames a settled phrase stays on screen.
	#[prop(default = 48)]
	hold_frames: u32,
) -> impl IntoView {
	let (glyphs, set_glyphs) = signal(Vec::<Glyph>::new());
	let frames = StoredValue::new_local(None::<FrameLoop>);
	let label = phrases.first().cloned().unwrap_or_default();

	Effect::new(move |_| {
		let mut rng = entropy_rng();
		let mut cycle = PhraseCycle::new(phrases.clone(), hold_frames, &mut rng);
		match FrameLoop::start(move || {
			if let Some(next) = cycle.tick(&mut rng) {
				set_glyphs.set(next);
			}
		}) {
			Ok(frame_loop) => frames.set_value(Some(frame_loop)),
			Err(err) => error!("scramble text disabled: {err:?}"),
		}
	});

	on_cleanup(move || {
		let _ = frames.try_update_value(|frame_loop| {
			frame_loop.take();
		});
	});

	view! {
		<span class="scramble-text" aria-label=label>
			{move || {
				glyphs
					.get()
					.into_iter()
					.map(|glyph| match glyph {
						Glyph::Settled(c) => view! { <span>{c.to_string()}</span> }.into_any(),
						Glyph::Scrambling(c) => {
							view! { <span class="dud">{c.to_string()}</span> }.into_any()
						}
					})
					.collect_view()
			}}
		</span>
	}
}
