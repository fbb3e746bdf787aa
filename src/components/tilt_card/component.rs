use leptos::prelude::*;
use web_sys::MouseEvent;

use super::state::Tilt;

/// Card that leans toward the pointer while hovered.
#[component]
pub fn TiltCard(children: Children, #[prop(default = 10.0)] max_tilt: f64) -> impl IntoView {
	let card_ref = NodeRef::<leptos::html::Div>::new();
	let (tilt, set_tilt) = signal(Tilt::REST);

	let on_mousemove = move |ev: MouseEvent| {
		let Some(card) = card_ref.get() else {
			return;
		};
		let rect = card.get_bounding_client_rect();
		set_tilt.set(Tilt::from_pointer(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
			rect.width(),
			rect.height(),
			max_tilt,
		));
	};

	view! {
		<div
			node_ref=card_ref
			class="tilt-card"
			style:transform=move || tilt.get().css()
			on:mousemove=on_mousemove
			on:mouseleave=move |_| set_tilt.set(Tilt::REST)
		>
			{children()}
		</div>
	}
}
