use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="not-found">
			<h1>"404"</h1>
			<p>"Nothing lives here."</p>
			<a href="/">"Back home"</a>
		</section>
	}
}
