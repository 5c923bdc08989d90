use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="section not-found">
			<h1>"Page not found"</h1>
			<p>"There is nothing at this address."</p>
			<a class="btn primary" href="/">
				"Back to the home page"
			</a>
		</section>
	}
}
