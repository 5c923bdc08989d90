use leptos::prelude::*;

use crate::components::demo::DemoPanel;
use crate::components::modal::{WelcomeModal, reopen_welcome};
use crate::components::pipeline::PipelineDiagram;
use crate::components::scroll::NavBar;
use crate::config::PageIds;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let ids = PageIds::default();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<NavBar />

			<header id="home" class="hero">
				<h1>"Stop spam before it reaches the inbox"</h1>
				<p class="subtitle">
					"Sentence embeddings, a Naive Bayes fallback and a keyword list, behind one endpoint."
				</p>
				<button class="btn ghost" on:click=move |_| reopen_welcome(ids)>
					"About the model"
				</button>
			</header>

			<section id="demo" class="section">
				<h2>"Try it"</h2>
				<p>"Type any message and hit classify."</p>
				<DemoPanel ids=ids />
			</section>

			<section id="architecture" class="section">
				<h2>"How a message flows"</h2>
				<PipelineDiagram ids=ids />
			</section>

			<section id="about" class="section">
				<h2>"About"</h2>
				<p>
					"SpamGuard pairs a transformer-based classifier with lightweight fallbacks "
					"so every message gets a verdict, even when a model is unavailable."
				</p>
			</section>

			<WelcomeModal ids=ids />
		</ErrorBoundary>
	}
}
