use leptos::prelude::*;
use log::error;

use super::classifier::{DemoHistory, simulate_demo};
use crate::config::PageIds;
use crate::dom::WebDocument;
use crate::random::JsRandom;

/// Message box, classify button, result line and the list of recent checks.
#[component]
pub fn DemoPanel(#[prop(optional)] ids: PageIds) -> impl IntoView {
	let history = RwSignal::new(DemoHistory::default());

	let on_classify = move |_| {
		let run = WebDocument::new().and_then(|doc| simulate_demo(&doc, ids, &mut JsRandom));
		match run {
			Ok(run) => history.update(|h| h.record(run)),
			Err(err) => error!("demo simulation failed: {err}"),
		}
	};

	view! {
		<div class="demo-panel">
			<input
				id=ids.message_input
				type="text"
				class="demo-input"
				placeholder="Paste an email or message to check"
			/>
			<button class="btn primary" on:click=on_classify>
				"Classify"
			</button>
			<div id=ids.demo_result class="demo-result" aria-live="polite">
				"Your result will appear here"
			</div>
			<Show when=move || history.with(|h| !h.is_empty())>
				<h3 class="demo-history-title">"Recent checks"</h3>
				<ul class="demo-history">
					{move || {
						history
							.with(|h| {
								h.iter()
									.map(|run| {
										view! {
											<li>
												<span class="excerpt">{run.excerpt()}</span>
												<span class="verdict">{run.prediction.to_string()}</span>
											</li>
										}
									})
									.collect_view()
							})
					}}
				</ul>
			</Show>
		</div>
	}
}
