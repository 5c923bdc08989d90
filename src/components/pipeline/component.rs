use leptos::prelude::*;
use log::error;

use super::render::render_pipeline;
use super::types::PIPELINE_NODES;
use crate::config::PageIds;
use crate::dom::WebDocument;

/// Inline SVG showing the request pipeline, filled in once after mount.
#[component]
pub fn PipelineDiagram(#[prop(optional)] ids: PageIds) -> impl IntoView {
	// No tracked signals, so this runs exactly once after the svg is mounted.
	Effect::new(move |_| {
		let rendered = WebDocument::new()
			.and_then(|doc| render_pipeline(&doc, ids.pipeline, &PIPELINE_NODES));
		if let Err(err) = rendered {
			error!("pipeline diagram not rendered: {err}");
		}
	});

	view! {
		<svg
			id=ids.pipeline
			class="pipeline-diagram"
			viewBox="0 0 1510 340"
			preserveAspectRatio="xMidYMid meet"
			role="img"
			aria-label="Request pipeline from frontend to output"
		/>
	}
}
