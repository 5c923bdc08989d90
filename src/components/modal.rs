use leptos::prelude::*;
use log::{debug, error};

use crate::config::PageIds;
use crate::dom::{DomError, Document, WebDocument};

fn set_overlay_display<D: Document>(doc: &D, ids: PageIds, display: &str) -> Result<(), DomError> {
	let backdrop = doc.element_by_id(ids.modal_backdrop)?;
	doc.set_style(&backdrop, "display", display)?;
	debug!("#{} display set to {display}", ids.modal_backdrop);
	Ok(())
}

/// Hide the modal overlay. Calling it again changes nothing.
pub fn close_modal<D: Document>(doc: &D, ids: PageIds) -> Result<(), DomError> {
	set_overlay_display(doc, ids, "none")
}

/// Show the modal overlay again.
pub fn open_modal<D: Document>(doc: &D, ids: PageIds) -> Result<(), DomError> {
	set_overlay_display(doc, ids, "flex")
}

fn with_page(action: impl FnOnce(&WebDocument) -> Result<(), DomError>, what: &str) {
	if let Err(err) = WebDocument::new().and_then(|doc| action(&doc)) {
		error!("{what} failed: {err}");
	}
}

/// Click handler body for buttons that bring the welcome modal back.
pub fn reopen_welcome(ids: PageIds) {
	with_page(|doc| open_modal(doc, ids), "opening modal");
}

/// Full-screen backdrop with a short note about the demo, shown on load.
#[component]
pub fn WelcomeModal(#[prop(optional)] ids: PageIds) -> impl IntoView {
	view! {
		<div id=ids.modal_backdrop class="modal-backdrop" style="display: flex;">
			<div class="modal" role="dialog" aria-modal="true" aria-labelledby="modal-title">
				<h2 id="modal-title">"Welcome to SpamGuard"</h2>
				<p>
					"The demo on this page runs entirely in your browser. "
					"Its verdicts are randomly generated for illustration and do not come from a trained model."
				</p>
				<button
					class="btn primary"
					on:click=move |_| with_page(|doc| close_modal(doc, ids), "closing modal")
				>
					"Got it"
				</button>
			</div>
		</div>
	}
}
