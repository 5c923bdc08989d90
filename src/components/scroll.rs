use leptos::prelude::*;
use log::{debug, error};

use crate::config::{SECTIONS, Section};
use crate::dom::{DomError, Document, WebDocument};

/// Smoothly scroll the element with id `section_id` into view.
pub fn scroll_to_section<D: Document>(doc: &D, section_id: &str) -> Result<(), DomError> {
	let target = doc.element_by_id(section_id)?;
	doc.scroll_into_view(&target)?;
	debug!("scrolling to #{section_id}");
	Ok(())
}

/// Top navigation with one smooth-scroll button per page section.
#[component]
pub fn NavBar(#[prop(default = SECTIONS)] sections: &'static [Section]) -> impl IntoView {
	view! {
		<nav class="top-nav">
			<span class="brand">"SpamGuard"</span>
			<ul>
				{sections
					.iter()
					.map(|section| {
						let id = section.id;
						view! {
							<li>
								<button
									class="nav-link"
									on:click=move |_| {
										let scrolled = WebDocument::new()
											.and_then(|doc| scroll_to_section(&doc, id));
										if let Err(err) = scrolled {
											error!("navigation to #{id} failed: {err}");
										}
									}
								>
									{section.caption}
								</button>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</nav>
	}
}
