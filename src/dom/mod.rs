//! The page document as an injected interface.
//!
//! Every behavior on the page talks to the document through [`Document`], so
//! it can run against the real browser DOM ([`WebDocument`]) or an in-memory
//! tree in tests.

#[cfg(test)]
pub mod mock;
mod web;

use thiserror::Error;

pub use web::WebDocument;

/// SVG namespace used for every diagram element.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Failures raised while touching the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// No window or document is reachable from this context.
	#[error("no document available")]
	NoDocument,
	/// The page does not contain an element with the expected id.
	#[error("element #{id} not found")]
	ElementNotFound { id: String },
	/// The element exists but cannot serve the requested operation.
	#[error("element is not {expected}")]
	WrongElementKind { expected: &'static str },
	/// A DOM call threw.
	#[error("dom call failed: {0}")]
	Js(String),
}

impl DomError {
	pub(crate) fn not_found(id: &str) -> Self {
		Self::ElementNotFound { id: id.to_owned() }
	}
}

/// The operations page behaviors need from the hosting document.
pub trait Document {
	/// Handle to one element of this document.
	type Element: Clone;

	fn element_by_id(&self, id: &str) -> Result<Self::Element, DomError>;

	/// Create a detached element in the SVG namespace.
	fn create_svg_element(&self, tag: &str) -> Result<Self::Element, DomError>;

	fn set_attribute(&self, el: &Self::Element, name: &str, value: &str) -> Result<(), DomError>;

	/// Set an inline style property, e.g. `display`.
	fn set_style(&self, el: &Self::Element, property: &str, value: &str) -> Result<(), DomError>;

	/// Replace the element's text content.
	fn set_text(&self, el: &Self::Element, text: &str) -> Result<(), DomError>;

	fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<(), DomError>;

	/// Number of element children currently under `el`.
	fn child_count(&self, el: &Self::Element) -> Result<usize, DomError>;

	/// Current value of a text input or textarea.
	fn input_value(&self, el: &Self::Element) -> Result<String, DomError>;

	/// Ask the host to smoothly scroll `el` into view.
	fn scroll_into_view(&self, el: &Self::Element) -> Result<(), DomError>;
}
