use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
	Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
	ScrollIntoViewOptions,
};

use super::{DomError, Document, SVG_NS};

fn js_err(err: JsValue) -> DomError {
	DomError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// [`Document`] backed by the browser's live `window.document`.
#[derive(Clone, Debug)]
pub struct WebDocument {
	inner: web_sys::Document,
}

impl WebDocument {
	/// Grab the document of the current window.
	pub fn new() -> Result<Self, DomError> {
		let inner = web_sys::window()
			.and_then(|w| w.document())
			.ok_or(DomError::NoDocument)?;
		Ok(Self { inner })
	}
}

impl Document for WebDocument {
	type Element = Element;

	fn element_by_id(&self, id: &str) -> Result<Element, DomError> {
		self.inner
			.get_element_by_id(id)
			.ok_or_else(|| DomError::not_found(id))
	}

	fn create_svg_element(&self, tag: &str) -> Result<Element, DomError> {
		self.inner
			.create_element_ns(Some(SVG_NS), tag)
			.map_err(js_err)
	}

	fn set_attribute(&self, el: &Element, name: &str, value: &str) -> Result<(), DomError> {
		el.set_attribute(name, value).map_err(js_err)
	}

	fn set_style(&self, el: &Element, property: &str, value: &str) -> Result<(), DomError> {
		let html = el
			.dyn_ref::<HtmlElement>()
			.ok_or(DomError::WrongElementKind {
				expected: "an html element",
			})?;
		html.style().set_property(property, value).map_err(js_err)
	}

	fn set_text(&self, el: &Element, text: &str) -> Result<(), DomError> {
		el.set_text_content(Some(text));
		Ok(())
	}

	fn append_child(&self, parent: &Element, child: &Element) -> Result<(), DomError> {
		parent.append_child(child).map(|_| ()).map_err(js_err)
	}

	fn child_count(&self, el: &Element) -> Result<usize, DomError> {
		Ok(el.child_element_count() as usize)
	}

	fn input_value(&self, el: &Element) -> Result<String, DomError> {
		if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
			Ok(input.value())
		} else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
			Ok(area.value())
		} else {
			Err(DomError::WrongElementKind {
				expected: "a text input",
			})
		}
	}

	fn scroll_into_view(&self, el: &Element) -> Result<(), DomError> {
		let opts = ScrollIntoViewOptions::new();
		opts.set_behavior(ScrollBehavior::Smooth);
		el.scroll_into_view_with_scroll_into_view_options(&opts);
		Ok(())
	}
}
