use log::debug;

use super::types::*;
use crate::dom::{DomError, Document};

/// Append one labeled box per descriptor to the SVG root with id `root_id`.
///
/// Groups are appended in slice order, so later nodes paint on top of earlier
/// ones. The root is resolved before anything is created; a missing root
/// leaves the document untouched. A root that already has children is left
/// as is, so the diagram is drawn at most once. Returns the number of groups
/// appended.
pub fn render_pipeline<D: Document>(
	doc: &D,
	root_id: &str,
	nodes: &[NodeDescriptor],
) -> Result<usize, DomError> {
	let root = doc.element_by_id(root_id)?;
	if doc.child_count(&root)? > 0 {
		debug!("#{root_id} already populated, skipping pipeline render");
		return Ok(0);
	}
	for node in nodes {
		let group = draw_node(doc, node)?;
		doc.append_child(&root, &group)?;
	}
	debug!("rendered {} pipeline nodes into #{root_id}", nodes.len());
	Ok(nodes.len())
}

fn draw_node<D: Document>(doc: &D, node: &NodeDescriptor) -> Result<D::Element, DomError> {
	let g = doc.create_svg_element("g")?;
	doc.set_attribute(&g, "transform", &node.transform())?;

	let rect = doc.create_svg_element("rect")?;
	for (name, value) in [
		("width", BOX_WIDTH.to_string()),
		("height", BOX_HEIGHT.to_string()),
		("rx", BOX_RADIUS.to_string()),
		("fill", BOX_FILL.to_string()),
		("stroke", BOX_STROKE.to_string()),
		("stroke-width", BOX_STROKE_WIDTH.to_string()),
	] {
		doc.set_attribute(&rect, name, &value)?;
	}

	let text = doc.create_svg_element("text")?;
	for (name, value) in [
		("x", LABEL_X.to_string()),
		("y", LABEL_Y.to_string()),
		("fill", LABEL_FILL.to_string()),
		("font-size", LABEL_FONT_SIZE.to_string()),
		("font-weight", LABEL_FONT_WEIGHT.to_string()),
	] {
		doc.set_attribute(&text, name, &value)?;
	}
	doc.set_text(&text, node.label)?;

	doc.append_child(&g, &rect)?;
	doc.append_child(&g, &text)?;
	Ok(g)
}
