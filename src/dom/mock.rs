//! In-memory document used by unit tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{DomError, Document};

/// Index of an element inside a [`MockDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockNode(usize);

#[derive(Clone, Debug, Default)]
pub struct MockElement {
	pub tag: String,
	pub id: Option<String>,
	pub svg: bool,
	pub attributes: BTreeMap<String, String>,
	pub style: BTreeMap<String, String>,
	pub text: String,
	pub value: Option<String>,
	pub children: Vec<MockNode>,
}

#[derive(Default)]
pub struct MockDocument {
	nodes: RefCell<Vec<MockElement>>,
	scrolls: RefCell<Vec<MockNode>>,
}

impl MockDocument {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add an element with an id, like static page markup would.
	pub fn with_element(self, tag: &str, id: &str) -> Self {
		self.nodes.borrow_mut().push(MockElement {
			tag: tag.into(),
			id: Some(id.into()),
			..Default::default()
		});
		self
	}

	/// Add a text input holding `value`.
	pub fn with_input(self, id: &str, value: &str) -> Self {
		self.nodes.borrow_mut().push(MockElement {
			tag: "input".into(),
			id: Some(id.into()),
			value: Some(value.into()),
			..Default::default()
		});
		self
	}

	pub fn node(&self, node: MockNode) -> MockElement {
		self.nodes.borrow()[node.0].clone()
	}

	pub fn by_id(&self, id: &str) -> MockElement {
		let node = self.element_by_id(id).expect("element present");
		self.node(node)
	}

	pub fn scrolls(&self) -> Vec<MockNode> {
		self.scrolls.borrow().clone()
	}

	pub fn len(&self) -> usize {
		self.nodes.borrow().len()
	}
}

impl Document for MockDocument {
	type Element = MockNode;

	fn element_by_id(&self, id: &str) -> Result<MockNode, DomError> {
		self.nodes
			.borrow()
			.iter()
			.position(|el| el.id.as_deref() == Some(id))
			.map(MockNode)
			.ok_or_else(|| DomError::not_found(id))
	}

	fn create_svg_element(&self, tag: &str) -> Result<MockNode, DomError> {
		let mut nodes = self.nodes.borrow_mut();
		nodes.push(MockElement {
			tag: tag.into(),
			svg: true,
			..Default::default()
		});
		Ok(MockNode(nodes.len() - 1))
	}

	fn set_attribute(&self, el: &MockNode, name: &str, value: &str) -> Result<(), DomError> {
		self.nodes.borrow_mut()[el.0]
			.attributes
			.insert(name.into(), value.into());
		Ok(())
	}

	fn set_style(&self, el: &MockNode, property: &str, value: &str) -> Result<(), DomError> {
		let mut nodes = self.nodes.borrow_mut();
		let node = &mut nodes[el.0];
		if node.svg {
			return Err(DomError::WrongElementKind {
				expected: "an html element",
			});
		}
		node.style.insert(property.into(), value.into());
		Ok(())
	}

	fn set_text(&self, el: &MockNode, text: &str) -> Result<(), DomError> {
		self.nodes.borrow_mut()[el.0].text = text.into();
		Ok(())
	}

	fn append_child(&self, parent: &MockNode, child: &MockNode) -> Result<(), DomError> {
		self.nodes.borrow_mut()[parent.0].children.push(*child);
		Ok(())
	}

	fn child_count(&self, el: &MockNode) -> Result<usize, DomError> {
		Ok(self.nodes.borrow()[el.0].children.len())
	}

	fn input_value(&self, el: &MockNode) -> Result<String, DomError> {
		self.nodes.borrow()[el.0]
			.value
			.clone()
			.ok_or(DomError::WrongElementKind {
				expected: "a text input",
			})
	}

	fn scroll_into_view(&self, el: &MockNode) -> Result<(), DomError> {
		self.scrolls.borrow_mut().push(*el);
		Ok(())
	}
}
