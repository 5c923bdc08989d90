//! Element ids and navigation targets the page is built around.

/// Ids of the elements the page behaviors look up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageIds {
	pub message_input: &'static str,
	pub demo_result: &'static str,
	pub modal_backdrop: &'static str,
	pub pipeline: &'static str,
}

impl Default for PageIds {
	fn default() -> Self {
		Self {
			message_input: "messageInput",
			demo_result: "demoResult",
			modal_backdrop: "modalBackdrop",
			pipeline: "pipeline",
		}
	}
}

/// One navigation entry: the section id to scroll to and its caption.
#[derive(Clone, Copy, Debug)]
pub struct Section {
	pub id: &'static str,
	pub caption: &'static str,
}

pub const SECTIONS: &[Section] = &[
	Section {
		id: "home",
		caption: "Home",
	},
	Section {
		id: "demo",
		caption: "Try the demo",
	},
	Section {
		id: "architecture",
		caption: "Pipeline",
	},
	Section {
		id: "about",
		caption: "About",
	},
];
