//! The demo "classifier": a coin flip dressed up as a model verdict.
//!
//! Nothing here looks at the message text. The verdict and the confidence are
//! both drawn from the injected [`RandomSource`].

use std::collections::VecDeque;
use std::fmt;

use log::debug;

use crate::config::PageIds;
use crate::dom::{DomError, Document};
use crate::random::RandomSource;

/// Number of runs kept in [`DemoHistory`].
pub const HISTORY_LEN: usize = 5;

const EXCERPT_CHARS: usize = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
	Spam,
	NotSpam,
}

impl Verdict {
	pub fn label(self) -> &'static str {
		match self {
			Verdict::Spam => "Spam ✅",
			Verdict::NotSpam => "Not Spam 🚀",
		}
	}
}

/// A verdict with a confidence in `[80.0, 100.0]`, kept in tenths of a percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prediction {
	pub verdict: Verdict,
	confidence_tenths: u16,
}

impl Prediction {
	/// Draw a verdict and a confidence from `rng`, in that order.
	pub fn draw(rng: &mut impl RandomSource) -> Self {
		let verdict = if rng.next_f64() > 0.5 {
			Verdict::Spam
		} else {
			Verdict::NotSpam
		};
		let confidence = rng.next_f64() * 20.0 + 80.0;
		// Rounds half away from zero on the scaled value; exact binary ties
		// may land one tenth off from `Number::toFixed(1)`.
		Self {
			verdict,
			confidence_tenths: (confidence * 10.0).round() as u16,
		}
	}

	/// Confidence with exactly one decimal digit, e.g. `"87.0"`.
	pub fn confidence_text(&self) -> String {
		format!(
			"{}.{}",
			self.confidence_tenths / 10,
			self.confidence_tenths % 10
		)
	}
}

impl fmt::Display for Prediction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} — Confidence: {}%",
			self.verdict.label(),
			self.confidence_text()
		)
	}
}

/// One simulated check: what was typed and what the demo answered.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoRun {
	pub message: String,
	pub prediction: Prediction,
}

impl DemoRun {
	/// The first few characters of the message, for list display.
	pub fn excerpt(&self) -> String {
		let trimmed = self.message.trim();
		if trimmed.is_empty() {
			return "(empty message)".into();
		}
		let mut excerpt: String = trimmed.chars().take(EXCERPT_CHARS).collect();
		if trimmed.chars().count() > EXCERPT_CHARS {
			excerpt.push('…');
		}
		excerpt
	}
}

/// The most recent demo runs of this page visit, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DemoHistory {
	runs: VecDeque<DemoRun>,
}

impl DemoHistory {
	pub fn record(&mut self, run: DemoRun) {
		self.runs.push_front(run);
		self.runs.truncate(HISTORY_LEN);
	}

	pub fn iter(&self) -> impl Iterator<Item = &DemoRun> {
		self.runs.iter()
	}

	pub fn is_empty(&self) -> bool {
		self.runs.is_empty()
	}
}

/// Read the message box, make up a verdict and show it in the result element.
///
/// Both elements are resolved before anything is written.
pub fn simulate_demo<D: Document>(
	doc: &D,
	ids: PageIds,
	rng: &mut impl RandomSource,
) -> Result<DemoRun, DomError> {
	let input = doc.element_by_id(ids.message_input)?;
	let message = doc.input_value(&input)?;
	let output = doc.element_by_id(ids.demo_result)?;

	let prediction = Prediction::draw(rng);
	doc.set_text(&output, &prediction.to_string())?;
	debug!(
		"demo verdict {:?} at {}% for {} chars",
		prediction.verdict,
		prediction.confidence_text(),
		message.chars().count()
	);
	Ok(DemoRun {
		message,
		prediction,
	})
}
