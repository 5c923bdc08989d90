//! Injectable random numbers for the demo classifier.

/// A source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
	fn next_f64(&mut self) -> f64;
}

/// Browser `Math.random()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
	fn next_f64(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// Small linear-congruential generator, deterministic for a given seed.
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct Lcg {
	state: usize,
}

#[cfg(test)]
impl Lcg {
	pub fn new(seed: usize) -> Self {
		Self { state: seed }
	}
}

#[cfg(test)]
impl RandomSource for Lcg {
	fn next_f64(&mut self) -> f64 {
		self.state = (self.state * 9301 + 49297) % 233280;
		(self.state as f64) / 233280.0
	}
}

/// Replays a fixed list of draws, cycling when exhausted.
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct Scripted {
	draws: Vec<f64>,
	pos: usize,
}

#[cfg(test)]
impl Scripted {
	pub fn new(draws: &[f64]) -> Self {
		Self {
			draws: draws.to_vec(),
			pos: 0,
		}
	}
}

#[cfg(test)]
impl RandomSource for Scripted {
	fn next_f64(&mut self) -> f64 {
		let v = self.draws[self.pos % self.draws.len()];
		self.pos += 1;
		v
	}
}
