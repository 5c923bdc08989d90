mod classifier;
mod component;

pub use classifier::{DemoHistory, DemoRun, Prediction, Verdict, simulate_demo};
pub use component::DemoPanel;
