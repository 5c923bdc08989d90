/// Static position and caption of one box in the pipeline diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeDescriptor {
	pub x: f64,
	pub y: f64,
	pub label: &'static str,
}

impl NodeDescriptor {
	pub fn transform(&self) -> String {
		format!("translate({},{})", self.x, self.y)
	}
}

pub const PIPELINE_NODES: [NodeDescriptor; 5] = [
	NodeDescriptor {
		x: 40.0,
		y: 110.0,
		label: "Frontend UI",
	},
	NodeDescriptor {
		x: 360.0,
		y: 110.0,
		label: "Flask API",
	},
	NodeDescriptor {
		x: 700.0,
		y: 110.0,
		label: "Preprocessing",
	},
	NodeDescriptor {
		x: 1000.0,
		y: 110.0,
		label: "ML Model",
	},
	NodeDescriptor {
		x: 1250.0,
		y: 110.0,
		label: "Output",
	},
];

pub const BOX_WIDTH: f64 = 220.0;
pub const BOX_HEIGHT: f64 = 120.0;
pub const BOX_RADIUS: f64 = 16.0;
pub const BOX_FILL: &str = "rgba(255,255,255,0.02)";
pub const BOX_STROKE: &str = "#00d1ff";
pub const BOX_STROKE_WIDTH: &str = "1.5";

pub const LABEL_X: f64 = 12.0;
pub const LABEL_Y: f64 = 24.0;
pub const LABEL_FILL: &str = "#dff7ff";
pub const LABEL_FONT_SIZE: u32 = 16;
pub const LABEL_FONT_WEIGHT: u32 = 700;
