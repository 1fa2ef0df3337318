/// Page wiring and presentation constants for the web frontend.
///
/// Simulation tuning lives in `field_core::constants`; these only describe
/// how the two scenes are hosted in the page.
// Canvas element ids
pub const FIELD_CANVAS_ID: &str = "field-canvas";
pub const CLOUD_CANVAS_ID: &str = "cloud-canvas";

// A press that travels further than this is a drag, not a click
pub const CLICK_DRAG_SLOP_PX: f32 = 4.0;

// WebGPU clear color behind the point clouds
pub const CLOUD_CLEAR_RGB: [f64; 3] = [0.01, 0.012, 0.03];

// Per-cloud point opacity
pub const OUTLINE_POINT_ALPHA: f32 = 0.8;
pub const LABEL_POINT_ALPHA: f32 = 1.0;
