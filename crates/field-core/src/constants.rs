// Shared simulation tuning constants used by the core and the web frontend.

// 2D node field
pub const FIELD_PARTICLE_COUNT: usize = 150;
pub const CURSOR_OUTER_RADIUS: f32 = 200.0; // particles inside this radius flee the cursor
pub const CURSOR_SLOW_ZONE: f32 = 80.0; // inner zone where fleeing is slower
pub const SLOW_ZONE_SPEED: f32 = 2.0; // units per frame
pub const REPEL_SPEED: f32 = 3.0; // units per frame
pub const CENTERING_STRENGTH: f32 = 0.005; // fraction of the offset to center added per frame
pub const EDGE_REPEL_ZONE: f32 = 50.0;
pub const EDGE_REPEL_FACTOR: f32 = 1.5; // stacks on both axes near corners
pub const NODE_RADIUS_MIN: f32 = 1.0;
pub const NODE_RADIUS_MAX: f32 = 3.0;
pub const BASE_SPEED_MAX: f32 = 1.0; // base velocity components are drawn from [-max, max)

// Connectivity edges
pub const CONNECT_THRESHOLD: f32 = 150.0;
pub const EDGE_LINE_WIDTH: f32 = 1.0;

// Colors
pub const NODE_FILL: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
pub const EDGE_STROKE_RGB: [f32; 3] = [200.0 / 255.0, 220.0 / 255.0, 1.0];

// 3D cloud
pub const OUTLINE_PARTICLE_COUNT: usize = 2000;
pub const LABEL_PARTICLE_COUNT: usize = 1000;
pub const CUBE_HALF_EXTENT: f32 = 2.0;
pub const OUTLINE_AMPLITUDE: f32 = 0.1;
pub const LABEL_AMPLITUDE: f32 = 0.05;
pub const LABEL_BREATH_RATE: f32 = 0.5; // z oscillation runs at half speed for the label
pub const LABEL_JITTER: f32 = 0.05;
pub const GLYPH_SPACING: f32 = 0.12; // world units between dot-matrix cells
pub const DEFAULT_LABEL: &str = "HELLO";

pub const OUTLINE_COLOR: [f32; 3] = [0.55, 0.75, 1.0];
pub const LABEL_PALETTE: [[f32; 3]; 5] = [
    [1.0, 0.42, 0.42], // coral
    [1.0, 0.85, 0.4],  // amber
    [0.42, 0.9, 0.6],  // mint
    [0.4, 0.7, 1.0],   // sky
    [0.8, 0.5, 1.0],   // violet
];

// Camera rig
pub const ROTATE_SENSITIVITY: f32 = 0.005; // radians per pixel of drag
pub const ZOOM_SENSITIVITY: f32 = 0.1; // distance per unit of wheel delta
pub const MIN_ZOOM_DISTANCE: f32 = 2.0;
pub const MAX_ZOOM_DISTANCE: f32 = 20.0;
pub const INITIAL_ZOOM_DISTANCE: f32 = 10.0;

// Perspective camera
pub const CAMERA_FOV_Y_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
