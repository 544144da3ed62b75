// Constants used in the game, structured into modules.

/// Cube rotation engine
pub mod cube_constants {
    // Duration of one animated quarter turn.
    pub const ROTATION_DURATION_MS: u64 = 300;

    // Angle of a single face or slice turn.
    pub const QUARTER_TURN_RAD: f32 = std::f32::consts::FRAC_PI_2;

    // Piece translations are snapped to this grid after each turn.
    pub const TRANSLATION_SNAP: f32 = 1.0e-4;

    // Spacing between neighbouring pieces of the procedural cube.
    pub const PIECE_SPACING: f32 = 1.05;
    pub const PIECE_SIZE: f32 = 0.95;

    // Name of the fixed middle piece, never assigned to a face group.
    pub const CENTER_PIECE_NAME: &str = "center";
}

/// Gesture recognition (all distances in logical pixels)
pub mod gesture_constants {
    // Half width of the square region around the screen center treated as "on the cube".
    pub const HIT_REGION_HALF_EXTENT: f32 = 200.0;

    // Offset from the screen center separating the outer slices from the middle one.
    pub const SLICE_BAND_THRESHOLD: f32 = 100.0;

    // A release counts as a swipe when it travelled further than this...
    pub const SWIPE_MIN_DISTANCE: f32 = 50.0;
    // ...in less than this.
    pub const SWIPE_MAX_DURATION_MS: u64 = 300;

    // Scale applied to wheel deltas and pinch distance changes.
    pub const ZOOM_SCALE: f32 = 0.01;

    // Pixels per wheel "line" for devices reporting line scroll units.
    pub const WHEEL_LINE_PIXELS: f32 = 100.0;
}

/// 3D camera
pub mod camera_3d_constants {
    pub const CAMERA_3D_INITIAL_DISTANCE: f32 = 8.0;

    // Range for the camera distance.
    pub const CAMERA_3D_MIN_ZOOM: f32 = 3.0;
    pub const CAMERA_3D_MAX_ZOOM: f32 = 15.0;

    // Scene orbit applied to the cube root, radians per pixel dragged.
    pub const ORBIT_SENSITIVITY: f32 = 0.01;
    pub const ORBIT_PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_3;

    // Start with a corner view of the cube.
    pub const ORBIT_INITIAL_PITCH: f32 = 0.3;
    pub const ORBIT_INITIAL_YAW: f32 = 0.8;
}

/// Generic game constants
pub mod game_constants {
    // Seed for the random number generator.
    pub const SEED: u64 = 69;

    // Turns applied when a cube is first built.
    pub const INITIAL_SCRAMBLE_MOVES: u32 = 1;

    // Turns applied by the debug scramble key.
    pub const DEBUG_SCRAMBLE_MOVES: u32 = 20;

    // Config file looked up in the working directory on native targets.
    pub const CONFIG_FILE_NAME: &str = "rubiks_cube.toml";
}
