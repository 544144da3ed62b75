pub mod utils {
    pub mod camera;
    pub mod config;
    pub mod constants;
    pub mod cube_state;
    pub mod debug_functions;
    pub mod game_functions;
    pub mod gesture;
    pub mod interpolate;
    pub mod levels;
    pub mod objects;
    pub mod piece_registry;
    pub mod rotation_engine;
    pub mod rubiks_cube;
    pub mod setup;
    pub mod systems_logic;
    pub mod touch_inputs;
}

pub mod plugins {
    pub mod cube_plugin;
}
