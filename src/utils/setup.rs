use bevy::prelude::*;

use crate::utils::constants::cube_constants::{CENTER_PIECE_NAME, PIECE_SIZE, PIECE_SPACING};
use crate::utils::objects::{CameraZoom, CubeCamera, CubePiece, CubeRoot, SceneOrbit};

/// Name of the piece at `column`/`row` of a layer, counted from 1 like a keypad.
/// Layers are `a` (top), `b` (middle) and `c` (bottom); the middle of `b` is the center piece.
pub fn piece_name(layer: usize, row: usize, column: usize) -> String {
    let index = row * 3 + column + 1;
    if layer == 1 && index == 5 {
        return CENTER_PIECE_NAME.to_string();
    }
    let prefix = ['a', 'b', 'c'][layer];
    format!("{prefix}{index}")
}

/// Rest position of a piece in the cube frame.
pub fn piece_translation(layer: usize, row: usize, column: usize) -> Vec3 {
    Vec3::new(
        (column as f32 - 1.0) * PIECE_SPACING,
        (1.0 - layer as f32) * PIECE_SPACING,
        (row as f32 - 1.0) * PIECE_SPACING,
    )
}

/// Systems
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    zoom: Res<CameraZoom>,
    orbit: Res<SceneOrbit>,
) {
    // Camera
    commands.spawn((Camera3d::default(), zoom.camera_transform(), CubeCamera));

    // Light
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 7.5).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        PointLight {
            intensity: 1_000_000.0,
            ..default()
        },
        Transform::from_xyz(-4.0, 3.0, 4.0),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: true,
    });

    // Sky blue background
    commands.insert_resource(ClearColor(Color::srgb_u8(0x87, 0xCE, 0xEB)));

    let piece_mesh = meshes.add(Cuboid::new(PIECE_SIZE, PIECE_SIZE, PIECE_SIZE));

    // One tint per layer so turns are easy to follow
    let layer_colors = [
        Color::srgb(1.0, 1.0, 1.0),  // Top: white
        Color::srgb(0.9, 0.3, 0.2),  // Middle: red
        Color::srgb(1.0, 0.85, 0.1), // Bottom: yellow
    ];
    let layer_materials: Vec<Handle<StandardMaterial>> = layer_colors
        .into_iter()
        .map(|base_color| {
            materials.add(StandardMaterial {
                base_color,
                perceptual_roughness: 0.4,
                ..default()
            })
        })
        .collect();

    commands
        .spawn((
            Transform::from_rotation(orbit.rotation()),
            Visibility::default(),
            Name::new("cube"),
            CubeRoot,
        ))
        .with_children(|parent| {
            for (layer, material) in layer_materials.iter().enumerate() {
                for row in 0..3 {
                    for column in 0..3 {
                        parent.spawn((
                            Mesh3d(piece_mesh.clone()),
                            MeshMaterial3d(material.clone()),
                            Transform::from_translation(piece_translation(layer, row, column)),
                            Name::new(piece_name(layer, row, column)),
                            CubePiece,
                        ));
                    }
                }
            }
        });

    info!("Rubik's cube ready: drag on the cube to turn, off the cube to orbit");
}
