use bevy::prelude::*;

mod board;
mod camera;
mod input;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use input::InputPlugin;

use crate::board::plugin::BoardPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Skitter".into(),
            resolution: WindowResolution::new(1280, 720),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(BoardPlugin);

    app.run();
}
