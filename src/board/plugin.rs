use bevy::prelude::*;

use crate::board::interactions::flee_from_pointer;
use crate::board::motion::{begin_entry, drive_drift, tick_motions};
use crate::board::shapes::{
    ShapeIdGen, attach_shape_visuals, resize_backdrop, setup_backdrop, setup_shape_meshes,
    sync_shape_transforms,
};
use crate::board::spawn::{SpawnTimer, enforce_shape_cap, seed_board, spawn_from_edges};
use crate::board::tunables::BoardTunables;

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShapeIdGen>()
            // Tunables land first so the rest of startup can read them
            .add_systems(
                Startup,
                (setup_board, setup_shape_meshes, setup_backdrop, seed_board).chain(),
            )
            .add_systems(
                Update,
                (
                    // Board bookkeeping
                    spawn_from_edges,
                    enforce_shape_cap,
                    // Tween issuance
                    begin_entry,
                    drive_drift,
                    flee_from_pointer,
                    // Animation + rendering
                    tick_motions,
                    attach_shape_visuals,
                    sync_shape_transforms,
                    resize_backdrop,
                )
                    .chain(),
            );
    }
}

/// Load tunables and arm the spawn timer
fn setup_board(mut commands: Commands) {
    let tunables = BoardTunables::load_or_default();
    commands.insert_resource(SpawnTimer(Timer::from_seconds(
        tunables.spawn_interval_secs,
        TimerMode::Repeating,
    )));
    commands.insert_resource(tunables);
}
