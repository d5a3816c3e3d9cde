use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .add_systems(Update, track_pointer);
    }
}

/// Latest pointer position in board space (window logical coordinates,
/// origin top-left).
///
/// `None` until the first pointer event arrives, so shapes never flee a
/// pointer that has not entered the window yet.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerState {
    pub position: Option<Vec2>,
}

/// Track the pointer from mouse motion and touches; last event wins.
fn track_pointer(
    mut cursor_events: MessageReader<CursorMoved>,
    mut touch_events: MessageReader<TouchInput>,
    mut pointer: ResMut<PointerState>,
) {
    let mut latest = None;

    for e in cursor_events.read() {
        latest = Some(e.position);
    }

    for ev in touch_events.read() {
        match ev.phase {
            TouchPhase::Started | TouchPhase::Moved => {
                latest = Some(ev.position);
            }
            // A lifted finger leaves the pointer where it last was, matching
            // mouse behavior when the cursor stops moving.
            TouchPhase::Ended | TouchPhase::Canceled => {}
        }
    }

    if let Some(position) = latest {
        pointer.position = Some(position);
    }
}
