use bevy::prelude::*;

use crate::board::motion::tween::{Easing, Motion};
use crate::board::tunables::BoardTunables;

/// Entry target for a shape spawned off-screen; removed once the entry
/// tween has been issued
#[derive(Component, Debug, Clone, Copy)]
pub struct Entering {
    pub target: Vec2,
}

/// System: fly newly entered shapes from their edge position to the target
pub fn begin_entry(
    mut commands: Commands,
    tunables: Res<BoardTunables>,
    mut shapes: Query<(Entity, &mut Motion, &Entering)>,
) {
    for (entity, mut motion, entering) in &mut shapes {
        motion.animate_to(
            entering.target,
            tunables.entry_duration_secs,
            Easing::EaseOutCubic,
        );
        commands.entity(entity).remove::<Entering>();
    }
}
