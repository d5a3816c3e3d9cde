use bevy::prelude::*;

use crate::board::motion::{Easing, Motion};
use crate::board::shapes::BoardShape;
use crate::board::tunables::BoardTunables;
use crate::input::PointerState;

/// Displacement pushing a shape's center away from the pointer, or `None`
/// when the pointer is out of range.
///
/// The direction runs from the pointer through the center; a pointer sitting
/// exactly on the center has no direction and produces no push.
pub fn flee_push(center: Vec2, pointer: Vec2, radius: f32, push: f32) -> Option<Vec2> {
    let away = center - pointer;
    let distance = away.length();

    if distance >= radius || distance <= f32::EPSILON {
        return None;
    }

    Some(away / distance * push)
}

/// System: nudge shapes away whenever the pointer moves near them
pub fn flee_from_pointer(
    pointer: Res<PointerState>,
    tunables: Res<BoardTunables>,
    mut shapes: Query<(&BoardShape, &mut Motion)>,
) {
    if !pointer.is_changed() {
        return;
    }
    let Some(pointer_pos) = pointer.position else {
        return;
    };

    for (shape, mut motion) in &mut shapes {
        let half = shape.kind.size(&tunables) * 0.5;
        let center = motion.position() + Vec2::splat(half);

        if let Some(push) = flee_push(center, pointer_pos, tunables.flee_radius, tunables.flee_push)
        {
            let target = motion.position() + push;
            motion.animate_to(target, tunables.flee_duration_secs, Easing::EaseOutCubic);
        }
    }
}
