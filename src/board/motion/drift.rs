use bevy::prelude::*;
use rand::Rng;

use crate::board::motion::tween::{Easing, Motion};
use crate::board::tunables::BoardTunables;

/// Drives the perpetual wander of one shape.
///
/// The delay holds drift off right after spawn; shapes that entered from an
/// edge wait a little longer so the entry tween can play out first.
#[derive(Component, Debug)]
pub struct DriftState {
    delay: Timer,
}

impl DriftState {
    pub fn immediate() -> Self {
        DriftState {
            delay: Timer::from_seconds(0.0, TimerMode::Once),
        }
    }

    pub fn delayed(secs: f32) -> Self {
        DriftState {
            delay: Timer::from_seconds(secs, TimerMode::Once),
        }
    }
}

/// Pick the next drift step: a bounded random offset per axis and a single
/// duration shared by both axes, so they come to rest together
pub fn drift_step(rng: &mut impl Rng, range: f32, duration: (f32, f32)) -> (Vec2, f32) {
    let offset = Vec2::new(
        rng.random_range(-range..=range),
        rng.random_range(-range..=range),
    );
    (offset, rng.random_range(duration.0..=duration.1))
}

/// System: re-arm drift whenever a shape has come to rest.
///
/// A flee push or entry tween that grabs an axis simply postpones the next
/// step; once both axes go idle again the loop resumes on its own.
pub fn drive_drift(
    time: Res<Time>,
    tunables: Res<BoardTunables>,
    mut shapes: Query<(&mut DriftState, &mut Motion)>,
) {
    let mut rng = rand::rng();

    for (mut drift, mut motion) in &mut shapes {
        drift.delay.tick(time.delta());
        if !drift.delay.finished() || !motion.is_idle() {
            continue;
        }

        let (offset, duration) =
            drift_step(&mut rng, tunables.drift_range, tunables.drift_duration_range());
        let target = motion.position() + offset;
        motion.animate_to(target, duration, Easing::EaseInOutCubic);
    }
}
