use bevy::prelude::*;

/// Easing curves for motion tweens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    #[allow(dead_code)]
    Linear,
    /// Fast at the start, decelerates at the end. Good for "arriving"
    /// motion: entries and flee pushes.
    EaseOutCubic,
    /// Slow at both ends, fast in the middle. Gives drift its floaty feel.
    EaseInOutCubic,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => {
                let x = 1.0 - t;
                1.0 - x * x * x
            }
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A time-bounded interpolation of one numeric value
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Tween {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Current value under the easing curve
    pub fn sample(&self) -> f32 {
        if self.duration <= f32::EPSILON {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Advance by `dt` seconds; returns true once the tween has finished
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.finished()
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// One animated axis: a current value plus at most one in-flight tween.
///
/// Issuing a new tween replaces the in-flight one and starts from the
/// current value, so whichever behavior animated last owns the axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisMotion {
    value: f32,
    tween: Option<Tween>,
}

impl AxisMotion {
    pub fn at(value: f32) -> Self {
        AxisMotion { value, tween: None }
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    pub fn animate_to(&mut self, target: f32, duration: f32, easing: Easing) {
        self.tween = Some(Tween::new(self.value, target, duration, easing));
    }

    pub fn is_idle(&self) -> bool {
        self.tween.is_none()
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some(tween) = self.tween.as_mut() {
            let finished = tween.advance(dt);
            self.value = tween.sample();
            if finished {
                self.tween = None;
            }
        }
    }
}

/// Board-space position of a shape, animated independently per axis
#[derive(Component, Debug, Clone, Copy)]
pub struct Motion {
    pub x: AxisMotion,
    pub y: AxisMotion,
}

impl Motion {
    pub fn new(pos: Vec2) -> Self {
        Motion {
            x: AxisMotion::at(pos.x),
            y: AxisMotion::at(pos.y),
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.get(), self.y.get())
    }

    pub fn animate_to(&mut self, target: Vec2, duration: f32, easing: Easing) {
        self.x.animate_to(target.x, duration, easing);
        self.y.animate_to(target.y, duration, easing);
    }

    /// True when no tween is in flight on either axis
    pub fn is_idle(&self) -> bool {
        self.x.is_idle() && self.y.is_idle()
    }
}

/// System: advance all in-flight tweens
pub fn tick_motions(time: Res<Time>, mut motions: Query<&mut Motion>) {
    let dt = time.delta_secs();
    for mut motion in &mut motions {
        motion.x.tick(dt);
        motion.y.tick(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            // Out-of-range inputs clamp
            assert_eq!(easing.apply(-1.0), 0.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }

    #[test]
    fn test_easing_monotone() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
            let mut prev = 0.0;
            for step in 1..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(value >= prev, "{:?} decreased at step {}", easing, step);
                prev = value;
            }
        }
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        // Ease-out covers more than half the distance by the halfway point
        assert!(Easing::EaseOutCubic.apply(0.5) > 0.5);
    }

    #[test]
    fn test_tween_reaches_exact_target() {
        let mut tween = Tween::new(10.0, 20.0, 1.0, Easing::EaseOutCubic);
        assert!(!tween.advance(0.5));
        assert!(tween.advance(0.6));
        assert_eq!(tween.sample(), 20.0);
    }

    #[test]
    fn test_zero_duration_tween_completes_immediately() {
        let mut tween = Tween::new(5.0, -3.0, 0.0, Easing::Linear);
        assert!(tween.advance(0.016));
        assert_eq!(tween.sample(), -3.0);
    }

    #[test]
    fn test_axis_motion_ticks_to_target() {
        let mut axis = AxisMotion::at(0.0);
        axis.animate_to(100.0, 0.5, Easing::Linear);
        assert!(!axis.is_idle());

        axis.tick(0.25);
        assert!((axis.get() - 50.0).abs() < 1e-4);

        axis.tick(0.25);
        assert_eq!(axis.get(), 100.0);
        assert!(axis.is_idle());

        // Idle axes stay put
        axis.tick(1.0);
        assert_eq!(axis.get(), 100.0);
    }

    #[test]
    fn test_new_tween_replaces_in_flight_tween() {
        let mut axis = AxisMotion::at(0.0);
        axis.animate_to(100.0, 1.0, Easing::Linear);
        axis.tick(0.5);

        // Redirect mid-flight; the new tween starts from the current value
        let midpoint = axis.get();
        axis.animate_to(0.0, 1.0, Easing::Linear);
        axis.tick(0.5);
        assert!(axis.get() < midpoint);

        axis.tick(0.5);
        assert_eq!(axis.get(), 0.0);
    }

    #[test]
    fn test_motion_axes_animate_together() {
        let mut motion = Motion::new(Vec2::new(10.0, 20.0));
        motion.animate_to(Vec2::new(20.0, 40.0), 1.0, Easing::Linear);

        motion.x.tick(0.5);
        motion.y.tick(0.5);
        assert!((motion.position() - Vec2::new(15.0, 30.0)).length() < 1e-3);

        motion.x.tick(0.5);
        motion.y.tick(0.5);
        assert_eq!(motion.position(), Vec2::new(20.0, 40.0));
        assert!(motion.is_idle());
    }
}
