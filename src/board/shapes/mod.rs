pub mod render;

use bevy::prelude::*;
use rand::Rng;

use crate::board::tunables::BoardTunables;
use crate::camera::BoardViewport;

pub use render::{
    attach_shape_visuals, resize_backdrop, setup_backdrop, setup_shape_meshes,
    sync_shape_transforms,
};

/// Chance that a freshly picked shape is the oversized gold star
pub const RARE_STAR_CHANCE: f32 = 0.05;

/// Unique shape identifier; strictly increasing over the life of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub u64);

/// Hands out [`ShapeId`]s, newest last
#[derive(Resource, Debug, Default)]
pub struct ShapeIdGen {
    next: u64,
}

impl ShapeIdGen {
    pub fn next_id(&mut self) -> ShapeId {
        self.next += 1;
        ShapeId(self.next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Star,
    RareStar,
}

impl ShapeKind {
    /// Pick a kind: rare star 5% of the time, otherwise uniform over the rest
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.random::<f32>() < RARE_STAR_CHANCE {
            return ShapeKind::RareStar;
        }
        match rng.random_range(0..3) {
            0 => ShapeKind::Circle,
            1 => ShapeKind::Triangle,
            _ => ShapeKind::Star,
        }
    }

    /// Edge length of the square this kind is drawn in
    pub fn size(&self, tunables: &BoardTunables) -> f32 {
        match self {
            ShapeKind::RareStar => tunables.shape_size * tunables.rare_star_scale,
            _ => tunables.shape_size,
        }
    }
}

/// Component marking a board shape
///
/// The position lives in [`crate::board::motion::Motion`]; this carries the
/// immutable identity: id, kind, and the color rolled at spawn.
#[derive(Component, Debug)]
pub struct BoardShape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub color: Color,
}

/// Random opaque sRGB color, each channel uniform
pub fn random_color(rng: &mut impl Rng) -> Color {
    Color::srgb_u8(rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>())
}

/// Random board-space position, inset by `margin` so a shape drawn from its
/// top-left corner stays on screen
pub fn random_board_pos(rng: &mut impl Rng, viewport: &BoardViewport, margin: f32) -> Vec2 {
    let max_x = (viewport.width - margin).max(1.0);
    let max_y = (viewport.height - margin).max(1.0);
    Vec2::new(rng.random_range(0.0..max_x), rng.random_range(0.0..max_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_ids_strictly_increasing() {
        let mut ids = ShapeIdGen::default();
        let drawn: Vec<ShapeId> = (0..1000).map(|_| ids.next_id()).collect();

        for pair in drawn.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_rare_star_frequency() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 10_000;

        let mut counts = [0usize; 4];
        for _ in 0..draws {
            match ShapeKind::random(&mut rng) {
                ShapeKind::Circle => counts[0] += 1,
                ShapeKind::Triangle => counts[1] += 1,
                ShapeKind::Star => counts[2] += 1,
                ShapeKind::RareStar => counts[3] += 1,
            }
        }

        // Rare star lands near 5%
        let rare = counts[3] as f32 / draws as f32;
        assert!((0.03..=0.07).contains(&rare), "rare ratio was {}", rare);

        // The other three kinds split the remainder roughly evenly
        for &count in &counts[..3] {
            let share = count as f32 / draws as f32;
            assert!(
                (0.25..=0.40).contains(&share),
                "non-rare share was {}",
                share
            );
        }
    }

    #[test]
    fn test_random_pos_respects_margin() {
        let mut rng = StdRng::seed_from_u64(7);
        let viewport = BoardViewport::new(640.0, 480.0);

        for _ in 0..1000 {
            let pos = random_board_pos(&mut rng, &viewport, 32.0);
            assert!(pos.x >= 0.0 && pos.x < 608.0);
            assert!(pos.y >= 0.0 && pos.y < 448.0);
        }
    }

    #[test]
    fn test_rare_star_is_larger() {
        let tunables = BoardTunables::default();
        assert!(ShapeKind::RareStar.size(&tunables) > ShapeKind::Star.size(&tunables));
        assert_eq!(ShapeKind::Circle.size(&tunables), tunables.shape_size);
    }
}
