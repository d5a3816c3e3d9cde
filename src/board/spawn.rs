use bevy::prelude::*;
use rand::Rng;

use crate::board::motion::{DriftState, Entering, Motion};
use crate::board::shapes::{
    BoardShape, ShapeId, ShapeIdGen, ShapeKind, random_board_pos, random_color,
};
use crate::board::tunables::BoardTunables;
use crate::camera::BoardViewport;

/// Window side a new shape enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// Uniform random side
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..4) {
            0 => Side::Left,
            1 => Side::Right,
            2 => Side::Top,
            _ => Side::Bottom,
        }
    }
}

/// Off-screen entry point for a side, aligned with the chosen target so the
/// shape flies straight in
pub fn entry_point(side: Side, target: Vec2, viewport: &BoardViewport, edge_offset: f32) -> Vec2 {
    match side {
        Side::Left => Vec2::new(-edge_offset, target.y),
        Side::Right => Vec2::new(viewport.width + edge_offset, target.y),
        Side::Top => Vec2::new(target.x, -edge_offset),
        Side::Bottom => Vec2::new(target.x, viewport.height + edge_offset),
    }
}

/// Repeating timer driving edge spawns
#[derive(Resource)]
pub struct SpawnTimer(pub Timer);

/// System: populate the board with the initial batch of shapes (Startup)
pub fn seed_board(
    mut commands: Commands,
    tunables: Res<BoardTunables>,
    mut ids: ResMut<ShapeIdGen>,
    windows: Query<&Window>,
) {
    // Headless guard: without a window there is nothing to place shapes in
    let Ok(window) = windows.single() else {
        return;
    };
    let viewport = BoardViewport::new(window.width(), window.height());
    let mut rng = rand::rng();

    for _ in 0..tunables.initial_count {
        let pos = random_board_pos(&mut rng, &viewport, tunables.shape_size);
        commands.spawn((
            BoardShape {
                id: ids.next_id(),
                kind: ShapeKind::random(&mut rng),
                color: random_color(&mut rng),
            },
            Motion::new(pos),
            DriftState::immediate(),
        ));
    }

    info!("Seeded board with {} shapes", tunables.initial_count);
}

/// System: every spawn interval, float one new shape in from a random edge
pub fn spawn_from_edges(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<SpawnTimer>,
    tunables: Res<BoardTunables>,
    mut ids: ResMut<ShapeIdGen>,
    windows: Query<&Window>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let viewport = BoardViewport::new(window.width(), window.height());
    let mut rng = rand::rng();

    let side = Side::random(&mut rng);
    let target = random_board_pos(&mut rng, &viewport, tunables.shape_size);
    let entry = entry_point(side, target, &viewport, tunables.edge_offset);
    let id = ids.next_id();

    commands.spawn((
        BoardShape {
            id,
            kind: ShapeKind::random(&mut rng),
            color: random_color(&mut rng),
        },
        Motion::new(entry),
        Entering { target },
        DriftState::delayed(tunables.entry_drift_delay_secs),
    ));

    info!("Shape {} entering from {:?}", id.0, side);
}

/// System: keep only the newest `max_shapes` shapes, despawning the oldest
pub fn enforce_shape_cap(
    mut commands: Commands,
    tunables: Res<BoardTunables>,
    shapes: Query<(Entity, &BoardShape)>,
) {
    let excess = shapes.iter().count().saturating_sub(tunables.max_shapes);
    if excess == 0 {
        return;
    }

    let mut by_age: Vec<(ShapeId, Entity)> = shapes.iter().map(|(e, s)| (s.id, e)).collect();
    by_age.sort_by_key(|(id, _)| *id);

    for (id, entity) in by_age.into_iter().take(excess) {
        commands.entity(entity).despawn();
        info!("Evicted shape {}", id.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_viewport() -> BoardViewport {
        BoardViewport::new(800.0, 600.0)
    }

    #[test]
    fn test_entry_point_left() {
        let target = Vec2::new(321.0, 123.0);
        let entry = entry_point(Side::Left, target, &test_viewport(), 50.0);
        assert_eq!(entry, Vec2::new(-50.0, 123.0));
    }

    #[test]
    fn test_entry_point_right() {
        let target = Vec2::new(321.0, 123.0);
        let entry = entry_point(Side::Right, target, &test_viewport(), 50.0);
        assert_eq!(entry, Vec2::new(850.0, 123.0));
    }

    #[test]
    fn test_entry_point_top() {
        let target = Vec2::new(321.0, 123.0);
        let entry = entry_point(Side::Top, target, &test_viewport(), 50.0);
        assert_eq!(entry, Vec2::new(321.0, -50.0));
    }

    #[test]
    fn test_entry_point_bottom() {
        let target = Vec2::new(321.0, 123.0);
        let entry = entry_point(Side::Bottom, target, &test_viewport(), 50.0);
        assert_eq!(entry, Vec2::new(321.0, 650.0));
    }

    #[test]
    fn test_all_sides_reachable() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        let mut seen = [false; 4];
        for _ in 0..200 {
            match Side::random(&mut rng) {
                Side::Left => seen[0] = true,
                Side::Right => seen[1] = true,
                Side::Top => seen[2] = true,
                Side::Bottom => seen[3] = true,
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    fn cap_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(BoardTunables::default())
            .init_resource::<ShapeIdGen>()
            .add_systems(Update, enforce_shape_cap);
        app
    }

    fn spawn_plain_shape(app: &mut App) -> Entity {
        let id = app.world_mut().resource_mut::<ShapeIdGen>().next_id();
        app.world_mut()
            .spawn((
                BoardShape {
                    id,
                    kind: ShapeKind::Circle,
                    color: Color::WHITE,
                },
                Motion::new(Vec2::ZERO),
            ))
            .id()
    }

    #[test]
    fn test_cap_keeps_only_newest_shapes() {
        let mut app = cap_test_app();

        let mut entities = Vec::new();
        for _ in 0..120 {
            entities.push(spawn_plain_shape(&mut app));
        }
        app.update();

        let world = app.world_mut();
        let mut query = world.query::<&BoardShape>();
        let mut ids: Vec<u64> = query.iter(world).map(|s| s.id.0).collect();
        ids.sort_unstable();

        // Exactly the cap survives, and it is the 100 newest ids (21..=120)
        assert_eq!(ids.len(), 100);
        assert_eq!(ids.first(), Some(&21));
        assert_eq!(ids.last(), Some(&120));

        // The evicted entities are gone for good: no motion ticks, no nothing
        for &evicted in &entities[..20] {
            assert!(world.get_entity(evicted).is_err());
        }
    }

    #[test]
    fn test_cap_is_idempotent_below_limit() {
        let mut app = cap_test_app();

        for _ in 0..50 {
            spawn_plain_shape(&mut app);
        }
        app.update();
        app.update();

        let world = app.world_mut();
        let mut query = world.query::<&BoardShape>();
        assert_eq!(query.iter(world).count(), 50);
    }

    #[test]
    fn test_count_never_exceeds_cap_across_spawn_bursts() {
        let mut app = cap_test_app();

        for _ in 0..10 {
            for _ in 0..30 {
                spawn_plain_shape(&mut app);
            }
            app.update();

            let world = app.world_mut();
            let mut query = world.query::<&BoardShape>();
            assert!(query.iter(world).count() <= 100);
        }

        // Ids stay unique throughout
        let world = app.world_mut();
        let mut query = world.query::<&BoardShape>();
        let mut ids: Vec<u64> = query.iter(world).map(|s| s.id.0).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }
}
