use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardViewport>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, update_viewport_resource);
    }
}

/// Logical size of the board, kept in sync with the primary window.
///
/// Shapes animate in *board space*: origin at the top-left corner of the
/// window, +x right, +y down, one unit per logical pixel. This matches the
/// coordinate system pointer events arrive in, so flee math needs no
/// conversion. [`BoardViewport::board_to_world`] maps board space onto the
/// centered, y-up world the 2D camera renders.
#[derive(Resource, Debug, Clone, Copy)]
pub struct BoardViewport {
    pub width: f32,
    pub height: f32,
}

impl Default for BoardViewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl BoardViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert a board-space point to world coordinates.
    ///
    /// The default 2D camera maps one world unit to one logical pixel with
    /// the origin at the window center, so this is a translation plus a
    /// y flip.
    pub fn board_to_world(&self, pos: Vec2, z: f32) -> Vec3 {
        Vec3::new(pos.x - self.width * 0.5, self.height * 0.5 - pos.y, z)
    }
}

#[derive(Component)]
pub struct MainCamera;

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Refresh [`BoardViewport`] when the window is resized
fn update_viewport_resource(mut viewport: ResMut<BoardViewport>, windows: Query<&Window>) {
    let Ok(window) = windows.single() else {
        return;
    };

    let (width, height) = (window.width(), window.height());
    if (width - viewport.width).abs() > 0.5 || (height - viewport.height).abs() > 0.5 {
        viewport.width = width;
        viewport.height = height;
        info!("Viewport updated: {}x{}", width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_to_world_corners() {
        let viewport = BoardViewport::new(800.0, 600.0);

        // Top-left of the board lands at the top-left of the world view
        assert_eq!(
            viewport.board_to_world(Vec2::ZERO, 0.0),
            Vec3::new(-400.0, 300.0, 0.0)
        );

        // Bottom-right corner
        assert_eq!(
            viewport.board_to_world(Vec2::new(800.0, 600.0), 0.0),
            Vec3::new(400.0, -300.0, 0.0)
        );

        // Center maps to the origin
        assert_eq!(
            viewport.board_to_world(Vec2::new(400.0, 300.0), 2.0),
            Vec3::new(0.0, 0.0, 2.0)
        );
    }

    #[test]
    fn test_board_space_y_points_down() {
        let viewport = BoardViewport::new(100.0, 100.0);
        let high = viewport.board_to_world(Vec2::new(50.0, 10.0), 0.0);
        let low = viewport.board_to_world(Vec2::new(50.0, 90.0), 0.0);
        assert!(high.y > low.y);
    }
}
