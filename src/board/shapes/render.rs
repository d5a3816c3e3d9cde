use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::board::motion::Motion;
use crate::board::shapes::{BoardShape, ShapeKind};
use crate::board::tunables::BoardTunables;
use crate::camera::BoardViewport;

/// Rare stars ignore the rolled color and always render gold
pub const RARE_STAR_COLOR: Color = Color::srgb(0.98, 0.8, 0.08);

/// Backdrop gradient, teal on the left fading to yellow on the right
const BACKDROP_LEFT: Color = Color::srgb(0.8, 0.984, 0.945);
const BACKDROP_RIGHT: Color = Color::srgb(0.996, 0.941, 0.541);

const STAR_POINTS: usize = 5;
/// Inner-rim radius as a fraction of the outer radius
const STAR_INNER_RATIO: f32 = 0.45;

/// Shapes render above the backdrop; ids stack newer shapes on top, like
/// insertion order in the original toy
const SHAPE_BASE_Z: f32 = 1.0;
const SHAPE_Z_PER_ID: f32 = 1e-3;

/// Shared mesh handles, one per shape kind (the rare star reuses the star
/// mesh at a larger scale)
#[derive(Resource)]
pub struct ShapeMeshes {
    pub circle: Handle<Mesh>,
    pub triangle: Handle<Mesh>,
    pub star: Handle<Mesh>,
}

/// Build the shared shape meshes once at startup
pub fn setup_shape_meshes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    tunables: Res<BoardTunables>,
) {
    let half = tunables.shape_size * 0.5;

    commands.insert_resource(ShapeMeshes {
        circle: meshes.add(Circle::new(half)),
        triangle: meshes.add(Triangle2d::new(
            Vec2::new(0.0, half),
            Vec2::new(-half, -half),
            Vec2::new(half, -half),
        )),
        star: meshes.add(star_mesh(half, half * STAR_INNER_RATIO, STAR_POINTS)),
    });
}

/// Triangle-fan star mesh: a center vertex plus a rim that alternates
/// between the outer and inner radius, starting from the top point
pub fn star_mesh(outer_radius: f32, inner_radius: f32, points: usize) -> Mesh {
    let rim = points * 2;

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(rim + 1);
    positions.push([0.0, 0.0, 0.0]);
    for k in 0..rim {
        let angle = std::f32::consts::FRAC_PI_2 + k as f32 * std::f32::consts::PI / points as f32;
        let radius = if k % 2 == 0 { outer_radius } else { inner_radius };
        positions.push([radius * angle.cos(), radius * angle.sin(), 0.0]);
    }

    let normals = vec![[0.0, 0.0, 1.0]; rim + 1];
    let uvs: Vec<[f32; 2]> = positions
        .iter()
        .map(|p| {
            [
                p[0] / (2.0 * outer_radius) + 0.5,
                0.5 - p[1] / (2.0 * outer_radius),
            ]
        })
        .collect();

    let mut indices: Vec<u32> = Vec::with_capacity(rim * 3);
    for k in 0..rim as u32 {
        indices.extend_from_slice(&[0, k + 1, (k + 1) % rim as u32 + 1]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

/// System: give freshly spawned shapes their mesh, material, and transform
pub fn attach_shape_visuals(
    mut commands: Commands,
    shape_meshes: Option<Res<ShapeMeshes>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    viewport: Res<BoardViewport>,
    tunables: Res<BoardTunables>,
    shapes: Query<(Entity, &BoardShape, &Motion), Added<BoardShape>>,
) {
    let Some(shape_meshes) = shape_meshes else {
        return;
    };

    for (entity, shape, motion) in &shapes {
        let (mesh, color, scale) = match shape.kind {
            ShapeKind::Circle => (shape_meshes.circle.clone(), shape.color, 1.0),
            ShapeKind::Triangle => (shape_meshes.triangle.clone(), shape.color, 1.0),
            ShapeKind::Star => (shape_meshes.star.clone(), shape.color, 1.0),
            ShapeKind::RareStar => (
                shape_meshes.star.clone(),
                RARE_STAR_COLOR,
                tunables.rare_star_scale,
            ),
        };

        commands.entity(entity).insert((
            Mesh2d(mesh),
            MeshMaterial2d(materials.add(ColorMaterial::from(color))),
            Transform::from_translation(shape_translation(shape, motion, &viewport, &tunables))
                .with_scale(Vec3::splat(scale)),
        ));
    }
}

/// System: mirror board-space motion into world transforms
pub fn sync_shape_transforms(
    viewport: Res<BoardViewport>,
    tunables: Res<BoardTunables>,
    mut shapes: Query<(&BoardShape, &Motion, &mut Transform)>,
) {
    for (shape, motion, mut transform) in &mut shapes {
        transform.translation = shape_translation(shape, motion, &viewport, &tunables);
    }
}

/// Motion tracks the top-left corner of a shape's bounding square (the
/// meshes are centered), so rendering offsets by the half size
fn shape_translation(
    shape: &BoardShape,
    motion: &Motion,
    viewport: &BoardViewport,
    tunables: &BoardTunables,
) -> Vec3 {
    let half = shape.kind.size(tunables) * 0.5;
    let center = motion.position() + Vec2::splat(half);
    viewport.board_to_world(center, SHAPE_BASE_Z + shape.id.0 as f32 * SHAPE_Z_PER_ID)
}

#[derive(Component)]
pub struct Backdrop;

/// Spawn the full-window gradient quad behind the shapes
pub fn setup_backdrop(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn((
        Backdrop,
        Mesh2d(meshes.add(gradient_quad(BACKDROP_LEFT, BACKDROP_RIGHT))),
        MeshMaterial2d(materials.add(ColorMaterial::from(Color::WHITE))),
        Transform::default(),
    ));
}

/// Unit quad with vertex colors blending from `left` to `right`; scaled up
/// to the window size by [`resize_backdrop`]
fn gradient_quad(left: Color, right: Color) -> Mesh {
    let positions: Vec<[f32; 3]> = vec![
        [-0.5, -0.5, 0.0],
        [0.5, -0.5, 0.0],
        [0.5, 0.5, 0.0],
        [-0.5, 0.5, 0.0],
    ];
    let normals = vec![[0.0, 0.0, 1.0]; 4];
    let uvs: Vec<[f32; 2]> = vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    let left = left.to_linear().to_f32_array();
    let right = right.to_linear().to_f32_array();
    let colors: Vec<[f32; 4]> = vec![left, right, right, left];

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
        .with_inserted_indices(Indices::U32(vec![0, 1, 2, 0, 2, 3]))
}

/// System: stretch the backdrop whenever the viewport changes
pub fn resize_backdrop(
    viewport: Res<BoardViewport>,
    mut backdrops: Query<&mut Transform, With<Backdrop>>,
) {
    if !viewport.is_changed() {
        return;
    }
    for mut transform in &mut backdrops {
        transform.scale = Vec3::new(viewport.width, viewport.height, 1.0);
    }
}
