use bevy::prelude::*;
use serde::Deserialize;

/// Baked-in override file. Ships with the binary so the toy stays a single
/// artifact; edit and rebuild to retune.
const TUNABLES_JSON: &str = include_str!("../../assets/tunables.json");

/// Board behavior knobs. All distances are logical pixels, durations are
/// seconds.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardTunables {
    /// Shapes placed when the board first appears
    pub initial_count: usize,
    /// Live shapes beyond this are evicted, oldest first
    pub max_shapes: usize,
    /// Seconds between edge spawns
    pub spawn_interval_secs: f32,
    /// How far outside the window an entering shape starts
    pub edge_offset: f32,
    /// Entry tween length
    pub entry_duration_secs: f32,
    /// Drift hold-off for shapes that entered from an edge
    pub entry_drift_delay_secs: f32,
    /// Per-axis drift offset bound (±)
    pub drift_range: f32,
    pub drift_duration_min_secs: f32,
    pub drift_duration_max_secs: f32,
    /// Pointer distance below which a shape flees
    pub flee_radius: f32,
    /// How far a flee push moves the shape
    pub flee_push: f32,
    pub flee_duration_secs: f32,
    /// Edge length of the square a shape is drawn in
    pub shape_size: f32,
    /// Rare stars render this much larger
    pub rare_star_scale: f32,
}

impl Default for BoardTunables {
    fn default() -> Self {
        BoardTunables {
            initial_count: 20,
            max_shapes: 100,
            spawn_interval_secs: 5.0,
            edge_offset: 50.0,
            entry_duration_secs: 0.7,
            entry_drift_delay_secs: 0.8,
            drift_range: 40.0,
            drift_duration_min_secs: 3.0,
            drift_duration_max_secs: 6.0,
            flee_radius: 100.0,
            flee_push: 50.0,
            flee_duration_secs: 0.3,
            shape_size: 32.0,
            rare_star_scale: 1.5,
        }
    }
}

impl BoardTunables {
    /// Parse the embedded override file
    pub fn load() -> Result<Self, String> {
        serde_json::from_str(TUNABLES_JSON)
            .map_err(|e| format!("Failed to parse embedded tunables.json: {}", e))
    }

    /// Embedded overrides, or defaults if the file doesn't parse
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(tunables) => tunables,
            Err(err) => {
                warn!("{} - falling back to defaults", err);
                BoardTunables::default()
            }
        }
    }

    pub fn drift_duration_range(&self) -> (f32, f32) {
        (self.drift_duration_min_secs, self.drift_duration_max_secs)
    }
}
