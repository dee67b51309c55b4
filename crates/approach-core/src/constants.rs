//! Simulation constants and tuning parameters.

// --- Airspace ---

/// Airspace width and height in tiles.
pub const GRID_SIZE: u32 = 30;

/// Margin kept between clamped coordinates and the far airspace edge.
pub const EDGE_MARGIN: f64 = 0.01;

// --- Runway ---

/// Column the runway occupies (centre of the airspace).
pub const RUNWAY_COL: u32 = GRID_SIZE / 2;

/// First row of the runway strip.
pub const RUNWAY_START_ROW: u32 = GRID_SIZE / 2 - 1;

/// Last row of the runway strip (inclusive).
pub const RUNWAY_END_ROW: u32 = GRID_SIZE / 2 + 1;

/// Landing detection radius around the runway centre (tiles).
pub const LANDING_RADIUS: f64 = 1.0;

// --- Separation ---

/// Squared distance below which two aircraft collide (tiles²).
pub const COLLISION_DISTANCE_SQ: f64 = 1.0;

/// Minimum safe separation (tiles).
pub const SAFE_DISTANCE: f64 = 4.0;

/// Squared safe separation, compared against squared pair distance.
pub const SAFE_DISTANCE_SQ: f64 = SAFE_DISTANCE * SAFE_DISTANCE;

// --- Routing ---

/// Remaining distance below which an aircraft snaps onto its waypoint (tiles).
/// Snapping avoids both overshoot and oscillating around the target.
pub const WAYPOINT_ARRIVAL_EPSILON: f64 = 0.1;

// --- Timing ---

/// Fixed elapsed time per tick (seconds).
pub const TICK_INTERVAL_SECS: f64 = 0.1;

/// Longest wall-clock gap the real-time host will try to catch up on (seconds).
pub const MAX_CATCH_UP_SECS: f64 = 0.5;

// --- Operator controls ---

/// Default fleet speed (tiles per second).
pub const DEFAULT_SPEED_TILES_PER_SEC: f64 = 0.5;

/// Default spawn rate (aircraft per minute).
pub const DEFAULT_SPAWN_RATE_PER_MIN: u32 = 5;

/// Upper bound accepted for the speed control.
pub const MAX_SPEED_TILES_PER_SEC: f64 = 10.0;

/// Upper bound accepted for the spawn-rate control.
pub const MAX_SPAWN_RATE_PER_MIN: u32 = 600;

// --- Identity ---

/// Prefix of every generated callsign.
pub const CALLSIGN_PREFIX: &str = "FL";
