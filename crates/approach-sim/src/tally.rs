//! Running fleet totals kept by the engine.

/// Landing and collision counts since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetTally {
    pub landed: u32,
    pub collisions: u32,
}
