//! Airspace and runway geometry. Fixed once the airspace is built.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::SpawnEdge;
use crate::types::Position;

/// A vertical runway strip occupying one column over a span of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runway {
    pub col: u32,
    pub start_row: u32,
    /// Inclusive.
    pub end_row: u32,
}

/// The square airspace and its runway.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Airspace {
    /// Width and height in tiles.
    pub size: u32,
    pub runway: Runway,
}

impl Runway {
    /// Runway centre line midpoint.
    pub fn center(&self) -> Position {
        Position::new(
            self.col as f64,
            (self.start_row + self.end_row) as f64 / 2.0,
        )
    }

    /// Whether `y` lies along the strip, extended by `margin` at both ends.
    pub fn spans_row(&self, y: f64, margin: f64) -> bool {
        y >= self.start_row as f64 - margin && y <= self.end_row as f64 + margin
    }

    /// Whether `p` falls on one of the runway's tiles.
    pub fn covers_tile(&self, p: &Position) -> bool {
        let col = p.x.floor();
        let row = p.y.floor();
        col == self.col as f64 && row >= self.start_row as f64 && row <= self.end_row as f64
    }

    /// Loose check used to tell the operator a waypoint points at the runway.
    pub fn is_near(&self, p: &Position, margin: f64) -> bool {
        (p.x - self.col as f64).abs() <= margin && self.spans_row(p.y, margin)
    }
}

impl Default for Runway {
    fn default() -> Self {
        Self {
            col: RUNWAY_COL,
            start_row: RUNWAY_START_ROW,
            end_row: RUNWAY_END_ROW,
        }
    }
}

impl Airspace {
    /// Largest coordinate an aircraft or waypoint may take.
    pub fn max_coord(&self) -> f64 {
        self.size as f64 - EDGE_MARGIN
    }

    /// Clamp a point into the airspace, keeping clear of the far edges.
    pub fn clamp(&self, p: Position) -> Position {
        let max = self.max_coord();
        Position::new(p.x.clamp(0.0, max), p.y.clamp(0.0, max))
    }

    /// Entry point on `edge`, `along` ∈ [0, 1) giving the offset along it.
    /// Bottom and right entries sit on the last row/column of tiles.
    pub fn spawn_point(&self, edge: SpawnEdge, along: f64) -> Position {
        let extent = self.size as f64;
        let last = extent - 1.0;
        let offset = along * extent;
        match edge {
            SpawnEdge::Left => Position::new(0.0, offset),
            SpawnEdge::Top => Position::new(offset, 0.0),
            SpawnEdge::Bottom => Position::new(offset, last),
            SpawnEdge::Right => Position::new(last, offset),
        }
    }
}

impl Default for Airspace {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            runway: Runway::default(),
        }
    }
}
