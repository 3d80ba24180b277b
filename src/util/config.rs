use serde::{Deserialize, Serialize};

/// Numeric constants of a run. Supplied by the configuration collaborator,
/// immutable for the run's duration; every generator and scoring call
/// receives it explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Side length of the (square) chair footprint
    pub chair_size: i64,
    /// Gap between a desk edge and its chair
    pub chair_desk_gap: i64,
    /// Default door width along its wall
    pub door_width: i64,
    /// Inward depth of the door buffer obstacle
    pub door_buffer_depth: i64,
    /// Additional corridor depth kept free in front of the door buffer
    pub door_clear_depth: i64,
    /// Along-wall gap required between equipment and desks on the same wall
    pub desk_side_clearance: i64,
    /// Along-wall gap between successive equipment pieces
    pub equipment_clearance: i64,
    /// Minimum passage width where two people pass each other
    pub min_passage_width: i64,
    /// Recommended main passage width
    pub recommended_passage_width: i64,
    /// Minimum distance between a face-to-face block's chairs and the walls behind them
    pub min_back_clearance: i64,
    /// Probe stride of the equipment wall walk
    pub equipment_probe: i64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        PlanConfig {
            chair_size: 700,
            chair_desk_gap: 5,
            door_width: 850,
            door_buffer_depth: 900,
            door_clear_depth: 900,
            desk_side_clearance: 200,
            equipment_clearance: 100,
            min_passage_width: 1200,
            recommended_passage_width: 1500,
            min_back_clearance: 850,
            equipment_probe: 50,
        }
    }
}

impl PlanConfig {
    /// Depth a chair adds behind a desk: chair footprint plus the desk gap.
    pub fn chair_reach(&self) -> i64 {
        self.chair_size + self.chair_desk_gap
    }
}
