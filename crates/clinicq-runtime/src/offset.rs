//! Offset calculation

use serde::{Deserialize, Serialize};

/// Where a patient stands relative to the currently served position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueStanding {
    /// Position is before the current one
    Served,
    /// Currently being served
    Serving,
    /// Still waiting
    Waiting,
}

/// Derives a patient's signed distance from the current queue position
pub struct OffsetCalculator;

impl OffsetCalculator {
    /// `patient_position - current_queue_position`
    pub fn offset(patient_position: i64, current_queue_position: i64) -> i64 {
        patient_position.saturating_sub(current_queue_position)
    }

    /// Classify an offset
    pub fn standing(offset: i64) -> QueueStanding {
        match offset {
            o if o < 0 => QueueStanding::Served,
            0 => QueueStanding::Serving,
            _ => QueueStanding::Waiting,
        }
    }

    /// Patients with a negative offset never receive a message
    pub fn is_excluded(offset: i64) -> bool {
        offset < 0
    }
}
