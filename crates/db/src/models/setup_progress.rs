//! Setup wizard progress model.

use serde::Serialize;
use sqlx::FromRow;
use vowplan_core::setup_wizard::{StepFlags, WizardStep, INITIAL_STEP};
use vowplan_core::types::{DbId, Timestamp};

/// A row from the `event_setup_progress` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupProgress {
    pub id: DbId,
    pub event_id: DbId,
    pub current_step: String,
    pub basic_info_complete: bool,
    pub venues_complete: bool,
    pub rsvp_complete: bool,
    pub accommodation_complete: bool,
    pub transport_complete: bool,
    pub communication_complete: bool,
    pub styling_complete: bool,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SetupProgress {
    pub fn flags(&self) -> StepFlags {
        StepFlags {
            basic_info: self.basic_info_complete,
            venues: self.venues_complete,
            rsvp: self.rsvp_complete,
            accommodation: self.accommodation_complete,
            transport: self.transport_complete,
            communication: self.communication_complete,
            styling: self.styling_complete,
        }
    }

    /// The current step, falling back to the first step for unknown values.
    pub fn current_step(&self) -> WizardStep {
        WizardStep::parse_recognized(&self.current_step).unwrap_or(INITIAL_STEP)
    }
}
