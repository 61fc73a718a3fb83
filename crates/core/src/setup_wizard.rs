//! Event setup wizard steps and progress rules.
//!
//! Defines the closed set of wizard step identifiers, the seven tracked
//! completion flags stored on `event_setup_progress`, and the completion
//! rule that derives `completed_at` from those flags. Used by the progress
//! repository and the wizard handlers.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Wizard steps
// ---------------------------------------------------------------------------

/// Every step identifier the wizard accepts on the save path.
///
/// Eight of these are *recognized* steps that appear in the progress view.
/// `Whatsapp` is a side-channel step: it can be saved like any other step
/// but is invisible to progress tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    Venues,
    RsvpConfig,
    Hotels,
    Transport,
    Communication,
    AiAssistant,
    Design,
    Whatsapp,
}

/// The recognized steps, in wizard order.
pub const RECOGNIZED_STEPS: [WizardStep; 8] = [
    WizardStep::BasicInfo,
    WizardStep::Venues,
    WizardStep::RsvpConfig,
    WizardStep::Hotels,
    WizardStep::Transport,
    WizardStep::Communication,
    WizardStep::AiAssistant,
    WizardStep::Design,
];

/// Step a freshly created progress record points at.
pub const INITIAL_STEP: WizardStep = WizardStep::BasicInfo;

impl WizardStep {
    /// Parse any step id accepted by the save endpoint (all nine values).
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "basic_info" => Ok(Self::BasicInfo),
            "venues" => Ok(Self::Venues),
            "rsvp_config" => Ok(Self::RsvpConfig),
            "hotels" => Ok(Self::Hotels),
            "transport" => Ok(Self::Transport),
            "communication" => Ok(Self::Communication),
            "ai_assistant" => Ok(Self::AiAssistant),
            "design" => Ok(Self::Design),
            "whatsapp" => Ok(Self::Whatsapp),
            _ => Err(CoreError::InvalidStep(s.to_string())),
        }
    }

    /// Parse a step id for the read and reset paths, which only know the
    /// eight recognized steps.
    pub fn parse_recognized(s: &str) -> Result<Self, CoreError> {
        match Self::parse(s)? {
            Self::Whatsapp => Err(CoreError::InvalidStep(s.to_string())),
            step => Ok(step),
        }
    }

    /// Database / wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BasicInfo => "basic_info",
            Self::Venues => "venues",
            Self::RsvpConfig => "rsvp_config",
            Self::Hotels => "hotels",
            Self::Transport => "transport",
            Self::Communication => "communication",
            Self::AiAssistant => "ai_assistant",
            Self::Design => "design",
            Self::Whatsapp => "whatsapp",
        }
    }

    /// The completion flag backing this step, if any.
    ///
    /// `AiAssistant` has no column and is always reported incomplete;
    /// `Whatsapp` never touches progress.
    pub fn flag(self) -> Option<ProgressFlag> {
        match self {
            Self::BasicInfo => Some(ProgressFlag::BasicInfo),
            Self::Venues => Some(ProgressFlag::Venues),
            Self::RsvpConfig => Some(ProgressFlag::Rsvp),
            Self::Hotels => Some(ProgressFlag::Accommodation),
            Self::Transport => Some(ProgressFlag::Transport),
            Self::Communication => Some(ProgressFlag::Communication),
            Self::Design => Some(ProgressFlag::Styling),
            Self::AiAssistant | Self::Whatsapp => None,
        }
    }

    /// Whether saving this step writes the progress record at all.
    pub fn updates_progress(self) -> bool {
        self != Self::Whatsapp
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Progress flags
// ---------------------------------------------------------------------------

/// The seven tracked completion flags of `event_setup_progress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressFlag {
    BasicInfo,
    Venues,
    Rsvp,
    Accommodation,
    Transport,
    Communication,
    Styling,
}

/// Number of tracked flags that must all be set for the setup to count as
/// complete.
pub const TRACKED_FLAG_COUNT: usize = 7;

impl ProgressFlag {
    pub const ALL: [ProgressFlag; TRACKED_FLAG_COUNT] = [
        ProgressFlag::BasicInfo,
        ProgressFlag::Venues,
        ProgressFlag::Rsvp,
        ProgressFlag::Accommodation,
        ProgressFlag::Transport,
        ProgressFlag::Communication,
        ProgressFlag::Styling,
    ];

    /// Column name in `event_setup_progress`.
    pub fn column(self) -> &'static str {
        match self {
            Self::BasicInfo => "basic_info_complete",
            Self::Venues => "venues_complete",
            Self::Rsvp => "rsvp_complete",
            Self::Accommodation => "accommodation_complete",
            Self::Transport => "transport_complete",
            Self::Communication => "communication_complete",
            Self::Styling => "styling_complete",
        }
    }
}

/// SQL boolean expression that is true when every tracked flag is set.
///
/// Built from [`ProgressFlag::column`] so the database-side completion rule
/// cannot drift from [`StepFlags::all_complete`].
pub fn all_flags_sql() -> String {
    ProgressFlag::ALL
        .iter()
        .map(|f| f.column())
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// In-memory view of the seven tracked flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepFlags {
    pub basic_info: bool,
    pub venues: bool,
    pub rsvp: bool,
    pub accommodation: bool,
    pub transport: bool,
    pub communication: bool,
    pub styling: bool,
}

impl StepFlags {
    pub fn get(&self, flag: ProgressFlag) -> bool {
        match flag {
            ProgressFlag::BasicInfo => self.basic_info,
            ProgressFlag::Venues => self.venues,
            ProgressFlag::Rsvp => self.rsvp,
            ProgressFlag::Accommodation => self.accommodation,
            ProgressFlag::Transport => self.transport,
            ProgressFlag::Communication => self.communication,
            ProgressFlag::Styling => self.styling,
        }
    }

    /// Whether a step counts as completed. Steps without a flag never do.
    pub fn is_step_complete(&self, step: WizardStep) -> bool {
        step.flag().is_some_and(|f| self.get(f))
    }

    pub fn all_complete(&self) -> bool {
        ProgressFlag::ALL.iter().all(|f| self.get(*f))
    }

    /// Completion map over the recognized steps, in wizard order.
    pub fn completion(&self) -> Vec<(WizardStep, bool)> {
        RECOGNIZED_STEPS
            .iter()
            .map(|s| (*s, self.is_step_complete(*s)))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const ALL_IDS: [&str; 9] = [
        "basic_info",
        "venues",
        "rsvp_config",
        "hotels",
        "transport",
        "communication",
        "ai_assistant",
        "design",
        "whatsapp",
    ];

    fn all_set() -> StepFlags {
        StepFlags {
            basic_info: true,
            venues: true,
            rsvp: true,
            accommodation: true,
            transport: true,
            communication: true,
            styling: true,
        }
    }

    // -- WizardStep --

    #[test]
    fn parse_accepts_all_nine_ids() {
        for id in ALL_IDS {
            let step = WizardStep::parse(id).unwrap();
            assert_eq!(step.as_str(), id);
        }
    }

    #[test]
    fn parse_rejects_unknown_ids() {
        assert_matches!(WizardStep::parse("styling"), Err(CoreError::InvalidStep(s)) if s == "styling");
        assert!(WizardStep::parse("").is_err());
        assert!(WizardStep::parse("BASIC_INFO").is_err());
    }

    #[test]
    fn parse_recognized_rejects_whatsapp() {
        assert_matches!(
            WizardStep::parse_recognized("whatsapp"),
            Err(CoreError::InvalidStep(_))
        );
        for step in RECOGNIZED_STEPS {
            assert_eq!(WizardStep::parse_recognized(step.as_str()).unwrap(), step);
        }
    }

    #[test]
    fn serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&WizardStep::RsvpConfig).unwrap();
        assert_eq!(json, "\"rsvp_config\"");
    }

    #[test]
    fn only_seven_steps_have_flags() {
        let flagged: Vec<_> = ALL_IDS
            .iter()
            .filter_map(|id| WizardStep::parse(id).unwrap().flag())
            .collect();
        assert_eq!(flagged.len(), TRACKED_FLAG_COUNT);
        assert_eq!(WizardStep::AiAssistant.flag(), None);
        assert_eq!(WizardStep::Whatsapp.flag(), None);
    }

    #[test]
    fn hotels_and_design_map_to_renamed_columns() {
        assert_eq!(
            WizardStep::Hotels.flag().unwrap().column(),
            "accommodation_complete"
        );
        assert_eq!(WizardStep::Design.flag().unwrap().column(), "styling_complete");
        assert_eq!(WizardStep::RsvpConfig.flag().unwrap().column(), "rsvp_complete");
    }

    #[test]
    fn whatsapp_does_not_update_progress() {
        assert!(!WizardStep::Whatsapp.updates_progress());
        assert!(WizardStep::AiAssistant.updates_progress());
    }

    // -- StepFlags --

    #[test]
    fn default_flags_are_all_false() {
        let flags = StepFlags::default();
        assert!(flags.completion().iter().all(|(_, done)| !done));
        assert!(!flags.all_complete());
    }

    #[test]
    fn completion_lists_recognized_steps_in_order() {
        let steps: Vec<_> = StepFlags::default()
            .completion()
            .into_iter()
            .map(|(s, _)| s)
            .collect();
        assert_eq!(steps, RECOGNIZED_STEPS.to_vec());
    }

    #[test]
    fn ai_assistant_is_never_complete() {
        let flags = all_set();
        assert!(!flags.is_step_complete(WizardStep::AiAssistant));
        assert!(flags.is_step_complete(WizardStep::Design));
    }

    #[test]
    fn all_complete_requires_every_flag() {
        let mut flags = all_set();
        assert!(flags.all_complete());
        flags.venues = false;
        assert!(!flags.all_complete());
    }

    #[test]
    fn completion_reflects_each_flag() {
        let flags = StepFlags {
            accommodation: true,
            styling: true,
            ..Default::default()
        };
        let done: Vec<_> = flags
            .completion()
            .into_iter()
            .filter(|(_, complete)| *complete)
            .map(|(step, _)| step)
            .collect();
        assert_eq!(done, vec![WizardStep::Hotels, WizardStep::Design]);
    }

    #[test]
    fn all_flags_sql_names_every_column() {
        let sql = all_flags_sql();
        for f in ProgressFlag::ALL {
            assert!(sql.contains(f.column()));
        }
        assert_eq!(sql.matches(" AND ").count(), TRACKED_FLAG_COUNT - 1);
    }
}
