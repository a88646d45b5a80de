use chrono::NaiveDateTime;

/// Clock state, always derived from the punch sequence and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Idle,
    Active { since: NaiveDateTime },
}

impl TrackerState {
    pub fn is_active(&self) -> bool {
        matches!(self, TrackerState::Active { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrackerState::Idle => "⏹ Not clocked in",
            TrackerState::Active { .. } => "✅ Clocked In",
        }
    }
}
