use super::punch::Punch;
use super::state::TrackerState;
use chrono::NaiveDateTime;

/// Punches in creation order.
///
/// The engine only ever appends an open punch when the last one is closed,
/// and only ever closes the last one, so at most one punch is open and it
/// is always the last element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PunchSequence {
    punches: Vec<Punch>,
}

impl PunchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.punches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.punches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Punch> {
        self.punches.iter()
    }

    pub fn as_slice(&self) -> &[Punch] {
        &self.punches
    }

    pub fn last(&self) -> Option<&Punch> {
        self.punches.last()
    }

    /// The open punch, if the sequence currently ends with one.
    pub fn open_punch(&self) -> Option<&Punch> {
        self.punches.last().filter(|p| p.is_open())
    }

    pub fn is_clocked_in(&self) -> bool {
        self.open_punch().is_some()
    }

    pub fn state(&self) -> TrackerState {
        match self.open_punch() {
            Some(p) => TrackerState::Active { since: p.in_time },
            None => TrackerState::Idle,
        }
    }

    /// Appends a new open punch. Caller must have checked the state.
    pub(crate) fn push_open(&mut self, at: NaiveDateTime) -> &Punch {
        self.punches.push(Punch::open(at));
        &self.punches[self.punches.len() - 1]
    }

    /// Closes the trailing open punch, returning it.
    pub(crate) fn close_last(&mut self, at: NaiveDateTime) -> Option<&Punch> {
        let last = self.punches.last_mut().filter(|p| p.is_open())?;
        last.out_time = Some(at);
        Some(&*last)
    }

    /// Open punches that are not in last position. Only a hand-edited file
    /// can produce these.
    pub fn dangling_open_count(&self) -> usize {
        let n = self.punches.len();
        self.punches
            .iter()
            .take(n.saturating_sub(1))
            .filter(|p| p.is_open())
            .count()
    }
}

impl From<Vec<Punch>> for PunchSequence {
    fn from(punches: Vec<Punch>) -> Self {
        Self { punches }
    }
}

impl<'a> IntoIterator for &'a PunchSequence {
    type Item = &'a Punch;
    type IntoIter = std::slice::Iter<'a, Punch>;

    fn into_iter(self) -> Self::IntoIter {
        self.punches.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn empty_sequence_is_idle() {
        let seq = PunchSequence::new();
        assert!(!seq.is_clocked_in());
        assert_eq!(seq.state(), TrackerState::Idle);
    }

    #[test]
    fn state_follows_last_punch() {
        let mut seq = PunchSequence::new();
        seq.push_open(at(8));
        assert_eq!(seq.state(), TrackerState::Active { since: at(8) });

        let closed = *seq.close_last(at(12)).unwrap();
        assert_eq!(closed.out_time, Some(at(12)));
        assert!(!seq.is_clocked_in());

        // nothing left to close
        assert!(seq.close_last(at(13)).is_none());
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn counts_open_punches_not_in_last_position() {
        let seq = PunchSequence::from(vec![
            Punch::open(at(8)),
            Punch::closed(at(9), at(10)),
            Punch::open(at(11)),
        ]);
        assert_eq!(seq.dangling_open_count(), 1);
        assert!(seq.is_clocked_in());
    }
}
