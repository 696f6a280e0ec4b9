use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
}

/// Which member is selected and which one the details panel shows.
///
/// Selecting starts a transition; the panel catches up on [`swap`](Self::swap)
/// and new selections are accepted again after [`settle`](Self::settle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRoster {
    members: Vec<TeamMember>,
    active: usize,
    displayed: usize,
    transitioning: bool,
}

impl TeamRoster {
    pub fn new(members: Vec<TeamMember>) -> Self {
        Self {
            members,
            active: 0,
            displayed: 0,
            transitioning: false,
        }
    }

    /// Returns `true` when the click starts a transition. Clicks on the active
    /// member, on an unknown index, or during a transition are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if self.transitioning || index == self.active || index >= self.members.len() {
            return false;
        }
        self.active = index;
        self.transitioning = true;
        true
    }

    /// The details panel now shows the active member.
    pub fn swap(&mut self) {
        self.displayed = self.active;
    }

    pub fn settle(&mut self) {
        self.transitioning = false;
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn displayed(&self) -> Option<&TeamMember> {
        self.members.get(self.displayed)
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Selected but not yet shown in the details panel.
    pub fn is_swapping(&self) -> bool {
        self.active != self.displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> TeamMember {
        TeamMember {
            name: name.into(),
            role: "Designer".into(),
            bio: format!("{name} bio"),
            image: format!("images/team/{name}.png"),
        }
    }

    fn roster() -> TeamRoster {
        TeamRoster::new(vec![member("ana"), member("ben"), member("cy")])
    }

    #[test]
    fn test_selection_runs_through_transition() {
        let mut roster = roster();
        assert!(roster.select(1));
        assert!(roster.is_transitioning());
        assert!(roster.is_swapping());
        assert_eq!(roster.displayed().unwrap().name, "ana");

        roster.swap();
        assert!(!roster.is_swapping());
        assert!(roster.is_transitioning());
        assert_eq!(roster.displayed().unwrap().name, "ben");
        roster.settle();
        assert!(!roster.is_transitioning());
    }

    #[test]
    fn test_clicks_during_transition_are_ignored() {
        let mut roster = roster();
        assert!(roster.select(1));
        assert!(!roster.select(2));
        assert_eq!(roster.active(), 1);
    }

    #[test]
    fn test_active_and_unknown_members_are_ignored() {
        let mut roster = roster();
        assert!(!roster.select(0));
        assert!(!roster.select(9));
        assert!(!roster.is_transitioning());
    }
}
