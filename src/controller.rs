//! Check-in form state machine.
//!
//! The page is a single form whose lifecycle is captured by [`FormState`].
//! Transitions are plain methods; the ones that need the store hand back a
//! [`Command`], which [`FormController::run`] carries out and feeds back in.
//! Each page request mounts a fresh controller, so the roster is fetched
//! exactly once per mount and never cached.

use crate::attendance;
use crate::models::{Member, check_in};
use crate::store::AttendanceStore;

pub const ROSTER_LOAD_FAILED: &str = "Failed to load member list";
pub const SELECTION_REQUIRED: &str = "Please select a member";
pub const CHECK_IN_FAILED: &str = "Check-in failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    LoadingRoster,
    RosterLoaded {
        roster: Vec<Member>,
        selection: Option<Member>,
        notice: Option<String>,
    },
    Submitting {
        roster: Vec<Member>,
        selection: Member,
    },
    Succeeded {
        roster: Vec<Member>,
        member: Member,
        checked_in_at: String,
    },
}

/// Work the controller needs done before it can make its next transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchRoster,
    AppendCheckIn(String),
}

#[derive(Debug)]
pub struct FormController {
    state: FormState,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn into_state(self) -> FormState {
        self.state
    }

    /// Mount and load the roster in one go.
    pub async fn load(store: &dyn AttendanceStore) -> Self {
        let mut controller = Self::new();
        let command = controller.mount();
        controller.run(store, command).await;
        controller
    }

    /// Select `name` and submit it, running the resulting check-in if any.
    pub async fn submit_name(&mut self, store: &dyn AttendanceStore, name: &str) {
        self.select(name);
        let command = self.submit();
        self.run(store, command).await;
    }

    /// Carry out a command against the store and apply its outcome.
    pub async fn run(&mut self, store: &dyn AttendanceStore, command: Option<Command>) {
        match command {
            None => {}
            Some(Command::FetchRoster) => match attendance::fetch_members(store).await {
                Ok(members) => self.roster_loaded(members),
                Err(_) => self.roster_failed(),
            },
            Some(Command::AppendCheckIn(name)) => {
                match attendance::append_check_in(store, &name).await {
                    Ok(_) => self.check_in_succeeded(check_in::display_now()),
                    Err(e) => self.check_in_failed(Some(e.public_message())),
                }
            }
        }
    }

    pub fn mount(&mut self) -> Option<Command> {
        if self.state != FormState::Idle {
            return None;
        }
        self.state = FormState::LoadingRoster;
        Some(Command::FetchRoster)
    }

    pub fn roster_loaded(&mut self, roster: Vec<Member>) {
        if self.state == FormState::LoadingRoster {
            self.state = FormState::RosterLoaded {
                roster,
                selection: None,
                notice: None,
            };
        }
    }

    /// A failed fetch is not fatal: the form renders with an empty roster.
    pub fn roster_failed(&mut self) {
        if self.state == FormState::LoadingRoster {
            self.state = FormState::RosterLoaded {
                roster: Vec::new(),
                selection: None,
                notice: Some(ROSTER_LOAD_FAILED.to_string()),
            };
        }
    }

    /// Names not in the loaded roster leave nothing selected.
    pub fn select(&mut self, name: &str) {
        if let FormState::RosterLoaded {
            roster, selection, ..
        } = &mut self.state
        {
            *selection = roster.iter().find(|m| m.name == name).cloned();
        }
    }

    pub fn submit(&mut self) -> Option<Command> {
        match std::mem::replace(&mut self.state, FormState::Idle) {
            FormState::RosterLoaded {
                roster,
                selection: Some(member),
                ..
            } => {
                let name = member.name.clone();
                self.state = FormState::Submitting {
                    roster,
                    selection: member,
                };
                Some(Command::AppendCheckIn(name))
            }
            FormState::RosterLoaded {
                roster,
                selection: None,
                notice,
            } => {
                // With nothing to choose from, keep whatever explained the empty list.
                let notice = notice
                    .filter(|_| roster.is_empty())
                    .unwrap_or_else(|| SELECTION_REQUIRED.to_string());
                self.state = FormState::RosterLoaded {
                    roster,
                    selection: None,
                    notice: Some(notice),
                };
                None
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    pub fn check_in_succeeded(&mut self, checked_in_at: String) {
        match std::mem::replace(&mut self.state, FormState::Idle) {
            FormState::Submitting { roster, selection } => {
                self.state = FormState::Succeeded {
                    roster,
                    member: selection,
                    checked_in_at,
                };
            }
            other => self.state = other,
        }
    }

    /// The selection is kept so the user can simply resubmit.
    pub fn check_in_failed(&mut self, message: Option<String>) {
        match std::mem::replace(&mut self.state, FormState::Idle) {
            FormState::Submitting { roster, selection } => {
                self.state = FormState::RosterLoaded {
                    roster,
                    selection: Some(selection),
                    notice: Some(message.unwrap_or_else(|| CHECK_IN_FAILED.to_string())),
                };
            }
            other => self.state = other,
        }
    }

    pub fn check_in_another(&mut self) {
        match std::mem::replace(&mut self.state, FormState::Idle) {
            FormState::Succeeded { roster, .. } => {
                self.state = FormState::RosterLoaded {
                    roster,
                    selection: None,
                    notice: None,
                };
            }
            other => self.state = other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Member {
        Member::new("Alice", "Staff")
    }

    fn loaded(roster: Vec<Member>) -> FormController {
        let mut c = FormController::new();
        assert_eq!(c.mount(), Some(Command::FetchRoster));
        c.roster_loaded(roster);
        c
    }

    #[test]
    fn test_mount_only_once() {
        let mut c = FormController::new();
        assert_eq!(c.mount(), Some(Command::FetchRoster));
        assert_eq!(c.state(), &FormState::LoadingRoster);
        assert_eq!(c.mount(), None);
    }

    #[test]
    fn test_roster_failure_is_not_fatal() {
        let mut c = FormController::new();
        c.mount();
        c.roster_failed();
        assert_eq!(
            c.state(),
            &FormState::RosterLoaded {
                roster: vec![],
                selection: None,
                notice: Some(ROSTER_LOAD_FAILED.to_string()),
            }
        );
        // Nothing to select, so submitting never reaches the writer.
        c.select("Alice");
        assert_eq!(c.submit(), None);
        match c.state() {
            FormState::RosterLoaded { notice, .. } => {
                assert_eq!(notice.as_deref(), Some(ROSTER_LOAD_FAILED));
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_submit_without_selection_sets_notice() {
        let mut c = loaded(vec![alice()]);
        assert_eq!(c.submit(), None);
        match c.state() {
            FormState::RosterLoaded { notice, selection, .. } => {
                assert_eq!(notice.as_deref(), Some(SELECTION_REQUIRED));
                assert!(selection.is_none());
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_select_unknown_name_clears_selection() {
        let mut c = loaded(vec![alice()]);
        c.select("Alice");
        c.select("Mallory");
        assert_eq!(c.submit(), None);
    }

    #[test]
    fn test_submit_success_flow() {
        let mut c = loaded(vec![alice()]);
        c.select("Alice");
        assert_eq!(c.submit(), Some(Command::AppendCheckIn("Alice".to_string())));
        assert!(matches!(c.state(), FormState::Submitting { .. }));
        // A second submit while in flight does nothing.
        assert_eq!(c.submit(), None);

        c.check_in_succeeded("09:00:00 - 01/02/2025".to_string());
        match c.state() {
            FormState::Succeeded { member, checked_in_at, .. } => {
                assert_eq!(member, &alice());
                assert_eq!(checked_in_at, "09:00:00 - 01/02/2025");
            }
            other => panic!("unexpected state {other:?}"),
        }

        c.check_in_another();
        assert_eq!(
            c.state(),
            &FormState::RosterLoaded {
                roster: vec![alice()],
                selection: None,
                notice: None,
            }
        );
    }

    #[test]
    fn test_submit_failure_keeps_selection() {
        let mut c = loaded(vec![alice()]);
        c.select("Alice");
        c.submit();
        c.check_in_failed(None);
        assert_eq!(
            c.state(),
            &FormState::RosterLoaded {
                roster: vec![alice()],
                selection: Some(alice()),
                notice: Some(CHECK_IN_FAILED.to_string()),
            }
        );
    }

    #[test]
    fn test_out_of_order_events_ignored() {
        let mut c = FormController::new();
        c.roster_loaded(vec![alice()]);
        c.check_in_succeeded("now".to_string());
        c.check_in_another();
        assert_eq!(c.state(), &FormState::Idle);
    }
}
