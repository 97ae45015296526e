use askama::Template;

use crate::controller::FormState;
use crate::models::{Member, check_in};

pub const APP_NAME: &str = "Attendance Check-in";

/// One entry in the member dropdown.
pub struct MemberOption {
    pub name: String,
    pub label: String,
    pub selected: bool,
}

pub struct SuccessView {
    pub member: Member,
    pub checked_in_at: String,
}

#[derive(Template)]
#[template(path = "checkin.html")]
pub struct CheckInTemplate {
    pub app_name: String,
    pub csrf_token: String,
    pub today: String,
    pub loading: bool,
    pub submitting: bool,
    pub select_disabled: bool,
    pub submit_disabled: bool,
    pub members: Vec<MemberOption>,
    pub selected: Option<Member>,
    pub notice: Option<String>,
    pub success: Option<SuccessView>,
}

impl CheckInTemplate {
    /// Flatten a form state into what the page needs to draw it.
    pub fn from_state(state: FormState, csrf_token: String) -> Self {
        let mut tmpl = Self {
            app_name: APP_NAME.to_string(),
            csrf_token,
            today: check_in::today(),
            loading: false,
            submitting: false,
            select_disabled: false,
            submit_disabled: false,
            members: Vec::new(),
            selected: None,
            notice: None,
            success: None,
        };

        match state {
            FormState::Idle | FormState::LoadingRoster => {
                tmpl.loading = true;
            }
            FormState::RosterLoaded {
                roster,
                selection,
                notice,
            } => {
                tmpl.members = options(&roster, selection.as_ref());
                tmpl.selected = selection;
                tmpl.notice = notice;
            }
            FormState::Submitting { roster, selection } => {
                tmpl.submitting = true;
                tmpl.members = options(&roster, Some(&selection));
                tmpl.selected = Some(selection);
            }
            FormState::Succeeded {
                member,
                checked_in_at,
                ..
            } => {
                tmpl.success = Some(SuccessView {
                    member,
                    checked_in_at,
                });
            }
        }

        tmpl.select_disabled = tmpl.loading || tmpl.submitting;
        tmpl.submit_disabled = tmpl.select_disabled || tmpl.members.is_empty();
        tmpl
    }
}

fn options(roster: &[Member], selection: Option<&Member>) -> Vec<MemberOption> {
    roster
        .iter()
        .map(|m| MemberOption {
            name: m.name.clone(),
            label: m.label(),
            selected: selection.is_some_and(|s| s.name == m.name),
        })
        .collect()
}
