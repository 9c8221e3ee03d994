use std::sync::mpsc;

use log::{debug, error};
use strum::EnumIter;

use crate::event::{FetchEpoch, SettingsBackendEvent, SettingsClientEvent};
use crate::profile::{Profile, ProfileFields};
use crate::session::Session;


// The notification preference rows. Rendered in a fixed "on" state and wired
// to nothing: there is no preferences table yet, so the view offers no way to
// flip them and emits no event for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum NotificationToggle {
    BudgetAlerts,
    TransactionAlerts,
    GoalReminders,
}

impl NotificationToggle {
    pub fn label(self) -> &'static str {
        match self {
            NotificationToggle::BudgetAlerts => "Budget alerts",
            NotificationToggle::TransactionAlerts => "Transaction alerts",
            NotificationToggle::GoalReminders => "Goal reminders",
        }
    }
}

// View state of the account settings page. The embedding owns the receiving
// end of `events_tx` and is responsible for executing fetch requests against
// the data backend and feeding the results back in.
pub struct SettingsState {
    session: Session,
    profile: Option<Profile>,
    loading: bool,
    epoch: FetchEpoch,
    events_tx: mpsc::Sender<SettingsClientEvent>,
}

impl SettingsState {
    pub fn new(events_tx: mpsc::Sender<SettingsClientEvent>) -> Self {
        SettingsState {
            session: Session::Unknown,
            profile: None,
            loading: true,
            epoch: FetchEpoch::default(),
            events_tx,
        }
    }

    pub fn session(&self) -> &Session { &self.session }
    pub fn profile(&self) -> Option<&Profile> { self.profile.as_ref() }
    pub fn is_loading(&self) -> bool { self.loading }

    // The profile card content with all display fallbacks applied.
    pub fn profile_fields(&self) -> ProfileFields {
        ProfileFields::new(self.profile.as_ref(), &self.session)
    }

    // The initialize/refresh trigger: called with the current session when the
    // view is wired up and again on every auth change. A new identity
    // invalidates any in-flight fetch and requests the new user's row; updates
    // that keep the same user (token rotation and the like) change nothing.
    //
    // With no signed-in user there is nothing to fetch, so the view keeps
    // whatever it was showing; in particular, a view that never saw a user
    // stays on the loading placeholder indefinitely.
    pub fn set_session(&mut self, session: Session) {
        let identity_changed = session.user_id() != self.session.user_id();
        self.session = session;
        if !identity_changed {
            return;
        }
        self.epoch = self.epoch.next();
        if let Some(user_id) = self.session.user_id() {
            // The receiving end may already be gone during teardown.
            let _ = self.events_tx.send(SettingsClientEvent::FetchProfile {
                user_id: user_id.clone(),
                epoch: self.epoch,
            });
        }
    }

    pub fn process_backend_event(&mut self, event: SettingsBackendEvent) {
        match event {
            SettingsBackendEvent::ProfileLoaded { epoch, profile } => {
                if epoch != self.epoch {
                    debug!("Dropping stale profile row for epoch {:?}", epoch);
                    return;
                }
                self.profile = profile;
                self.loading = false;
            }
            SettingsBackendEvent::FetchFailed { epoch, message } => {
                if epoch != self.epoch {
                    debug!("Dropping stale profile fetch error for epoch {:?}", epoch);
                    return;
                }
                // Not retried and not surfaced in the page: the view stays on
                // the loading placeholder until a later fetch succeeds.
                error!("Error loading profile: {message}");
            }
        }
    }
}
