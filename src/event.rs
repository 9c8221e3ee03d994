use serde::{Deserialize, Serialize};

use crate::profile::Profile;
use crate::session::UserId;


// Fetch generation token. Every identity change advances it; a backend reply
// carrying an older token belongs to a view state that no longer exists and
// must be dropped, not applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchEpoch(pub u64);

impl FetchEpoch {
    pub fn next(self) -> Self { FetchEpoch(self.0 + 1) }
}

// Events the settings client emits. The host executes `FetchProfile` against
// the data backend ("select the one `profiles` row whose id matches") and
// forwards `ReportError` to whatever diagnostics sink it has.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsClientEvent {
    FetchProfile { user_id: UserId, epoch: FetchEpoch },
    ReportError(ClientErrorReport),
}

// Replies from the data backend. `ProfileLoaded { profile: None }` is a
// successful read that found no row; `FetchFailed` is the error outcome and
// is always reported distinctly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsBackendEvent {
    ProfileLoaded {
        epoch: FetchEpoch,
        profile: Option<Profile>,
    },
    FetchFailed {
        epoch: FetchEpoch,
        message: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientErrorReport {
    RustPanic { panic_info: String, backtrace: String },
    RustError { message: String },
    UnknownError { message: String },
}
