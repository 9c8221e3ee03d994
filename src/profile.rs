use serde::{Deserialize, Serialize};

use crate::session::{Session, UserId};
use crate::util::{capitalize_first, non_blank};


pub const NOT_SET_LABEL: &str = "Not set";
pub const DEFAULT_CURRENCY: &str = "INR";
pub const DEFAULT_PLAN: &str = "Free";

// One row of the `profiles` table, keyed by user id. Created and updated by
// the account flows elsewhere; this view only reads it. The backend may
// return wider rows than we model, and any column except the id may be null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub plan_type: Option<String>,
}

impl Profile {
    pub fn new(id: UserId) -> Self {
        Profile {
            id,
            full_name: None,
            email: None,
            currency: None,
            plan_type: None,
        }
    }
}

// What the profile card shows, with all fallbacks applied. Works for a
// missing row too: every field then falls back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFields {
    pub full_name: String,
    pub email: String,
    pub currency: String,
    pub plan: String,
}

impl ProfileFields {
    pub fn new(profile: Option<&Profile>, session: &Session) -> Self {
        let field = |f: fn(&Profile) -> Option<&str>| non_blank(profile.and_then(f));
        let full_name = field(|p| p.full_name.as_deref()).unwrap_or(NOT_SET_LABEL);
        // The profile's own email wins; the session email covers rows that
        // never had one filled in.
        let email = field(|p| p.email.as_deref())
            .or_else(|| non_blank(session.email()))
            .unwrap_or(NOT_SET_LABEL);
        let currency = field(|p| p.currency.as_deref()).unwrap_or(DEFAULT_CURRENCY);
        let plan = field(|p| p.plan_type.as_deref()).unwrap_or(DEFAULT_PLAN);
        ProfileFields {
            full_name: full_name.to_owned(),
            email: email.to_owned(),
            currency: currency.to_owned(),
            plan: capitalize_first(plan),
        }
    }
}
