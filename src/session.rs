use serde::{Deserialize, Serialize};


// Opaque identifier issued by the auth provider. Treated as a plain string
// everywhere: the client never inspects or generates these.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(s: impl Into<String>) -> Self { Self(s.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: UserId,
    pub email: Option<String>,
}

// Payload the host page sends on every auth state change:
// `{ "user": { "id": ..., "email": ... } }` or `{ "user": null }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUpdate {
    pub user: Option<UserInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    #[default]
    Unknown, // auth state not delivered yet
    LoggedOut,
    LoggedIn(UserInfo),
}

impl Session {
    pub fn user_info(&self) -> Option<&UserInfo> {
        match self {
            Session::Unknown | Session::LoggedOut => None,
            Session::LoggedIn(user_info) => Some(user_info),
        }
    }
    pub fn user_id(&self) -> Option<&UserId> { self.user_info().map(|info| &info.id) }
    pub fn email(&self) -> Option<&str> { self.user_info().and_then(|info| info.email.as_deref()) }

    pub fn from_auth_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<AuthUpdate>(payload).map(Self::from)
    }
}

impl From<AuthUpdate> for Session {
    fn from(update: AuthUpdate) -> Self {
        match update.user {
            None => Session::LoggedOut,
            Some(user_info) => Session::LoggedIn(user_info),
        }
    }
}
