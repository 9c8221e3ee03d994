// Improvement potential. Cover `ReportError` delivery once the wasm embedding
//   grows a test harness of its own.

use std::collections::{HashMap, VecDeque};
use std::sync::mpsc;

use itertools::Itertools;
use paisawise::auth_store::AuthStore;
use paisawise::event::{FetchEpoch, SettingsBackendEvent, SettingsClientEvent};
use paisawise::profile::{Profile, ProfileFields};
use paisawise::session::{Session, UserId, UserInfo};
use paisawise::settings::SettingsState;
use pretty_assertions::assert_eq;


fn profile_row(id: &str) -> Profile {
    Profile {
        id: UserId::new(id),
        full_name: Some("Asha Rao".to_owned()),
        email: Some("asha@paisawise.app".to_owned()),
        currency: Some("USD".to_owned()),
        plan_type: Some("premium".to_owned()),
    }
}


// Stand-in for the profile service. Fetch requests are answered immediately,
// but the answers sit in `responses` until the test decides to deliver them,
// which makes slow-network interleavings easy to spell out.
struct Backend {
    rows: HashMap<UserId, Profile>,
    fail_next_fetch: Option<String>,
    responses: VecDeque<SettingsBackendEvent>,
}

impl Backend {
    fn new() -> Self {
        Backend {
            rows: HashMap::new(),
            fail_next_fetch: None,
            responses: VecDeque::new(),
        }
    }

    fn insert_row(&mut self, profile: Profile) { self.rows.insert(profile.id.clone(), profile); }

    fn handle_fetch(&mut self, user_id: UserId, epoch: FetchEpoch) {
        if let Some(message) = self.fail_next_fetch.take() {
            self.responses.push_back(SettingsBackendEvent::FetchFailed { epoch, message });
            return;
        }
        let profile = self.rows.get(&user_id).cloned();
        self.responses.push_back(SettingsBackendEvent::ProfileLoaded { epoch, profile });
    }
}


// Wires a `SettingsState` to an `AuthStore` the way an embedding would: the
// subscription forwards every session update into a channel and the client
// drains the channel into the view state.
struct Client {
    auth: AuthStore,
    state: SettingsState,
    session_rx: mpsc::Receiver<Session>,
    events_rx: mpsc::Receiver<SettingsClientEvent>,
}

impl Client {
    fn new() -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        let (session_tx, session_rx) = mpsc::channel();
        let mut auth = AuthStore::new();
        auth.subscribe(move |session| {
            let _ = session_tx.send(session.clone());
        });
        let mut client = Client {
            auth,
            state: SettingsState::new(events_tx),
            session_rx,
            events_rx,
        };
        client.apply_session_updates();
        client
    }

    fn sign_in(&mut self, id: &str, email: Option<&str>) {
        self.auth.set(Session::LoggedIn(UserInfo {
            id: UserId::new(id),
            email: email.map(str::to_owned),
        }));
        self.apply_session_updates();
    }

    fn sign_out(&mut self) {
        self.auth.set(Session::LoggedOut);
        self.apply_session_updates();
    }

    fn apply_session_updates(&mut self) {
        while let Ok(session) = self.session_rx.try_recv() {
            self.state.set_session(session);
        }
    }

    fn next_outgoing_event(&mut self) -> Option<SettingsClientEvent> {
        self.events_rx.try_recv().ok()
    }
}


struct World {
    backend: Backend,
    client: Client,
}

impl World {
    fn new() -> Self { World { backend: Backend::new(), client: Client::new() } }

    fn process_outgoing_events(&mut self) -> bool {
        let mut something_changed = false;
        while let Some(event) = self.client.next_outgoing_event() {
            something_changed = true;
            match event {
                SettingsClientEvent::FetchProfile { user_id, epoch } => {
                    self.backend.handle_fetch(user_id, epoch);
                }
                SettingsClientEvent::ReportError(report) => {
                    panic!("Unexpected error report: {report:?}");
                }
            }
        }
        something_changed
    }

    fn deliver_backend_responses(&mut self) -> bool {
        let mut something_changed = false;
        while let Some(event) = self.backend.responses.pop_front() {
            something_changed = true;
            self.client.state.process_backend_event(event);
        }
        something_changed
    }

    fn process_all_events(&mut self) {
        let mut something_changed = true;
        while something_changed {
            something_changed = false;
            if self.process_outgoing_events() {
                something_changed = true;
            }
            if self.deliver_backend_responses() {
                something_changed = true;
            }
        }
    }
}


#[test]
fn profile_loads_after_sign_in() {
    let mut world = World::new();
    world.backend.insert_row(profile_row("u1"));
    assert!(world.client.state.is_loading());

    world.client.sign_in("u1", Some("asha@example.com"));
    world.process_all_events();

    assert!(!world.client.state.is_loading());
    assert_eq!(world.client.state.profile_fields(), ProfileFields {
        full_name: "Asha Rao".to_owned(),
        email: "asha@paisawise.app".to_owned(),
        currency: "USD".to_owned(),
        plan: "Premium".to_owned(),
    });
}

#[test]
fn missing_row_falls_back_to_session_email() {
    let mut world = World::new();
    world.client.sign_in("u1", Some("asha@example.com"));
    world.process_all_events();

    assert!(!world.client.state.is_loading());
    assert_eq!(world.client.state.profile(), None);
    assert_eq!(world.client.state.profile_fields(), ProfileFields {
        full_name: "Not set".to_owned(),
        email: "asha@example.com".to_owned(),
        currency: "INR".to_owned(),
        plan: "Free".to_owned(),
    });
}

#[test]
fn no_user_means_no_fetch() {
    let mut world = World::new();
    world.client.sign_out();

    assert!(world.client.next_outgoing_event().is_none());
    assert_eq!(world.client.state.session(), &Session::LoggedOut);
    assert!(world.client.state.is_loading());
}

#[test]
fn fetch_failure_keeps_the_loading_placeholder() {
    let mut world = World::new();
    world.backend.fail_next_fetch = Some("connection reset".to_owned());
    world.client.sign_in("u1", None);
    world.process_all_events();

    assert!(world.client.state.is_loading());
    assert_eq!(world.client.state.profile(), None);

    // A new identity starts a fresh fetch and recovers the view.
    world.backend.insert_row(profile_row("u2"));
    world.client.sign_in("u2", None);
    world.process_all_events();
    assert!(!world.client.state.is_loading());
    assert_eq!(world.client.state.profile(), Some(&profile_row("u2")));
}

#[test]
fn stale_response_for_previous_user_is_discarded() {
    let mut world = World::new();
    world.backend.insert_row(profile_row("u1"));
    let mut u2_row = profile_row("u2");
    u2_row.full_name = Some("Binod Kumar".to_owned());
    world.backend.insert_row(u2_row.clone());

    // The u1 response is prepared but still in flight when u2 signs in.
    world.client.sign_in("u1", None);
    world.process_outgoing_events();
    world.client.sign_in("u2", None);
    world.process_outgoing_events();

    // Both responses arrive in order: the u1 one must be ignored.
    world.deliver_backend_responses();
    assert!(!world.client.state.is_loading());
    assert_eq!(world.client.state.profile(), Some(&u2_row));
}

#[test]
fn sign_out_mid_flight_discards_the_response() {
    let mut world = World::new();
    world.backend.insert_row(profile_row("u1"));
    world.client.sign_in("u1", None);
    world.process_outgoing_events();

    world.client.sign_out();
    world.deliver_backend_responses();

    assert_eq!(world.client.state.session(), &Session::LoggedOut);
    assert!(world.client.state.is_loading());
    assert_eq!(world.client.state.profile(), None);
}

#[test]
fn same_user_session_refresh_does_not_refetch() {
    let mut world = World::new();
    world.backend.insert_row(profile_row("u1"));
    world.client.sign_in("u1", None);
    world.process_all_events();
    assert!(!world.client.state.is_loading());

    // Token rotation delivers the same user again, now with an email.
    world.client.sign_in("u1", Some("asha@example.com"));
    assert!(world.client.next_outgoing_event().is_none());
    assert!(!world.client.state.is_loading());

    // The refreshed session still feeds the email fallback.
    let mut sparse_row = profile_row("u1");
    sparse_row.email = None;
    world.backend.insert_row(sparse_row);
    world.client.sign_out();
    world.client.sign_in("u1", Some("asha@example.com"));
    world.process_all_events();
    assert_eq!(world.client.state.profile_fields().email, "asha@example.com");
}

#[test]
fn signing_in_twice_fetches_once_per_identity() {
    let mut world = World::new();
    world.backend.insert_row(profile_row("u1"));
    world.client.sign_in("u1", None);
    world.client.sign_in("u1", None);
    world.process_all_events();

    world.client.sign_in("u2", None);
    let events = std::iter::from_fn(|| world.client.next_outgoing_event()).collect_vec();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], SettingsClientEvent::FetchProfile { .. }));
}
