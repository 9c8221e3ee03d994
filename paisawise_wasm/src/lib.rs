#![cfg_attr(feature = "strict", deny(warnings))]

use std::sync::mpsc;

use paisawise::auth_store::AuthStore;
use paisawise::event::SettingsClientEvent;
use paisawise::session::Session;
use paisawise::settings::SettingsState;
use wasm_bindgen::prelude::*;

use crate::web_document::web_document;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::JsResult;

mod cards_ui;
mod web_document;
mod web_element_ext;
pub mod web_error_handling;


#[wasm_bindgen]
pub struct WebClient {
    state: SettingsState,
    auth: AuthStore,
    session_rx: mpsc::Receiver<Session>,
    events_rx: mpsc::Receiver<SettingsClientEvent>,
}

#[wasm_bindgen]
impl WebClient {
    pub fn new_client() -> WebClient {
        let (events_tx, events_rx) = mpsc::channel();
        let (session_tx, session_rx) = mpsc::channel();
        let mut auth = AuthStore::new();
        auth.subscribe(move |session| {
            // The receiving end lives as long as the client itself.
            let _ = session_tx.send(session.clone());
        });
        WebClient {
            state: SettingsState::new(events_tx),
            auth,
            session_rx,
            events_rx,
        }
    }

    // Feeds an auth state change from the embedding, in the JSON format produced by the JS
    // auth listener. The view reacts through its store subscription, the same way any other
    // consumer of the store would.
    pub fn update_session(&mut self, auth_json: &str) -> JsResult<()> {
        let session = Session::from_auth_json(auth_json)
            .map_err(|err| rust_error!("Invalid auth update: {}", err))?;
        self.auth.set(session);
        self.apply_session_updates();
        Ok(())
    }

    pub fn process_backend_event(&mut self, event: &str) -> JsResult<()> {
        let backend_event = serde_json::from_str(event)
            .map_err(|err| rust_error!("Cannot parse backend event: {}", err))?;
        self.state.process_backend_event(backend_event);
        Ok(())
    }

    pub fn next_outgoing_event(&mut self) -> Option<String> {
        match self.events_rx.try_recv() {
            Ok(event) => Some(serde_json::to_string(&event).unwrap()),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => panic!("Event channel disconnected"),
        }
    }

    pub fn update_state(&self) -> JsResult<()> {
        let document = web_document();
        let page = document.get_existing_element_by_id("settings-page")?;
        page.remove_all_children();
        if self.state.is_loading() {
            let spinner = page.append_new_element("div")?.with_classes(["loading-status"])?;
            spinner.append_animated_dots()?;
            return Ok(());
        }
        let header = page.append_new_element("div")?.with_classes(["settings-header"])?;
        header.append_new_element("h2")?.with_text_content("Settings");
        header
            .append_new_element("p")?
            .with_text_content("Manage your account and preferences");
        let cards = page
            .append_new_element("div")?
            .with_id("settings-cards")
            .with_classes(["settings-cards"])?;
        cards.set_inner_html(&cards_ui::settings_cards_body(&self.state.profile_fields()));
        Ok(())
    }

    fn apply_session_updates(&mut self) {
        while let Ok(session) = self.session_rx.try_recv() {
            self.state.set_session(session);
        }
    }
}
