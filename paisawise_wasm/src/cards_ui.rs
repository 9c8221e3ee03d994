use itertools::Itertools;
use paisawise::profile::ProfileFields;
use paisawise::settings::NotificationToggle;
use strum::IntoEnumIterator;


pub const PROFILE_CARD: &str = "profile-card";
pub const NOTIFICATIONS_CARD: &str = "notifications-card";
pub const SECURITY_CARD: &str = "security-card";
pub const DATA_CARD: &str = "data-card";

struct Card {
    id: String,
    icon_class: String,
    title: String,
    subtitle: String,
    body: String,
}

impl Card {
    fn new(
        id: impl Into<String>, icon_class: impl Into<String>, title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            icon_class: icon_class.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            body: String::new(),
        }
    }

    fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    fn to_html(&self) -> String {
        format!(
            "<section id='{}' class='settings-card'>\
            <div class='card-heading'>\
            <div class='card-icon {}'></div>\
            <div><h3 class='card-title'>{}</h3><p class='card-subtitle'>{}</p></div>\
            </div>\
            <div class='card-body'>{}</div>\
            </section>",
            self.id,
            self.icon_class,
            html_escape::encode_text(&self.title),
            html_escape::encode_text(&self.subtitle),
            self.body
        )
    }
}

fn profile_field(label: &str, value: &str, extra_class: &str) -> String {
    format!(
        "<div class='profile-field'>\
        <label class='field-label'>{}</label>\
        <div class='field-value{}'>{}</div>\
        </div>",
        html_escape::encode_text(label),
        extra_class,
        html_escape::encode_text(value)
    )
}

fn toggle_row(toggle: NotificationToggle) -> String {
    format!(
        "<div class='toggle-row'>\
        <span class='toggle-label'>{}</span>\
        <div class='toggle-switch toggle-on'><div class='toggle-knob'></div></div>\
        </div>",
        html_escape::encode_text(toggle.label())
    )
}

pub fn profile_card_html(fields: &ProfileFields) -> String {
    Card::new(PROFILE_CARD, "card-icon-profile", "Profile", "Your account information")
        .with_body(
            [
                profile_field("Full Name", &fields.full_name, ""),
                profile_field("Email", &fields.email, ""),
                profile_field("Currency", &fields.currency, ""),
                profile_field("Plan", &fields.plan, " field-value-plan"),
            ]
            .join(""),
        )
        .to_html()
}

pub fn notifications_card_html() -> String {
    Card::new(
        NOTIFICATIONS_CARD,
        "card-icon-notifications",
        "Notifications",
        "Manage alert preferences",
    )
    .with_body(NotificationToggle::iter().map(toggle_row).join(""))
    .to_html()
}

// TODO: Wire these buttons up when the password change and 2FA endpoints exist.
pub fn security_card_html() -> String {
    Card::new(SECURITY_CARD, "card-icon-security", "Security", "Protect your account")
        .with_body(
            ["Change password", "Enable two-factor authentication"]
                .map(|label| format!("<button class='text-button'>{label}</button>"))
                .join(""),
        )
        .to_html()
}

pub fn data_card_html() -> String {
    Card::new(DATA_CARD, "card-icon-data", "Data Management", "Export or delete your data")
        .with_body(
            "<button class='outline-button'>Export Data</button>\
            <button class='outline-button danger-button'>Delete Account</button>",
        )
        .to_html()
}

pub fn settings_cards_body(fields: &ProfileFields) -> String {
    [
        profile_card_html(fields),
        notifications_card_html(),
        security_card_html(),
        data_card_html(),
    ]
    .join("")
}
