//! Admin form for registering a trusted platform account.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/account`. The new account is attributed to the signed-in admin
//! (the session identity's id), so the form is refused when the session
//! carries no identity.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use leptos::prelude::*;

use crate::net::types::PlatformAccount;
use crate::pages::form::{ErrorBanner, is_http_url};
use crate::pages::remote::{session_client, session_identity_id};
use crate::state::session::SessionStore;
use crate::util::lifecycle::{MountFlag, spawn_request};

pub const PLATFORMS: [(&str, &str); 5] = [
    ("twitter", "Twitter"),
    ("facebook", "Facebook"),
    ("instagram", "Instagram"),
    ("youtube", "YouTube"),
    ("linkedin", "LinkedIn"),
];

pub const CATEGORIES: [(&str, &str); 4] = [
    ("economy", "Economy"),
    ("politics", "Politics"),
    ("sports", "Sports"),
    ("international_relations", "International Relations"),
];

const ADD_FAILED: &str = "Failed to add account";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountForm {
    pub name: String,
    pub platform: String,
    pub url: String,
    pub category: String,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            platform: PLATFORMS[0].0.to_owned(),
            url: String::new(),
            category: CATEGORIES[0].0.to_owned(),
        }
    }
}

fn is_option(options: &[(&str, &str)], value: &str) -> bool {
    options.iter().any(|(v, _)| *v == value)
}

impl AccountForm {
    /// The request body attributed to `admin_id`, or the first problem found.
    pub fn validate(&self, admin_id: Option<i64>) -> Result<PlatformAccount, &'static str> {
        let name = self.name.trim();
        let url = self.url.trim();
        let Some(admin_id) = admin_id else {
            return Err("Your admin session has no identity. Sign in again.");
        };
        if name.chars().count() < 2 || name.chars().count() > 100 {
            return Err("Name must be between 2 and 100 characters");
        }
        if !is_option(&PLATFORMS, &self.platform) {
            return Err("Choose a supported platform");
        }
        if !is_option(&CATEGORIES, &self.category) {
            return Err("Choose a supported category");
        }
        if url.is_empty() {
            return Err("Account URL is required");
        }
        if !is_http_url(url) {
            return Err("URL must start with http:// or https://");
        }
        Ok(PlatformAccount {
            name: name.to_owned(),
            platform: self.platform.clone(),
            url: url.to_owned(),
            category: self.category.clone(),
            admin_id,
        })
    }
}

#[component]
fn OptionSelect(
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select prop:value=move || value.get() on:change=move |ev| on_change.run(event_target_value(&ev))>
                {options
                    .iter()
                    .map(|(v, text)| view! { <option value=*v>{*text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn AccountCreationPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let mounted = MountFlag::install();

    let form = RwSignal::new(AccountForm::default());
    let banner = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        banner.set(None);
        success.set(None);
        let body = match form.with(|f| f.validate(session_identity_id(session))) {
            Ok(body) => body,
            Err(message) => {
                banner.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        let client = session_client(session);
        let mounted = mounted.clone();
        spawn_request(async move {
            let result = client.create_platform_account(&body).await;
            mounted.guard(|| {
                match result {
                    Ok(()) => {
                        log::info!("platform account {} added", body.url);
                        success.set(Some("Account successfully added to database!".to_owned()));
                        form.set(AccountForm::default());
                    }
                    Err(e) => {
                        log::warn!("account creation failed: {e}");
                        banner.set(Some(e.user_message(ADD_FAILED)));
                    }
                }
                busy.set(false);
            });
        });
    };

    view! {
        <div class="account-management-container">
            <h1 class="page-title">"Add Verification Source"</h1>
            <ErrorBanner message=banner/>
            <Show when=move || success.get().is_some()>
                <div class="success-message">{move || success.get().unwrap_or_default()}</div>
            </Show>
            <form class="account-form" on:submit=on_submit>
                <div class="form-group">
                    <label>"Account Holder Name"</label>
                    <input
                        type="text"
                        minlength="2"
                        maxlength="100"
                        placeholder="Enter account holder name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <OptionSelect
                        label="Platform"
                        options=&PLATFORMS
                        value=Signal::derive(move || form.with(|f| f.platform.clone()))
                        on_change=Callback::new(move |v| form.update(|f| f.platform = v))
                    />
                    <OptionSelect
                        label="Category"
                        options=&CATEGORIES
                        value=Signal::derive(move || form.with(|f| f.category.clone()))
                        on_change=Callback::new(move |v| form.update(|f| f.category = v))
                    />
                </div>
                <div class="form-group">
                    <label>"Account URL"</label>
                    <input
                        type="url"
                        placeholder="https://"
                        prop:value=move || form.with(|f| f.url.clone())
                        on:input=move |ev| form.update(|f| f.url = event_target_value(&ev))
                    />
                </div>
                <button class="submit-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Adding..." } else { "Add Account" }}
                </button>
            </form>
        </div>
    }
}
