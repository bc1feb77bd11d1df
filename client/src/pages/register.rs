//! Member self-registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route `/register`. The API creates the account in a pending state,
//! so a successful registration sends the visitor to `/m_login` without
//! touching the session store.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::MemberRegistration;
use crate::pages::form::{ErrorBanner, FieldErrors, FieldMessage, is_http_url, validate_email};
use crate::state::session::Audience;
use crate::util::lifecycle::{MountFlag, spawn_request};

const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

/// Raw input of the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub city: String,
    pub occupation: String,
    pub social_platform: String,
    pub social_url: String,
}

pub fn validate_username(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("Username is required")
    } else if value.chars().count() < 3 {
        Some("Username must be at least 3 characters")
    } else if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        Some("Username can only contain letters, numbers, hyphens, and underscores")
    } else if value.starts_with(|c: char| c.is_ascii_digit()) {
        Some("Username cannot start with a number")
    } else {
        None
    }
}

pub fn validate_password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Password is required")
    } else if value.chars().count() < 6 {
        Some("Password must be at least 6 characters")
    } else {
        None
    }
}

pub fn validate_confirmation(password: &str, confirmation: &str) -> Option<&'static str> {
    if confirmation.is_empty() {
        Some("Please confirm your password")
    } else if confirmation != password {
        Some("Passwords do not match")
    } else {
        None
    }
}

fn is_place_word(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '\'' || c == '-')
}

pub fn validate_city(value: &str) -> Option<&'static str> {
    (!value.is_empty() && !is_place_word(value)).then_some("City can only contain letters and hyphens")
}

pub fn validate_occupation(value: &str) -> Option<&'static str> {
    (!value.is_empty() && !is_place_word(value)).then_some("Occupation can only contain letters and hyphens")
}

pub fn validate_social_platform(value: &str) -> Option<&'static str> {
    let letters = value.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace());
    (!value.is_empty() && !letters).then_some("Platform name should only contain letters")
}

pub fn validate_social_url(value: &str) -> Option<&'static str> {
    (!value.is_empty() && !is_http_url(value))
        .then_some("Please enter a valid URL (starting with http:// or https://)")
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

impl RegistrationForm {
    /// Every field error, or the request body when the form is valid.
    pub fn validate(&self) -> Result<MemberRegistration, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.set("username", validate_username(&self.username));
        errors.set("email", validate_email(&self.email));
        errors.set("password", validate_password(&self.password));
        errors.set("confirm_password", validate_confirmation(&self.password, &self.confirm_password));
        errors.set("city", validate_city(&self.city));
        errors.set("occupation", validate_occupation(&self.occupation));
        errors.set("social_platform", validate_social_platform(&self.social_platform));
        errors.set("social_url", validate_social_url(&self.social_url));
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(MemberRegistration {
            username: self.username.clone(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            city: optional(&self.city),
            occupation: optional(&self.occupation),
            social_platform: optional(&self.social_platform),
            social_url: optional(&self.social_url),
        })
    }

    fn value(&self, field: &str) -> &str {
        match field {
            "username" => &self.username,
            "email" => &self.email,
            "password" => &self.password,
            "confirm_password" => &self.confirm_password,
            "city" => &self.city,
            "occupation" => &self.occupation,
            "social_platform" => &self.social_platform,
            "social_url" => &self.social_url,
            _ => "",
        }
    }

    fn set_value(&mut self, field: &str, value: String) {
        let slot = match field {
            "username" => &mut self.username,
            "email" => &mut self.email,
            "password" => &mut self.password,
            "confirm_password" => &mut self.confirm_password,
            "city" => &mut self.city,
            "occupation" => &mut self.occupation,
            "social_platform" => &mut self.social_platform,
            "social_url" => &mut self.social_url,
            _ => return,
        };
        *slot = value;
    }

    /// Error for one field against the current form contents.
    fn check(&self, field: &'static str) -> Option<&'static str> {
        match field {
            "username" => validate_username(&self.username),
            "email" => validate_email(&self.email),
            "password" => validate_password(&self.password),
            "confirm_password" => validate_confirmation(&self.password, &self.confirm_password),
            "city" => validate_city(&self.city),
            "occupation" => validate_occupation(&self.occupation),
            "social_platform" => validate_social_platform(&self.social_platform),
            "social_url" => validate_social_url(&self.social_url),
            _ => None,
        }
    }
}

#[component]
fn TextField(
    form: RwSignal<RegistrationForm>,
    errors: RwSignal<FieldErrors>,
    field: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field>{label}</label>
            <input
                id=field
                type=input_type
                placeholder=placeholder
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    let touched = !value.is_empty();
                    form.update(|f| f.set_value(field, value));
                    if touched {
                        let error = form.with(|f| f.check(field));
                        errors.update(|e| e.set(field, error));
                    }
                }
            />
            <FieldMessage errors=errors field=field/>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let mounted = MountFlag::install();

    let form = RwSignal::new(RegistrationForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match form.with(RegistrationForm::validate) {
            Ok(body) => body,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        banner.set(None);
        busy.set(true);

        let client = ApiClient::default();
        let mounted = mounted.clone();
        let navigate = navigate.clone();
        spawn_request(async move {
            let result = client.register_member(&body).await;
            mounted.guard(|| match result {
                Ok(()) => {
                    log::info!("member registration submitted");
                    navigate(Audience::Member.login_path(), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    banner.set(Some(e.user_message(REGISTRATION_FAILED)));
                    busy.set(false);
                }
            });
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-container auth-container--wide">
                <div class="auth-header">
                    <div class="header-icon">"✓"</div>
                    <h2>"Create Your Account"</h2>
                    <p>"Join our verification community as a member"</p>
                </div>
                <ErrorBanner message=banner/>
                <form class="auth-form" on:submit=on_submit>
                    <h3 class="section-title">"Essential Information"</h3>
                    <div class="form-grid">
                        <TextField form=form errors=errors field="username" label="Username *" input_type="text"
                            placeholder="Choose a username"/>
                        <TextField form=form errors=errors field="email" label="Email *" input_type="email"
                            placeholder="your.email@example.com"/>
                        <TextField form=form errors=errors field="password" label="Password *" input_type="password"
                            placeholder="At least 6 characters"/>
                        <TextField form=form errors=errors field="confirm_password" label="Confirm Password *"
                            input_type="password" placeholder="Re-enter your password"/>
                    </div>
                    <h3 class="section-title">"Additional Information (Optional)"</h3>
                    <div class="form-grid">
                        <TextField form=form errors=errors field="city" label="City" input_type="text"
                            placeholder="Your city"/>
                        <TextField form=form errors=errors field="occupation" label="Occupation" input_type="text"
                            placeholder="Your occupation"/>
                        <TextField form=form errors=errors field="social_platform" label="Social Platform" input_type="text"
                            placeholder="e.g. Twitter"/>
                        <TextField form=form errors=errors field="social_url" label="Profile URL" input_type="url"
                            placeholder="https://..."/>
                    </div>
                    <button class="submit-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-footer">
                    "Already have an account? " <a href="/m_login">"Sign in here"</a>
                </p>
            </div>
        </div>
    }
}
