//! Member login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route `/m_login`. A successful `POST /member/login` yields the
//! member token and id, which are recorded together under the member
//! audience before navigating to `/member`.

#[cfg(test)]
#[path = "member_login_test.rs"]
mod member_login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{MemberLoginRequest, MemberLoginResponse};
use crate::pages::form::{ErrorBanner, FieldErrors, FieldMessage, validate_email, validate_password_present};
use crate::state::session::{Audience, Identity, SessionStore};
use crate::util::lifecycle::{MountFlag, spawn_request};

/// Field errors for the member form, or the request body when it is valid.
pub fn validate_member_login(email: &str, password: &str) -> Result<MemberLoginRequest, FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.set("email", validate_email(email));
    errors.set("password", validate_password_present(password));
    if errors.is_empty() {
        Ok(MemberLoginRequest { email: email.trim().to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

/// Banner text for a failed member login.
///
/// 403 carries the API's reason (pending approval, disabled account).
pub fn member_login_error(err: &ApiError) -> String {
    match err.status() {
        Some(401) => "Invalid email or password".to_owned(),
        Some(403) => err.user_message("Your account cannot sign in yet."),
        _ => "Login failed. Please try again.".to_owned(),
    }
}

/// Record a confirmed member login in the store.
pub fn record_member_login(store: &mut SessionStore, response: MemberLoginResponse) {
    store.login(Audience::Member, Some(Identity::new(response.id)), response.token);
}

#[component]
pub fn MemberLoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    let mounted = MountFlag::install();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_member_login(&email.get(), &password.get()) {
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
            let result = client.member_login(&body).await;
            mounted.guard(|| match result {
                Ok(response) => {
                    log::info!("member {} signed in", response.id);
                    session.update(|s| record_member_login(s, response));
                    navigate(Audience::Member.home_path(), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("member login failed: {e}");
                    banner.set(Some(member_login_error(&e)));
                    busy.set(false);
                }
            });
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-container">
                <div class="auth-header">
                    <div class="header-icon">"🔐"</div>
                    <h2>"Member Login"</h2>
                    <p>"Sign in to access your verification dashboard"</p>
                </div>
                <ErrorBanner message=banner/>
                <form class="auth-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="your.email@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                errors.update(|e| e.set("email", validate_email(&value)));
                                email.set(value);
                            }
                        />
                        <FieldMessage errors=errors field="email"/>
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                errors.update(|e| e.set("password", validate_password_present(&value)));
                                password.set(value);
                            }
                        />
                        <FieldMessage errors=errors field="password"/>
                    </div>
                    <button class="submit-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-footer">
                    "Don't have an account? " <a href="/register">"Register here"</a>
                </p>
                <p class="auth-footer">
                    "Administrator? " <a href="/login">"Admin login"</a>
                </p>
            </div>
        </div>
    }
}
