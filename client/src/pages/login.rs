//! Admin login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route `/login`. Credentials are checked by the API first; only a
//! confirmed login is recorded in the session store, under the admin
//! audience, before navigating to the admin dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::AdminLoginRequest;
use crate::pages::form::{ErrorBanner, FieldErrors, FieldMessage, validate_password_present};
use crate::state::session::{Audience, SessionStore};
use crate::util::lifecycle::{MountFlag, spawn_request};

fn validate_username(value: &str) -> Option<&'static str> {
    value.trim().is_empty().then_some("Username is required")
}

/// Field errors for the admin form, or the request body when it is valid.
pub fn validate_admin_login(username: &str, password: &str) -> Result<AdminLoginRequest, FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.set("username", validate_username(username));
    errors.set("password", validate_password_present(password));
    if errors.is_empty() {
        Ok(AdminLoginRequest { username: username.trim().to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

/// Banner text for a failed admin login.
pub fn admin_login_error(err: &ApiError) -> String {
    if err.is_unauthorized() {
        "Invalid admin credentials".to_owned()
    } else {
        "Login failed. Please try again.".to_owned()
    }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    let mounted = MountFlag::install();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_admin_login(&username.get(), &password.get()) {
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
            let result = client.admin_login(&body).await;
            mounted.guard(|| match result {
                Ok(user) => {
                    log::info!("admin {} signed in", user.user_id);
                    session.update(|s| s.login(Audience::Admin, Some(user.identity()), user.session_token()));
                    navigate(Audience::Admin.home_path(), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("admin login failed: {e}");
                    banner.set(Some(admin_login_error(&e)));
                    busy.set(false);
                }
            });
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-container">
                <div class="auth-header">
                    <div class="header-icon">"🛡"</div>
                    <h2>"Admin Login"</h2>
                    <p>"Sign in to access admin dashboard"</p>
                </div>
                <ErrorBanner message=banner/>
                <form class="auth-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            placeholder="Enter admin username"
                            prop:value=move || username.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                errors.update(|e| e.set("username", validate_username(&value)));
                                username.set(value);
                            }
                        />
                        <FieldMessage errors=errors field="username"/>
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Enter admin password"
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
                    "Are you a member? " <a href="/m_login">"Member login"</a>
                </p>
            </div>
        </div>
    }
}
