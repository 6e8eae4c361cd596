use std::str::FromStr;

use contracts::system::auth::{classify_failure, FailureAction, LoginRequest, Role};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::shared::toast::use_toast;
use crate::system::auth::state::{SubmitOutcome, SubmitState};
use crate::system::auth::{api, storage};

/// Delay before following the server-supplied redirect after a
/// successful login.
const REDIRECT_DELAY_MS: u32 = 1000;
/// Delay before returning to the root after an unapproved-account failure.
const HOME_REDIRECT_DELAY_MS: u32 = 2000;

#[component]
pub fn LoginPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let toast = use_toast();

    let (official_email, set_official_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submit_state, set_submit_state) = signal(SubmitState::default());

    let role_param = move || params.get().get("role").unwrap_or_default();
    let is_busy = move || submit_state.get().is_busy();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Resolve the endpoint before anything else; an unknown role
        // aborts the submission with no network call.
        let role = match Role::from_str(&role_param()) {
            Ok(role) => role,
            Err(_) => {
                toast.error("Invalid user type");
                return;
            }
        };

        let Some(next) = submit_state.get_untracked().start() else {
            // A submission is already in flight.
            return;
        };
        set_submit_state.set(next);

        let request = LoginRequest {
            official_email: official_email.get_untracked(),
            password: password.get_untracked(),
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(role, &request).await {
                Ok(response) => {
                    // A session record is written only when the response
                    // carries a token.
                    if let Some(record) = storage::SessionRecord::from_response(role, &response) {
                        storage::save_session(&record);
                    }

                    toast.success(response.message);
                    set_submit_state.update(|s| *s = s.finish(SubmitOutcome::Success));

                    if let Some(redirect_url) = response.redirect_url {
                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        // Full document load so the application shell picks
                        // up the new session record.
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&redirect_url);
                        }
                    }
                }
                Err(error) => {
                    log::error!("login failed: {}", error);
                    set_submit_state.update(|s| *s = s.finish(SubmitOutcome::Failure));

                    match classify_failure(&error) {
                        FailureAction::Notify(message) => toast.error(message),
                        FailureAction::NotifyAndGoHome(message) => {
                            toast.error(message);
                            TimeoutFuture::new(HOME_REDIRECT_DELAY_MS).await;
                            navigate("/", Default::default());
                        }
                    }
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>{move || format!("Login as {}", role_param().replace('-', " "))}</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="official-email">"Official Email Address"</label>
                        <input
                            type="email"
                            id="official-email"
                            placeholder="Official Email Address"
                            value=move || official_email.get()
                            on:input=move |ev| set_official_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_busy()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_busy()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_busy()>
                        {move || if is_busy() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <div class="login-footer">
                    <span>"Don't have an account? "</span>
                    <a href="/">"Register here"</a>
                </div>
            </div>
        </div>
    }
}
