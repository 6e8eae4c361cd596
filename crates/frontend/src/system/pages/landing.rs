use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::system::auth::storage;

/// Role-selection landing page. Also the navigation target of the
/// "Register here" link and of the unapproved-account redirect.
#[component]
pub fn LandingPage() -> impl IntoView {
    let (has_session, set_has_session) = signal(storage::get_token().is_some());

    let sign_out = move |_| {
        storage::clear_session();
        set_has_session.set(false);
    };

    view! {
        <div class="landing-container">
            <div class="landing-box">
                <h1>"Credential Portal"</h1>
                <h2>"Sign in to continue"</h2>

                <div class="role-grid">
                    {Role::ALL
                        .iter()
                        .map(|role| {
                            view! {
                                <a class="role-card" href=format!("/login/{}", role.as_str())>
                                    {role.display_name()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <Show when=move || has_session.get()>
                    <button class="btn-secondary" on:click=sign_out>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </div>
    }
}
