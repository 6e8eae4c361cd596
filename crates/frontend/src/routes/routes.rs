use crate::system::pages::landing::LandingPage;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <LandingPage /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/login/:role") view=LoginPage />
            </Routes>
        </Router>
    }
}
