use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the toast service to the whole app via context.
    provide_context(ToastService::new());

    view! {
        <ToastHost />
        <AppRoutes />
    }
}
