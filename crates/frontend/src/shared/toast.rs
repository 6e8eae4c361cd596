use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Eq)]
struct ToastEntry {
    id: u64,
    level: ToastLevel,
    text: String,
}

/// Centralized transient notifications.
///
/// - `success` / `error` push a message onto the stack
/// - each toast dismisses itself after a fixed delay (handled by `push`)
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastLevel::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastLevel::Error, text.into());
    }

    fn push(&self, level: ToastLevel, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|stack| {
            stack.push(ToastEntry { id, level, text });
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|stack| stack.retain(|entry| entry.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the toast service
pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in component tree")
}

/// Renders the toast stack. Mounted once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toast();

    view! {
        <div class="toast-stack">
            <For
                each=move || svc.toasts.get()
                key=|entry| entry.id
                children=move |entry| {
                    let class = match entry.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    };
                    let id = entry.id;
                    view! {
                        <div class=class on:click=move |_| svc.dismiss(id)>
                            {entry.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
