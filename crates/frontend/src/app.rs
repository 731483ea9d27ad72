use leptos::prelude::*;

use crate::app_shell::AppShell;
use crate::system::auth::context::provide_session;

#[component]
pub fn App() -> impl IntoView {
    // The session object is shared with every view via context; it is the
    // only durable client-side state (token in localStorage).
    provide_session();

    view! {
        <AppShell />
    }
}
