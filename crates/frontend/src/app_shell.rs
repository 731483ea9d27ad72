//! Application shell.
//!
//! `AppShell` is the auth gate: it shows `LoginPage` until the session holds
//! a token, then the main layout — a header with one nav button per page and
//! the active page body. Six fixed pages, switched through a plain enum
//! signal; no URL routing.

use leptos::prelude::*;

use crate::calendar::ui::CalendarPage;
use crate::dashboard::ui::DashboardPage;
use crate::domain::customer::ui::CustomersPage;
use crate::domain::material::ui::MaterialsPage;
use crate::domain::order::ui::OrdersPage;
use crate::profit::ui::ProfitPage;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Page {
    Orders,
    Customers,
    Materials,
    Calendar,
    Profit,
    Dashboard,
}

impl Page {
    const ALL: [Page; 6] = [
        Page::Orders,
        Page::Customers,
        Page::Materials,
        Page::Calendar,
        Page::Profit,
        Page::Dashboard,
    ];

    fn title(&self) -> &'static str {
        match self {
            Page::Orders => "Gestione",
            Page::Customers => "Clienti",
            Page::Materials => "Materiali",
            Page::Calendar => "Calendario",
            Page::Profit => "Profitti",
            Page::Dashboard => "Dashboard",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            Page::Orders => "orders",
            Page::Customers => "customers",
            Page::Materials => "inventory",
            Page::Calendar => "calendar",
            Page::Profit => "chart",
            Page::Dashboard => "dashboard",
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let session = use_session();
    let (page, set_page) = signal(Page::Orders);

    view! {
        <div class="app-container">
            <header class="header">
                <h2 class="header__title">"🏢 Noleggio Manager"</h2>
                <nav class="nav">
                    {Page::ALL
                        .into_iter()
                        .map(|p| {
                            view! {
                                <button
                                    class=move || if page.get() == p { "active" } else { "" }
                                    on:click=move |_| set_page.set(p)
                                >
                                    {icon(p.icon_name())}
                                    {p.title()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <button class="nav__logout" on:click=move |_| session.logout()>
                        {icon("logout")}
                        "Esci"
                    </button>
                </nav>
            </header>

            <main class="container">
                {move || match page.get() {
                    Page::Orders => view! { <OrdersPage /> }.into_any(),
                    Page::Customers => view! { <CustomersPage /> }.into_any(),
                    Page::Materials => view! { <MaterialsPage /> }.into_any(),
                    Page::Calendar => view! { <CalendarPage /> }.into_any(),
                    Page::Profit => view! { <ProfitPage /> }.into_any(),
                    Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Auth gate component: login page without a token, the app with one.
#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
