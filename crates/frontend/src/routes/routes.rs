use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::statistics::StatisticsPage;
use crate::domain::orders::ui::page::OrdersPage;
use crate::layout::NavigationBar;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <NavigationBar />
                <main class="app__main">
                    <header class="app__header">
                        <h1 class="app__title">"Aureos Kebab"</h1>
                        <p class="app__tagline">"Twój bedas na zawołanie"</p>
                    </header>
                    <Routes fallback=|| view! { <OrdersPage /> }>
                        <Route path=path!("/") view=OrdersPage />
                        <Route path=path!("/statistics") view=StatisticsPage />
                    </Routes>
                </main>
                <footer class="app__footer">
                    <p>"Stworzone z miłości do bedasa."</p>
                </footer>
            </div>
        </Router>
    }
}
