use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::store::OrdersStore;
use crate::domain::orders::stream::OrderEventStream;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use crate::system::admin::AdminContext;

#[component]
pub fn App() -> impl IntoView {
    let store = OrdersStore::new();
    provide_context(store);
    provide_context(AdminContext::load());

    // Fetch the active day whenever it changes (including the initial day).
    // The fetch replaces the day's cache entry wholesale.
    Effect::new(move |_| {
        let day = store.selected_day.get();
        spawn_local(async move {
            store.load_day(&day).await;
        });
    });

    // Keep the push channel open for the lifetime of the app; dropping the
    // stream on cleanup closes the EventSource and its listeners.
    match OrderEventStream::connect(store) {
        Ok(stream) => {
            // EventSource and its closures are not Send+Sync, store locally.
            let stream = StoredValue::new_local(Some(stream));
            on_cleanup(move || {
                stream.update_value(|s| {
                    s.take();
                });
            });
        }
        Err(e) => log::error!("{}", e),
    }

    view! {
        <ThemeProvider>
            <AppRoutes />
        </ThemeProvider>
    }
}
