mod contact;
mod home;
mod nav;
mod observe;
mod reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::view_state::ViewState;

use home::HomePage;
use nav::NavBar;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-50 dark:bg-gray-900 text-gray-800 dark:text-gray-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Single owner of active-section, theme and reveal state, shared with
    // the whole tree through context.
    let state = ViewState::new();
    provide_context(state);

    // Mirror the in-memory theme flag onto the document root, where the
    // stylesheet picks its palette from the `dark` class. Effects only run
    // in the browser, so this never touches a server-side document.
    Effect::new(move |_| {
        if let Some(root) = document().document_element() {
            let class_list = root.class_list();
            let _ = if state.dark_mode() {
                class_list.add_1("dark")
            } else {
                class_list.remove_1("dark")
            };
        }
    });

    view! {
        // sets the document title
        <Title formatter=|title| format!("Sumit Dey - {title}") />

        <Router>
            <NavBar />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
