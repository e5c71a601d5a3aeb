use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::view_state::{Section, ViewState};

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<ViewState>();

    let scroll_to = move |section: Section| {
        if let Some(el) = document().get_element_by_id(section.id()) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
        state.section_entered(section);
    };

    view! {
        <header class="sticky top-0 z-50 bg-white dark:bg-gray-800 shadow-md">
            <nav class="container mx-auto px-6 py-3 flex justify-between items-center">
                <div class="text-xl font-bold">
                    <span class="text-blue-600 dark:text-teal-300">"Sumit Dey"</span>
                </div>
                <div class="hidden md:flex space-x-8">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class=move || {
                                        if state.active() == section {
                                            "text-blue-600 dark:text-teal-300 font-medium"
                                        } else {
                                            "text-gray-600 dark:text-gray-300"
                                        }
                                    }
                                    on:click=move |_| scroll_to(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <ThemeToggle />
            </nav>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<ViewState>();

    view! {
        <button
            class="p-2 rounded-full bg-gray-200 dark:bg-gray-700"
            aria-label="Toggle dark mode"
            on:click=move |_| state.toggle_dark_mode()
        >
            {move || if state.dark_mode() { "☀️" } else { "🌙" }}
        </button>
    }
}
