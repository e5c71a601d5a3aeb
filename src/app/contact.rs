use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};

use crate::contact::{send_message, ContactError, ContactSubmission, DeliveryConfig, DispatchState};
use crate::view_state::Section;

use super::reveal::RevealSection;

#[component]
pub fn ContactSection() -> impl IntoView {
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (dispatch, set_dispatch) = signal(DispatchState::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // One attempt per submission; ignore re-submits while in flight.
        if dispatch.get_untracked().is_in_flight() {
            return;
        }

        let (Some(_form), Some(name), Some(email), Some(message)) = (
            form_ref.get_untracked(),
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            log::error!("contact form submitted without a live form element");
            return;
        };

        let Some(config) = DeliveryConfig::from_build_env() else {
            log::error!("{}", ContactError::MissingConfig);
            return;
        };

        let submission = ContactSubmission {
            name: name.value(),
            email: email.value(),
            message: message.value(),
        };

        set_dispatch(dispatch.get_untracked().begin());
        spawn_local(async move {
            match send_message(&config, &submission).await {
                Ok(()) => {
                    set_dispatch(dispatch.get_untracked().resolve(true));
                    name.set_value("");
                    email.set_value("");
                    message.set_value("");
                }
                Err(err) => {
                    // Field values are left intact so the user can retry.
                    log::error!("{err}");
                    set_dispatch(dispatch.get_untracked().resolve(false));
                }
            }
        });
    };

    view! {
        <RevealSection section=Section::Contact class="py-20 px-4 bg-white dark:bg-gray-800">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold mb-12 text-center">"Get In Touch"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    <ContactInfo />
                    <form node_ref=form_ref on:submit=on_submit class="space-y-4">
                        <div>
                            <label for="name" class="block text-sm font-medium mb-1">
                                "Name"
                            </label>
                            <input
                                node_ref=name_ref
                                type="text"
                                id="name"
                                name="user_name"
                                class="w-full px-4 py-2 border rounded-lg border-gray-300 dark:bg-gray-700 dark:border-gray-600"
                                placeholder="Your name"
                                required
                            />
                        </div>
                        <div>
                            <label for="email" class="block text-sm font-medium mb-1">
                                "Email"
                            </label>
                            <input
                                node_ref=email_ref
                                type="email"
                                id="email"
                                name="user_email"
                                class="w-full px-4 py-2 border rounded-lg border-gray-300 dark:bg-gray-700 dark:border-gray-600"
                                placeholder="Your email"
                                required
                            />
                        </div>
                        <div>
                            <label for="message" class="block text-sm font-medium mb-1">
                                "Message"
                            </label>
                            <textarea
                                node_ref=message_ref
                                id="message"
                                name="message"
                                rows=4
                                class="w-full px-4 py-2 border rounded-lg border-gray-300 dark:bg-gray-700 dark:border-gray-600"
                                placeholder="Your message"
                                required
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class="w-full bg-blue-600 text-white py-2 px-4 rounded-lg hover:bg-blue-700"
                        >
                            {move || {
                                if dispatch.get().is_in_flight() {
                                    "Sending..."
                                } else {
                                    "Send Message"
                                }
                            }}
                        </button>
                        <DispatchNotice dispatch />
                    </form>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn DispatchNotice(dispatch: ReadSignal<DispatchState>) -> impl IntoView {
    move || match dispatch.get() {
        DispatchState::Idle | DispatchState::Submitting => None,
        DispatchState::Success => Some(
            view! {
                <p class="p-3 rounded-lg bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200">
                    "Your message has been sent successfully!"
                </p>
            }
            .into_any(),
        ),
        DispatchState::Failure => Some(
            view! {
                <p class="p-3 rounded-lg bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200">
                    "There was an error sending your message. Please try again."
                </p>
            }
            .into_any(),
        ),
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let entries = [
        ("Email", "sumitdey9434@gmail.com"),
        ("Phone", "+91 8617088046"),
        ("Location", "Kolkata, India"),
    ];

    view! {
        <div class="space-y-6">
            {entries
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div>
                            <h3 class="font-semibold">{label}</h3>
                            <p class="text-gray-600 dark:text-gray-300">{value}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
