use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::{
    config::SiteConfig,
    contact::{ContactForm, ContactMessage, ContactStatus, Field, SubmitBlocked},
};

/// Relays a contact message through the server-side relay. Input is validated
/// again here; the browser's checks are only a convenience.
#[server]
pub async fn send_contact_message(message: ContactMessage) -> Result<(), ServerFnError> {
    use crate::relay::{deliver, RelayHandle};

    let handle = use_context::<RelayHandle>().unwrap_or_default();
    let result = match handle.get() {
        Ok(relay) => deliver(relay, &message).await,
        Err(err) => Err(err),
    };
    match result {
        Ok(()) => {
            tracing::info!("relayed contact message from {}", message.email);
            Ok(())
        }
        Err(err) => {
            tracing::error!("failed to relay contact message: {err}");
            Err(ServerFnError::new("Failed to send message"))
        }
    }
}

fn status_class(status: ContactStatus) -> &'static str {
    match status {
        ContactStatus::Idle => "",
        ContactStatus::Sending => "text-yellow-300",
        ContactStatus::Success => "text-green-400",
        ContactStatus::Error => "text-red-400",
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (generation, message) = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(started)) => started,
            Some(Err(SubmitBlocked::Invalid(errors))) => {
                log::debug!("contact form blocked: {errors:?}");
                return;
            }
            Some(Err(SubmitBlocked::AlreadySending)) | None => return,
        };
        spawn_local(async move {
            let result = send_contact_message(message).await;
            if let Err(err) = &result {
                log::error!("contact message failed: {err}");
            }
            if let Some(Some(timer)) = form.try_update(|f| f.complete(generation, result.is_ok())) {
                set_timeout(
                    move || {
                        let _ = form.try_update(|f| f.clear_status(timer));
                    },
                    config.status_clear(),
                );
            }
        });
    };

    view! {
        <section
            id="contact"
            class="w-full min-h-screen relative bg-black overflow-hidden text-white py-10 px-6 md:px-20 flex flex-col md:flex-row items-center gap-10"
        >
            <div class="relative z-10 w-full flex flex-col md:flex-row items-center gap-10 max-w-6xl mx-auto">
                <div class="w-full md:w-1/2 flex justify-center">
                    <div class="w-72 h-72 rounded-full bg-gradient-to-br from-[#1cd8d2]/30 to-[#302b63]/30 blur-sm animate-pulse" />
                </div>
                <div class="w-full md:w-2/3 bg-white/5 p-8 rounded-2xl shadow-lg border border-white/10">
                    <h2 class="text-3xl font-semibold mb-3">"Let's Work Together"</h2>
                    <p class="text-gray-300 mb-6">
                        "I'm a fresher eager to learn and collaborate. Send me a message about your idea, project, or opportunity. I'd love to hear from you!"
                    </p>
                    <form class="flex flex-col gap-4" on:submit=on_submit>
                        <FormField form field=Field::Name label="Your Name" placeholder="Your Name" />
                        <FormField
                            form
                            field=Field::Email
                            label="Email"
                            placeholder="you@example.com"
                            input_type="email"
                        />
                        <FormField
                            form
                            field=Field::Subject
                            label="Subject (optional)"
                            placeholder="Example: Job Opportunity / Project Idea"
                        />
                        <FormField
                            form
                            field=Field::Message
                            label="Message"
                            placeholder="Write your message here..."
                            multiline=true
                        />
                        <div class="flex flex-col mt-1 gap-3">
                            <div class="text-sm">
                                {move || {
                                    let status = form.with(|f| f.status());
                                    status
                                        .notice()
                                        .map(|text| {
                                            view! { <span class=status_class(status)>{text}</span> }
                                        })
                                }}
                            </div>
                            <button
                                type="submit"
                                disabled=move || form.with(|f| f.status().is_sending())
                                class="px-5 py-2 rounded-md bg-gradient-to-r from-blue-500 to-indigo-500 text-white font-medium hover:from-blue-600 hover:to-indigo-600 transition disabled:opacity-60"
                            >
                                {move || {
                                    if form.with(|f| f.status().is_sending()) {
                                        "Sending..."
                                    } else {
                                        "Send Message"
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let error = move || form.with(|f| f.errors().get(field));
    let value = move || form.with(|f| f.message().get(field).to_string());
    let set = move |value: String| form.update(|f| f.set_field(field, value));
    let class = move || {
        format!(
            "p-3 rounded-md bg-white/8 border {} text-white focus:outline-none focus:ring-2 focus:ring-blue-400",
            if error().is_some() { "border-red-500" } else { "border-gray-600" },
        )
    };

    view! {
        <div class="flex flex-col">
            <label class="mb-1 text-sm">
                {label}
                {field.is_required().then(|| view! { " " <span class="text-red-500">"*"</span> })}
            </label>
            {if multiline {
                view! {
                    <textarea
                        name=field.as_str()
                        rows="5"
                        placeholder=placeholder
                        prop:value=value
                        on:input=move |ev| set(event_target_value(&ev))
                        class=move || format!("{} resize-none", class())
                    />
                }
                    .into_any()
            } else {
                view! {
                    <input
                        type=input_type.unwrap_or("text")
                        name=field.as_str()
                        placeholder=placeholder
                        prop:value=value
                        on:input=move |ev| set(event_target_value(&ev))
                        class=class
                    />
                }
                    .into_any()
            }}
            {move || error().map(|e| view! { <p class="text-red-500 text-xs">{e.to_string()}</p> })}
        </div>
    }
}
