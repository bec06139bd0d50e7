use leptos::prelude::*;

use crate::api::contact::submit_contact;

/// Contact form with an inline status line.
///
/// On success the fields clear and the status hides itself after five
/// seconds. On failure the backend's error text shows and the fields keep
/// their values so the visitor can correct and resend.
#[component]
pub fn ContactForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(None::<(bool, String)>);
    // Bumped on every status change so a stale auto-hide timer can tell it
    // no longer owns the line.
    let status_epoch = StoredValue::new(0u64);

    let submit = Action::new(|input: &(String, String, String, String)| {
        let (name, email, subject, message) = input.clone();
        async move { submit_contact(name, email, subject, message).await }
    });

    Effect::new(move |_| {
        if let Some(result) = submit.value().get() {
            let epoch = status_epoch.with_value(|e| e + 1);
            status_epoch.set_value(epoch);
            match result {
                Ok(response) => {
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_subject.set(String::new());
                    set_message.set(String::new());
                    set_status.set(Some((true, response.message)));
                    hide_after_delay(set_status, status_epoch, epoch);
                }
                Err(e) => {
                    set_status.set(Some((false, error_status_text(e))));
                }
            }
        }
    });

    view! {
        <section id="contact" class="contact">
            <h2>"Contact"</h2>
            <form
                id="contact-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.dispatch((name.get(), email.get(), subject.get(), message.get()));
                }
            >
                <input
                    id="name"
                    type="text"
                    placeholder="Your name"
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    id="email"
                    type="email"
                    placeholder="Your email"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    id="subject"
                    type="text"
                    placeholder="Subject (optional)"
                    prop:value=subject
                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                />
                <textarea
                    id="message"
                    placeholder="Your message"
                    prop:value=message
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || submit.pending().get()>
                    {move || if submit.pending().get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
            <div
                id="form-status"
                class=move || match status.get() {
                    Some((true, _)) => "form-status success",
                    Some((false, _)) => "form-status error",
                    None => "form-status",
                }
            >
                {move || status.get().map(|(_, text)| text)}
            </div>
        </section>
    }
}

/// The backend's own message, without the server-fn transport wrapper.
fn error_status_text(e: ServerFnError) -> String {
    match e {
        ServerFnError::ServerError(msg) => msg,
        other => other.to_string(),
    }
}

/// True when the timer that fired was scheduled for the current status.
fn timer_owns_status(current_epoch: u64, timer_epoch: u64) -> bool {
    current_epoch == timer_epoch
}

/// Hide the status line after five seconds, unless a newer status has taken
/// it over in the meantime. No-op during SSR.
#[cfg(feature = "hydrate")]
fn hide_after_delay(
    set_status: WriteSignal<Option<(bool, String)>>,
    epoch_cell: StoredValue<u64>,
    epoch: u64,
) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(5_000).await;
        if timer_owns_status(epoch_cell.get_value(), epoch) {
            set_status.set(None);
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn hide_after_delay(
    _set_status: WriteSignal<Option<(bool, String)>>,
    _epoch_cell: StoredValue<u64>,
    _epoch: u64,
) {
}
