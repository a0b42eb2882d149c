use leptos::{html, prelude::*};
use leptos_use::{use_clipboard, use_timeout_fn, UseClipboardReturn, UseTimeoutFnReturn};

use crate::config::SUBMITTED_DISPLAY_MS;
use crate::contact::{ContactError, ContactForm, Field, LogDelivery};
use crate::profiles::Profile;

use super::reveal::{reveal_class, use_reveal};

/// Contact section. Unlike the other sections it survives profile switches,
/// so the reveal re-arms through the profile key instead of a remount.
#[component]
pub fn Contact(#[prop(into)] profile: Signal<&'static Profile>) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let key = Signal::derive(move || profile.get().id.clone());
    let revealed = use_reveal(section, key);

    let form = RwSignal::new(ContactForm::new());
    let (error, set_error) = signal(None::<ContactError>);

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| form.update(ContactForm::finish),
        SUBMITTED_DISPLAY_MS,
    );

    let on_submit = move |e: leptos::ev::SubmitEvent| {
        e.prevent_default();
        let outcome = form.try_update(|f| f.submit(&LogDelivery));
        match outcome {
            Some(Ok(true)) => {
                set_error.set(None);
                start(());
            }
            Some(Ok(false)) | None => {}
            Some(Err(e)) => {
                log::debug!("contact form rejected: {e}");
                set_error.set(Some(e));
            }
        }
    };

    view! {
        <section node_ref=section id="contact" class="py-24 px-6 bg-gradient-to-b from-gray-950 to-black">
            <div class=move || format!("mx-auto max-w-6xl {}", reveal_class(revealed.get()))>
                <h2 class="text-4xl font-bold mb-4">"Get In " <span class="text-red-600">"Touch"</span></h2>
                <p class="text-gray-400 mb-12">
                    {move || format!("Have a project in mind? Drop {} a line.", profile.get().first_name())}
                </p>
                <div class="grid md:grid-cols-2 gap-12">
                    {move || {
                        let profile = profile.get();
                        view! { <ContactInfo profile /> }
                    }}
                    <Show
                        when=move || !form.with(ContactForm::is_submitted)
                        fallback=|| {
                            view! {
                                <div class="rounded-lg bg-gray-900 border border-green-700 p-8 text-center animate-fadeIn">
                                    <p class="text-2xl font-semibold text-green-400 mb-2">"Message Sent!"</p>
                                    <p class="text-gray-400">"Thanks for reaching out. I'll get back to you soon."</p>
                                </div>
                            }
                        }
                    >
                        <form class="space-y-4" on:submit=on_submit.clone()>
                            {Field::ALL
                                .into_iter()
                                .map(|field| view! { <FormField field form /> })
                                .collect_view()}
                            {move || {
                                error
                                    .get()
                                    .map(|e| view! { <p class="text-sm text-red-400">{e.to_string()}</p> })
                            }}
                            <button
                                type="submit"
                                class="w-full py-3 rounded bg-red-600 hover:bg-red-700 text-white font-semibold"
                            >
                                "Send Message"
                            </button>
                        </form>
                    </Show>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(field: Field, form: RwSignal<ContactForm>) -> impl IntoView {
    let class = "w-full rounded bg-gray-900 border border-gray-700 px-4 py-2 focus:outline-none focus:ring-2 focus:ring-red-600";
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |e: leptos::ev::Event| {
        let text = event_target_value(&e);
        form.update(|f| f.set(field, text));
    };
    let placeholder = field.label();

    match field {
        Field::Message => view! {
            <textarea rows="5" required class=class placeholder=placeholder prop:value=value on:input=on_input></textarea>
        }
        .into_any(),
        Field::Email => view! {
            <input type="email" required class=class placeholder=placeholder prop:value=value on:input=on_input />
        }
        .into_any(),
        Field::Name | Field::Subject => view! {
            <input type="text" required class=class placeholder=placeholder prop:value=value on:input=on_input />
        }
        .into_any(),
    }
}

#[component]
fn ContactInfo(profile: &'static Profile) -> impl IntoView {
    let UseClipboardReturn {
        is_supported,
        copied,
        copy,
        ..
    } = use_clipboard();
    let address = profile.email_address();

    view! {
        <div class="space-y-4">
            <div class="rounded-lg bg-gray-900 border border-gray-800 p-5">
                <p class="text-sm text-gray-500 mb-1">"Email"</p>
                <a href=profile.email.clone() class="text-lg hover:text-red-500 break-all">{address.to_string()}</a>
                <div class="mt-2">
                    <Show
                        when=move || is_supported.get()
                        fallback=|| view! { <span class="text-xs text-gray-500">"Clipboard unavailable"</span> }
                    >
                        <button
                            class="text-xs text-gray-400 hover:text-white"
                            on:click={
                                let copy = copy.clone();
                                move |_| copy(address)
                            }
                        >
                            {move || if copied.get() { "Copied!" } else { "Copy email" }}
                        </button>
                    </Show>
                </div>
            </div>
            <div class="rounded-lg bg-gray-900 border border-gray-800 p-5">
                <p class="text-sm text-gray-500 mb-1">"Phone"</p>
                <a href=profile.tel_link() class="text-lg hover:text-red-500">{profile.phone_number().to_string()}</a>
                {profile
                    .phone_note()
                    .map(|note| view! { <p class="text-xs text-gray-500 mt-1">{format!("({note})")}</p> })}
            </div>
            {(!profile.location.is_empty())
                .then(|| {
                    view! {
                        <div class="rounded-lg bg-gray-900 border border-gray-800 p-5">
                            <p class="text-sm text-gray-500 mb-1">"Location"</p>
                            <p class="text-lg">{profile.location.clone()}</p>
                        </div>
                    }
                })}
        </div>
    }
}
