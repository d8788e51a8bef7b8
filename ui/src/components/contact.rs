use dioxus::prelude::*;
use tracing::{debug, info, warn};

use crate::components::language::use_language;
use crate::content::{CONTACT_INFO, CONTACT_TITLE};
use crate::core::config::use_site_config;
use crate::core::form::{ErrorKind, Field, FormState, SubmitStatus};
use crate::core::lang::Language;
use crate::core::platform;
use crate::core::submit::submit_contact;
use crate::t;

/// Inline message for a stored error. Rebuilt on every render, so a language
/// switch rephrases errors that are already on screen.
fn error_message(field: Field, kind: ErrorKind, lang: Language) -> String {
    match kind {
        ErrorKind::MissingField => t!("form-error-required", label = field.label().get(lang)),
        ErrorKind::InvalidEmailFormat => t!("form-error-email"),
    }
}

#[component]
pub fn ContactSection() -> Element {
    let lang = use_language()();

    rsx! {
        section { id: "contact", class: "contact-section",
            h2 { "{CONTACT_TITLE.get(lang)}" }
            div { class: "contact-grid",
                ul { class: "contact-info",
                    for item in CONTACT_INFO {
                        li { class: "contact-info-item",
                            i { class: "{item.icon}", aria_hidden: "true" }
                            " {item.text.get(lang)}"
                        }
                    }
                }
                ContactForm {}
            }
        }
    }
}

/// Contact form. Validation runs on submit only; a valid form is sent once in
/// the background and replaced by the thank-you message on success.
#[component]
pub fn ContactForm() -> Element {
    let lang = use_language()();
    let endpoint = use_site_config().form_endpoint;
    let mut state = use_signal(FormState::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(payload) = state.with_mut(|s| s.begin_submit()) else {
            debug!(errors = state.read().errors.len(), "contact form not sent");
            return;
        };
        let endpoint = endpoint.clone();
        platform::spawn_future(async move {
            let outcome = submit_contact(&endpoint, &payload).await;
            let failed = outcome.is_err();
            match &outcome {
                Ok(()) => info!("contact form delivered"),
                Err(err) => warn!("contact form submission failed: {err}"),
            }
            state.with_mut(|s| s.finish_submit(outcome));
            if failed {
                #[cfg(target_arch = "wasm32")]
                crate::core::dom::alert(&t!("form-submit-failed"));
                state.with_mut(|s| s.acknowledge_failure());
            }
        });
    };

    let snapshot = state();
    let sending = snapshot.status == SubmitStatus::Sending;

    rsx! {
        if snapshot.show_form() {
            form {
                id: "contact-form",
                class: "contact-form",
                novalidate: true,
                onsubmit,
                for field in Field::REQUIRED {
                    div { key: "{field.name()}", class: "form-group",
                        label { r#for: field.name(), "{field.label().get(lang)}" }
                        if field == Field::Message {
                            textarea {
                                id: field.name(),
                                name: field.name(),
                                rows: "5",
                                class: if snapshot.error_for(field).is_some() { "error" },
                                placeholder: field.placeholder().get(lang),
                                value: snapshot.form.value(field).to_string(),
                                oninput: move |evt: FormEvent| state.with_mut(|s| s.form.set(field, evt.value())),
                            }
                        } else {
                            input {
                                id: field.name(),
                                name: field.name(),
                                r#type: if field == Field::Email { "email" } else { "text" },
                                class: if snapshot.error_for(field).is_some() { "error" },
                                placeholder: field.placeholder().get(lang),
                                value: snapshot.form.value(field).to_string(),
                                oninput: move |evt: FormEvent| state.with_mut(|s| s.form.set(field, evt.value())),
                            }
                        }
                        if let Some(kind) = snapshot.error_for(field) {
                            div { class: "error-message", role: "alert",
                                {error_message(field, kind, lang)}
                            }
                        }
                    }
                }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: sending,
                    if sending {
                        {t!("form-sending")}
                    } else {
                        {t!("form-submit")}
                    }
                }
            }
        }
        if snapshot.show_thank_you() {
            p { id: "thank-you-message", class: "thank-you", role: "status",
                {t!("form-thank-you")}
            }
        }
    }
}
