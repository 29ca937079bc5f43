//! "Send Inquiry" modal on the profile page.

use std::time::Duration;

use common::{
    inquiry::{InquiryErrors, InquiryForm, InquiryOutcome, InquiryRequest},
    photographer::PhotographerId,
};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};
use dioxus_primitives::toast::{ToastOptions, consume_toast};

use crate::api::photographers_api::submit_inquiry;

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[component]
pub fn InquiryModal(photographer_id: ReadSignal<PhotographerId>, photographer_name: ReadSignal<String>, on_close: Callback<()>) -> Element {
    let mut form = use_signal(InquiryForm::default);
    let mut errors = use_signal(InquiryErrors::default);
    let mut sending = use_signal(|| false);

    // closing is blocked while a submission is in flight
    let try_close = move |_: ()| {
        if !sending() {
            on_close.call(());
        }
    };

    let do_submit = move |_: ()| async move {
        if sending() {
            return;
        }
        let found = form.read().validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(InquiryErrors::default());
        sending.set(true);
        let request = InquiryRequest { photographer_id: photographer_id.read().clone(), form: form.read().clone() };
        tracing::info!("Submitting inquiry for photographer {}", request.photographer_id);
        let toast_api = consume_toast();
        let outcome = submit_inquiry(request).await;
        sending.set(false);

        match outcome {
            Ok(InquiryOutcome::Sent) => {
                toast_api.success(
                    "Inquiry sent — photographer will contact you soon!".to_string(),
                    ToastOptions::new().duration(TOAST_DURATION).permanent(false),
                );
                form.set(InquiryForm::default());
                on_close.call(());
            }
            Ok(InquiryOutcome::Rejected(rejected)) => errors.set(rejected),
            Err(e) => {
                tracing::error!("inquiry submission failed: {e:#?}");
                toast_api.error(
                    "Could not send inquiry.".to_string(),
                    ToastOptions::new()
                        .description("Please try again in a moment.")
                        .duration(TOAST_DURATION)
                        .permanent(false),
                );
            }
        }
    };

    rsx! {
        div {
            id: "x-inquiry-modal-backdrop",
            style: "
                position: fixed;
                inset: 0;
                z-index: 50;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 16px;
                background: rgba(0, 0, 0, 0.4);
            ",
            onclick: move |_| try_close(()),
            div {
                class: "card",
                role: "dialog",
                aria_modal: "true",
                style: "width: 100%; max-width: 480px; padding: 20px; background: white;",
                onclick: move |e| e.stop_propagation(),
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 12px;",
                    h3 {
                        style: "font-size: 18px; font-weight: 600;",
                        "Send inquiry to {photographer_name}"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-ghost",
                        aria_label: "Close",
                        disabled: sending(),
                        onclick: move |_| try_close(()),
                        Icon { icon: MdClose, style: "width: 20px; height: 20px;" }
                    }
                }
                form {
                    style: "display: flex; flex-direction: column; gap: 12px;",
                    onsubmit: move |e: Event<FormData>| {
                        e.prevent_default();
                        do_submit(())
                    },
                    InquiryField {
                        label: "Name".to_string(),
                        error: errors.read().name.clone().unwrap_or_default(),
                        input {
                            class: "input",
                            r#type: "text",
                            value: "{form.read().name}",
                            oninput: move |e: Event<FormData>| form.write().name = e.value(),
                        }
                    }
                    InquiryField {
                        label: "Email".to_string(),
                        error: errors.read().email.clone().unwrap_or_default(),
                        input {
                            class: "input",
                            r#type: "email",
                            value: "{form.read().email}",
                            oninput: move |e: Event<FormData>| form.write().email = e.value(),
                        }
                    }
                    InquiryField {
                        label: "Message".to_string(),
                        error: errors.read().message.clone().unwrap_or_default(),
                        textarea {
                            class: "input",
                            rows: "4",
                            value: "{form.read().message}",
                            oninput: move |e: Event<FormData>| form.write().message = e.value(),
                        }
                    }
                    div {
                        style: "display: flex; justify-content: flex-end; gap: 8px;",
                        button {
                            r#type: "button",
                            class: "btn btn-ghost",
                            disabled: sending(),
                            onclick: move |_| try_close(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: sending(),
                            if sending() { "Sending…" } else { "Send" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InquiryField(label: String, error: String, children: Element) -> Element {
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; font-size: 14px;",
            span { class: "x-filter-label", "{label}" }
            {children}
            if !error.is_empty() {
                span {
                    style: "font-size: 12px; color: #DC2626;",
                    "{error}"
                }
            }
        }
    }
}
