use common::photographer::Photographer;
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_communication_icons::MdLocationOn, md_content_icons::MdLink, md_toggle_icons::MdStar}};
use dioxus_primitives::toast::{ToastOptions, consume_toast};

use crate::{
    api::photographers_api::get_photographer,
    components::{
        error_boundary::ComponentErrorDisplay,
        profile_components::{inquiry_modal::InquiryModal, portfolio_gallery::PortfolioGallery, reviews_list::ReviewsList},
        suspend_boundary::SuspendWrapper,
    },
    routes::Route,
};

/// Profile page for a single photographer
#[component]
pub fn ProfilePage(id: String) -> Element {
    rsx! {
        Title { "Pixisphere - Photographer" }
        SuspendWrapper { ProfileLoader { id } }
    }
}

#[component]
fn ProfileLoader(id: ReadSignal<String>) -> Element {
    let photographer = use_resource(move || async move {
        get_photographer(id.read().clone()).await
    }).suspend()?.cloned();
    let photographer = match photographer {
        Err(e) => {
            tracing::error!("profile fetch error: {e:#?}");
            return rsx! { ComponentErrorDisplay { error_txt: "Failed to load photographer.".to_string() } };
        }
        Ok(None) => return rsx! { PhotographerNotFound {} },
        Ok(Some(p)) => p,
    };
    rsx! {
        Title { "Pixisphere - {photographer.name}" }
        ProfileView { photographer }
    }
}

#[component]
fn PhotographerNotFound() -> Element {
    rsx! {
        div {
            class: "card",
            style: "padding: 24px; background: white; text-align: center;",
            p { style: "font-size: 18px; color: #374151;", "Photographer not found." }
            Link {
                to: Route::category_page_from_query(""),
                class: "btn btn-primary",
                style: "display: inline-block; margin-top: 12px;",
                "Back to photographers"
            }
        }
    }
}

#[component]
fn ProfileView(photographer: ReadSignal<Photographer>) -> Element {
    let p = photographer.read().clone();
    let mut inquiry_open = use_signal(|| false);
    let first_sample = p.portfolio.first().cloned();

    rsx! {
        article {
            id: "x-profile-root",
            class: "card",
            style: "padding: 24px; background: white;",
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 24px;",
                img {
                    src: "{p.profile_pic_or_default()}",
                    alt: "{p.name}",
                    style: "width: 240px; height: 240px; object-fit: cover; border-radius: 12px;",
                }
                div {
                    style: "flex: 1 1 280px; display: flex; flex-direction: column; gap: 8px;",
                    h1 { class: "page-title", "{p.name}" }
                    div {
                        style: "display: flex; align-items: center; gap: 4px; color: #4B5563; font-size: 14px;",
                        Icon { icon: MdLocationOn, style: "width: 18px; height: 18px;" }
                        "{p.location}"
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 16px; font-size: 15px;",
                        span { style: "font-weight: 600;", "{p.price_label()}" }
                        span {
                            style: "display: flex; align-items: center; gap: 2px;",
                            Icon { icon: MdStar, style: "width: 18px; height: 18px; color: #F59E0B;" }
                            "{p.rating_label()}"
                        }
                    }
                    p { style: "font-size: 15px; color: #374151;", "{p.bio}" }
                    BadgeRow { label: "Styles".to_string(), values: p.styles.clone() }
                    BadgeRow { label: "Tags".to_string(), values: p.tags.clone() }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 8px; margin-top: 8px;",
                        button {
                            r#type: "button",
                            class: "btn btn-primary",
                            onclick: move |_| inquiry_open.set(true),
                            "Send Inquiry"
                        }
                        if let Some(sample) = first_sample {
                            a {
                                class: "btn btn-ghost",
                                href: "{sample}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "View Sample"
                            }
                        }
                        CopyProfileLinkButton {}
                    }
                }
            }
            PortfolioGallery { images: p.portfolio.clone() }
            ReviewsList { reviews: p.reviews.clone() }
        }
        if inquiry_open() {
            InquiryModal {
                photographer_id: p.id.clone(),
                photographer_name: p.name.clone(),
                on_close: move |_| inquiry_open.set(false),
            }
        }
    }
}

#[component]
fn BadgeRow(label: String, values: Vec<String>) -> Element {
    if values.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; align-items: center; gap: 6px;",
            span { class: "x-filter-label", "{label}" }
            for value in values {
                span { key: "{value}", class: "badge", "{value}" }
            }
        }
    }
}

#[component]
fn CopyProfileLinkButton() -> Element {
    let do_copy_link = move |_: ()| async move {
        let Some(window) = web_sys::window() else { return };
        let Ok(url) = window.location().href() else { return };
        let promise = window.navigator().clipboard().write_text(&url);
        let toast_api = consume_toast();
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => {
                tracing::info!("Link copied to clipboard: {:#?}", url);
                toast_api.info(
                    "Link copied to clipboard.".to_string(),
                    ToastOptions::new()
                        .description("Share it with anyone planning a shoot.")
                        .duration(std::time::Duration::from_secs(4))
                        .permanent(false),
                );
            }
            Err(e) => {
                tracing::warn!("clipboard write failed: {e:?}");
                toast_api.error(
                    "Could not copy link.".to_string(),
                    ToastOptions::new().duration(std::time::Duration::from_secs(4)).permanent(false),
                );
            }
        }
    };
    rsx! {
        button {
            r#type: "button",
            class: "btn btn-ghost",
            style: "display: flex; align-items: center; gap: 4px;",
            onclick: move |_| do_copy_link(()),
            Icon { icon: MdLink, style: "width: 18px; height: 18px;" }
            "Copy link"
        }
    }
}
