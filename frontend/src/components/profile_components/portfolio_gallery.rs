use dioxus::prelude::*;

#[component]
pub fn PortfolioGallery(images: ReadSignal<Vec<String>>) -> Element {
    let images = images.read().clone();
    rsx! {
        section {
            style: "margin-top: 24px;",
            h2 { style: "font-size: 20px; font-weight: 600; margin-bottom: 12px;", "Portfolio" }
            if images.is_empty() {
                p { style: "font-size: 14px; color: #6B7280;", "No portfolio images yet." }
            } else {
                div {
                    class: "grid-cols-responsive",
                    for (i, src) in images.into_iter().enumerate() {
                        a {
                            key: "{i}",
                            href: "{src}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "card lift",
                            style: "display: block; overflow: hidden;",
                            img {
                                src: "{src}",
                                alt: "Portfolio image {i + 1}",
                                loading: "lazy",
                                style: "width: 100%; height: 200px; object-fit: cover; display: block;",
                            }
                        }
                    }
                }
            }
        }
    }
}
