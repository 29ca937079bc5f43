//! Renders text with the current search term marked.

use common::text_highlight::{HighlightTextSpan, highlight};
use dioxus::prelude::*;

#[component]
pub fn HighlightedText(text: String, query: String) -> Element {
    render_highlight_text_span(highlight(&text, &query))
}

fn render_highlight_text_span(spans: Vec<HighlightTextSpan>) -> Element {
    let spans = spans.into_iter().map(|i| {
        rsx! {
            if i.is_highlighted {
                mark {
                    class: "x-highlight",
                    "{i.text}"
                }
            } else {
                span { "{i.text}" }
            }
        }
    }).collect::<Vec<_>>();
    rsx! {
        {spans.into_iter()}
    }
}
