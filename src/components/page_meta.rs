//! Scoped head metadata for a single page.
//!
//! Renders the document title, the description meta tag, and the Open Graph
//! title through `leptos_meta`. The meta context registers the tags when the
//! page mounts and removes them again on unmount, so head state from one
//! page never leaks into the next.

#[cfg(test)]
#[path = "page_meta_test.rs"]
mod page_meta_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

/// Description meta value derived from a page title.
fn description(title: &str) -> String {
    format!("Фудграм - {title}")
}

/// Head tags for one informational page.
#[component]
pub fn PageMeta(title: &'static str) -> impl IntoView {
    view! {
        <Title text=title/>
        <Meta name="description" content=description(title)/>
        <Meta property="og:title" content=title/>
    }
}
