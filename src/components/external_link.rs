//! Outbound hyperlink that opens in a new browsing context.

#[cfg(test)]
#[path = "external_link_test.rs"]
mod external_link_test;

use leptos::prelude::*;

use crate::styles::{StyleKey, class};

/// Browsing-context target for outbound links.
pub const TARGET: &str = "_blank";

/// `rel` value stripping the opener reference from the new context
/// (reverse-tabnabbing protection).
pub const REL: &str = "noopener noreferrer";

/// An outbound link's fixed target URL and visible text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkSpec {
    pub href: &'static str,
    pub label: &'static str,
}

/// Styled anchor to an external resource; the new context gets no opener.
#[component]
pub fn ExternalLink(spec: LinkSpec) -> impl IntoView {
    view! {
        <a href=spec.href class=class(StyleKey::TextLink) target=TARGET rel=REL>
            {spec.label}
        </a>
    }
}
