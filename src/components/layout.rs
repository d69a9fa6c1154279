//! Layout primitives shared by the informational pages.

use leptos::prelude::*;

use crate::styles::{StyleKey, class};

/// Page shell wrapping a page's full content.
#[component]
pub fn Main(children: Children) -> impl IntoView {
    view! { <main class="main">{children()}</main> }
}

/// Width-constrained content wrapper inside the page shell.
#[component]
pub fn Container(children: Children) -> impl IntoView {
    view! { <div class="container">{children()}</div> }
}

/// Page heading rendered with the title style.
#[component]
pub fn Title(children: Children) -> impl IntoView {
    view! { <h1 class=class(StyleKey::Title)>{children()}</h1> }
}
