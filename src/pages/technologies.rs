//! Technologies page: the stack behind the broader Foodgram product.

#[cfg(test)]
#[path = "technologies_test.rs"]
mod technologies_test;

use leptos::prelude::*;

use crate::components::layout::{Container, Main, Title};
use crate::components::page_meta::PageMeta;
use crate::styles::{StyleKey, class, classes};

pub const PAGE_TITLE: &str = "Технологии";
pub const SUBTITLE: &str = "Что под капотом Foodgram?";

/// One row of the stack list: bold category label plus value text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechEntry {
    pub label: &'static str,
    pub value: &'static str,
}

/// The seven stack entries, in display order.
pub const STACK: [TechEntry; 7] = [
    TechEntry { label: "Backend:", value: "Python, Django 3.2, Django REST Framework" },
    TechEntry { label: "Авторизация:", value: "Djoser" },
    TechEntry { label: "База данных:", value: "PostgreSQL" },
    TechEntry { label: "Контейнеризация:", value: "Docker" },
    TechEntry { label: "Frontend:", value: "React" },
    TechEntry { label: "Веб-сервер:", value: "Gunicorn + Nginx" },
    TechEntry { label: "CI/CD:", value: "GitHub Actions" },
];

/// Technologies page — static list of the product's stack.
#[component]
pub fn TechnologiesPage() -> impl IntoView {
    view! {
        <Main>
            <PageMeta title=PAGE_TITLE/>
            <Container>
                <div class=class(StyleKey::Content)>
                    <div>
                        <Title>{PAGE_TITLE}</Title>
                        <h2 class=class(StyleKey::Subtitle)>{SUBTITLE}</h2>

                        <p class=classes(&[StyleKey::Text, StyleKey::TextItem])>
                            "Проект построен на современных веб-технологиях, обеспечивающих стабильную работу, масштабируемость и удобство использования."
                        </p>

                        <ul class=class(StyleKey::Text)>
                            {STACK
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <li class=class(StyleKey::TextItem)>
                                            <strong>{entry.label}</strong>
                                            " "
                                            {entry.value}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>
            </Container>
        </Main>
    }
}
