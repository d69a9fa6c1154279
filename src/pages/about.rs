//! About page: project description, feature list, and outbound links.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

use crate::components::external_link::{ExternalLink, LinkSpec};
use crate::components::layout::{Container, Main, Title};
use crate::components::page_meta::PageMeta;
use crate::styles::{StyleKey, class, classes};

pub const PAGE_TITLE: &str = "О проекте";
pub const SUBTITLE: &str = "Добро пожаловать в Foodgram!";

/// The four feature bullets of the product pitch.
pub const FEATURES: [&str; 4] = [
    "создавать и редактировать собственные рецепты;",
    "добавлять рецепты в избранное и список покупок;",
    "скачивать список ингредиентов одним кликом;",
    "подписываться на любимых авторов.",
];

pub const REPO_LINK: LinkSpec = LinkSpec {
    href: "https://github.com/Guram-Gurych/foodgram",
    label: "GitHub",
};

pub const AUTHOR_LINK: LinkSpec = LinkSpec {
    href: "https://t.me/grch_grm",
    label: "Бледных Кирилл",
};

/// About page — static descriptive text about the product.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Main>
            <PageMeta title=PAGE_TITLE/>
            <Container>
                <div class=class(StyleKey::Content)>
                    <div>
                        <Title>{PAGE_TITLE}</Title>
                        <h2 class=class(StyleKey::Subtitle)>{SUBTITLE}</h2>

                        <p class=classes(&[StyleKey::Text, StyleKey::TextItem])>
                            <strong>"Foodgram"</strong>
                            " \u{2014} это онлайн-платформа, созданная в рамках обучения в Яндекс Практикуме, позволяющая пользователям удобно сохранять, публиковать и делиться кулинарными рецептами."
                        </p>

                        <p class=classes(&[StyleKey::Text, StyleKey::TextItem])>
                            "Основная идея проекта \u{2014} упростить процесс планирования готовки и покупок. Сайт предоставляет возможность:"
                        </p>

                        <ul class=class(StyleKey::Text)>
                            {FEATURES
                                .into_iter()
                                .map(|item| {
                                    view! { <li class=class(StyleKey::TextItem)>{item}</li> }
                                })
                                .collect::<Vec<_>>()}
                        </ul>

                        <p class=classes(&[StyleKey::Text, StyleKey::TextItem])>
                            "Регистрация доступна любому пользователю. Подтверждение email не требуется, вы можете использовать любой адрес."
                        </p>

                        <p class=classes(&[StyleKey::Text, StyleKey::TextItem])>
                            "Проект реализован с нуля и является частью итоговой работы."
                        </p>

                        <h3 class=class(StyleKey::AdditionalTitle)>"Ссылки"</h3>
                        <p class=class(StyleKey::Text)>
                            "Исходный код проекта:\u{a0}"
                            <ExternalLink spec=REPO_LINK/>
                            <br/>
                            "Автор:\u{a0}"
                            <ExternalLink spec=AUTHOR_LINK/>
                        </p>
                    </div>
                </div>
            </Container>
        </Main>
    }
}
