//! Scoped style-class mapping for the informational pages.
//!
//! The React original used per-page CSS modules; here the association from
//! logical style key to final class name is a compile-time table owned by
//! this crate. The final names are plain BEM-ish classes declared in
//! `style/foodgram-ui.css`.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

/// Logical style keys used by the informational pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleKey {
    Content,
    Title,
    Subtitle,
    Text,
    TextItem,
    AdditionalTitle,
    TextLink,
}

/// Every logical key, for exhaustiveness checks in tests.
pub const ALL_KEYS: [StyleKey; 7] = [
    StyleKey::Content,
    StyleKey::Title,
    StyleKey::Subtitle,
    StyleKey::Text,
    StyleKey::TextItem,
    StyleKey::AdditionalTitle,
    StyleKey::TextLink,
];

/// Final class name for a logical style key.
pub fn class(key: StyleKey) -> &'static str {
    match key {
        StyleKey::Content => "info-page__content",
        StyleKey::Title => "info-page__title",
        StyleKey::Subtitle => "info-page__subtitle",
        StyleKey::Text => "info-page__text",
        StyleKey::TextItem => "info-page__text-item",
        StyleKey::AdditionalTitle => "info-page__additional-title",
        StyleKey::TextLink => "info-page__text-link",
    }
}

/// Space-joined class list for elements composing several keys.
pub fn classes(keys: &[StyleKey]) -> String {
    keys.iter()
        .map(|key| class(*key))
        .collect::<Vec<_>>()
        .join(" ")
}
