use super::*;

// =============================================================
// description derivation
// =============================================================

#[test]
fn description_prefixes_site_name() {
    assert_eq!(description("О проекте"), "Фудграм - О проекте");
}

#[test]
fn description_for_technologies_page() {
    assert_eq!(description("Технологии"), "Фудграм - Технологии");
}

#[test]
fn description_keeps_title_verbatim() {
    let title = "Anything At All";
    assert!(description(title).ends_with(title));
}
