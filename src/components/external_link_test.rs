use super::*;

// =============================================================
// new-context attributes
// =============================================================

#[test]
fn target_opens_new_browsing_context() {
    assert_eq!(TARGET, "_blank");
}

#[test]
fn rel_strips_opener_reference() {
    let tokens: Vec<&str> = REL.split_whitespace().collect();
    assert!(tokens.contains(&"noopener"));
    assert!(tokens.contains(&"noreferrer"));
}

// =============================================================
// LinkSpec
// =============================================================

#[test]
fn link_spec_is_plain_data() {
    let spec = LinkSpec { href: "https://example.com", label: "Example" };
    let copy = spec;
    assert_eq!(copy, spec);
    assert_eq!(spec.href, "https://example.com");
    assert_eq!(spec.label, "Example");
}
