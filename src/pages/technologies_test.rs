use super::*;

// =============================================================
// Page metadata
// =============================================================

#[test]
fn page_title_is_technologies() {
    assert_eq!(PAGE_TITLE, "Технологии");
}

#[test]
fn subtitle_asks_whats_under_the_hood() {
    assert_eq!(SUBTITLE, "Что под капотом Foodgram?");
}

// =============================================================
// Stack entries
// =============================================================

#[test]
fn stack_has_exactly_seven_entries() {
    assert_eq!(STACK.len(), 7);
}

#[test]
fn stack_labels_are_in_display_order() {
    let labels: Vec<&str> = STACK.iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        [
            "Backend:",
            "Авторизация:",
            "База данных:",
            "Контейнеризация:",
            "Frontend:",
            "Веб-сервер:",
            "CI/CD:",
        ]
    );
}

#[test]
fn stack_values_are_nonempty() {
    for entry in STACK {
        assert!(!entry.value.is_empty(), "empty value for {}", entry.label);
    }
}

#[test]
fn stack_labels_are_distinct() {
    for (i, a) in STACK.iter().enumerate() {
        for (j, b) in STACK.iter().enumerate() {
            if i != j {
                assert_ne!(a.label, b.label);
            }
        }
    }
}

#[test]
fn stack_labels_end_with_colon() {
    for entry in STACK {
        assert!(entry.label.ends_with(':'), "label missing colon: {}", entry.label);
    }
}
