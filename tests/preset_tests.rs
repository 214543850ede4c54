use format_pattern::presets::PresetManager;
use format_pattern::{get_current_decimal_count_in_pattern, has_thousands_separator};

#[test]
fn test_table_loads() {
    let manager = PresetManager::global();
    assert!(!manager.all().is_empty());
    assert_eq!(manager.all()[0].id, "automatic");
}

#[test]
fn test_lookup_by_id() {
    let manager = PresetManager::global();
    let currency = manager.get("currency").expect("currency preset");
    assert_eq!(currency.pattern, "$#,##0.00");
    assert_eq!(manager.get("automatic").expect("automatic").pattern, "General");
    assert!(manager.get("no-such-preset").is_none());
}

#[test]
fn test_presets_work_with_the_engine() {
    let manager = PresetManager::global();
    let number = manager.get("number").expect("number preset");
    assert!(has_thousands_separator(&number.pattern));
    assert_eq!(get_current_decimal_count_in_pattern(&number.pattern), 2);

    let percent = manager.get("percent").expect("percent preset");
    assert_eq!(get_current_decimal_count_in_pattern(&percent.pattern), 2);
}
