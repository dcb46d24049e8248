use super::*;

#[test]
fn formats_small_values_with_cents() {
    assert_eq!(format_brl(0.0), "R$\u{a0}0,00");
    assert_eq!(format_brl(9.5), "R$\u{a0}9,50");
    assert_eq!(format_brl(0.1 + 0.2), "R$\u{a0}0,30");
}

#[test]
fn groups_thousands_with_dots() {
    assert_eq!(format_brl(1234.56), "R$\u{a0}1.234,56");
    assert_eq!(format_brl(1_000_000.0), "R$\u{a0}1.000.000,00");
    assert_eq!(format_brl(999.999), "R$\u{a0}1.000,00");
}

#[test]
fn negatives_lead_with_minus() {
    assert_eq!(format_brl(-15.2), "-R$\u{a0}15,20");
    assert_eq!(format_brl(-0.001), "R$\u{a0}0,00");
}
