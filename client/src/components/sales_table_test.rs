use super::*;

#[test]
fn each_status_gets_its_own_badge() {
    let classes = [RowStatus::Ativo, RowStatus::Pendente, RowStatus::Inativo].map(status_class);
    assert_eq!(classes, [
        "status-badge status-badge--active",
        "status-badge status-badge--pending",
        "status-badge status-badge--inactive",
    ]);
}

#[test]
fn ids_render_whole_numbers_without_decimals() {
    assert_eq!(format_id(3.0), "3");
    assert_eq!(format_id(1.5), "1.5");
}
