//! Product table with status badges and BRL-formatted values.

#[cfg(test)]
#[path = "sales_table_test.rs"]
mod sales_table_test;

use leptos::prelude::*;

use crate::net::types::{RowStatus, TableRow};
use crate::util::format::format_brl;
use crate::util::i18n::{Locale, Text};

/// Badge classes for a row status.
pub fn status_class(status: RowStatus) -> &'static str {
    match status {
        RowStatus::Ativo => "status-badge status-badge--active",
        RowStatus::Pendente => "status-badge status-badge--pending",
        RowStatus::Inativo => "status-badge status-badge--inactive",
    }
}

/// Row id as shown in the first column: `3` for `3.0`, `1.5` as is.
pub fn format_id(id: f64) -> String {
    id.to_string()
}

#[component]
pub fn SalesTable(rows: Vec<TableRow>) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let t = move |key: Text| locale.get().text(key);
    let body = rows
        .into_iter()
        .map(|row| {
            view! {
                <tr class="sales-table__row">
                    <td>{format_id(row.id)}</td>
                    <td class="sales-table__name">{row.nome}</td>
                    <td>
                        <span class=status_class(row.status)>{row.status.label()}</span>
                    </td>
                    <td>{format_brl(row.valor)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="sales-table">
            <h3 class="sales-table__title">{move || t(Text::TableTitle)}</h3>
            <div class="sales-table__scroll">
                <table>
                    <thead>
                        <tr>
                            <th>{move || t(Text::ColumnId)}</th>
                            <th>{move || t(Text::ColumnName)}</th>
                            <th>{move || t(Text::ColumnStatus)}</th>
                            <th>{move || t(Text::ColumnValue)}</th>
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        </section>
    }
}
