//! Audit log page
//!
//! Strictly read-only: no create, edit or delete anywhere, a taller page
//! size, and fuzzy-only search on user and action.

use dioxus::prelude::*;
use serde_json::{Value, json};

use tablero_core::{Action, EntityKind, RowAction, SearchField};
use tablero_model::{AuditEntry, AuditField};

use crate::components::{
    Column, DataTable, DetailDialog, Pagination, SearchDialog, SelectOption,
};
use crate::hooks::use_entity_query;
use crate::pages::Toolbar;
use crate::state::SESSION;

/// Audit log page
#[component]
pub fn AuditPage() -> Element {
    let mut query = use_entity_query::<AuditField, AuditEntry>(EntityKind::Audit);

    let mut search_open = use_signal(|| false);
    let mut detail = use_signal(|| None::<AuditEntry>);

    let can_search = SESSION.read().allows(Action::Ver, EntityKind::Audit);

    let rows = query.rows();
    let json_rows: Vec<Value> = rows
        .read()
        .iter()
        .map(|e| {
            json!({
                "id": e.id,
                "usuario": e.usuario,
                "accion": e.accion,
                "entidad": e.entidad,
                "fecha": e.fecha.format("%d/%m/%Y %H:%M").to_string(),
            })
        })
        .collect();

    let columns = vec![
        Column::new("usuario", "Usuario"),
        Column::new("accion", "Acción"),
        Column::new("entidad", "Entidad"),
        Column::new("fecha", "Fecha"),
    ];

    let on_action = move |(_, index): (RowAction, usize)| {
        if let Some(record) = rows.read().get(index).cloned() {
            detail.set(Some(record));
        }
    };

    rsx! {
        div {
            class: "p-6",

            Toolbar {
                title: EntityKind::Audit.title().to_string(),
                can_search,
                searching: query.is_searching(),
                search_summary: query.search_summary(),
                on_search: move |_| {
                    query.with_store(|s| s.open_form());
                    search_open.set(true);
                },
                on_cancel_search: move |_| query.cancel_search(),
            }

            DataTable {
                columns,
                rows: json_rows,
                loading: query.is_loading(),
                default_action: RowAction::View,
                on_action,
            }

            Pagination {
                page: query.page(),
                total_pages: query.total_pages(),
                on_page_change: move |p| query.go_to_page(p),
            }

            if *search_open.read() {
                {
                    let temp = query.temp();
                    let selected = temp
                        .field
                        .and_then(|f| AuditField::all().iter().position(|x| *x == f))
                        .map(|i| i.to_string())
                        .unwrap_or_default();
                    rsx! {
                        SearchDialog {
                            title: "Buscar en auditoría".to_string(),
                            field_options: AuditField::all()
                                .iter()
                                .enumerate()
                                .map(|(i, f)| SelectOption::new(i.to_string(), f.label()))
                                .collect::<Vec<_>>(),
                            selected_field: selected,
                            value: temp.value.clone(),
                            precise: temp.precise,
                            // The log only offers fuzzy matching
                            exact_capable: false,
                            on_field_change: move |v: String| {
                                let field = v
                                    .parse::<usize>()
                                    .ok()
                                    .and_then(|i| AuditField::all().get(i).copied());
                                query.with_store(|s| s.set_temp_field(field));
                            },
                            on_value_change: move |v: String| query.with_store(|s| s.set_temp_value(v)),
                            on_precise_change: move |v| query.with_store(|s| s.set_temp_precise(v)),
                            on_submit: move |_| {
                                if query.submit_search() {
                                    search_open.set(false);
                                }
                            },
                            on_close: move |_| {
                                query.with_store(|s| s.discard_temp());
                                search_open.set(false);
                            },
                        }
                    }
                }
            }

            if let Some(record) = detail.read().clone() {
                DetailDialog {
                    title: "Detalle del evento".to_string(),
                    fields: vec![
                        ("Usuario".to_string(), record.usuario.clone()),
                        ("Acción".to_string(), record.accion.clone()),
                        ("Entidad".to_string(), record.entidad.clone()),
                        ("Detalle".to_string(), record.detalle.clone().unwrap_or_else(|| "—".to_string())),
                        ("Fecha".to_string(), record.fecha.format("%d/%m/%Y %H:%M:%S").to_string()),
                    ],
                    on_close: move |_| detail.set(None),
                }
            }
        }
    }
}
