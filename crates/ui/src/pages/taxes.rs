//! Taxes page
//!
//! Hosts the debounced unique-code validation through the tax dialog.
//! Without edit or delete permission the rows expose no default action.

use dioxus::prelude::*;
use serde_json::{Value, json};

use tablero_api::ApiClient;
use tablero_core::{Action, EntityKind, RowAction, SearchField};
use tablero_model::{Tax, TaxField};

use crate::components::{
    Column, ConfirmDeleteDialog, DataTable, Pagination, SearchDialog, SelectOption, TaxDialog,
    TaxDialogMode,
};
use crate::hooks::use_entity_query;
use crate::pages::Toolbar;
use crate::state::{SESSION, TOASTS};

/// Taxes list page
#[component]
pub fn TaxesPage() -> Element {
    let mut query = use_entity_query::<TaxField, Tax>(EntityKind::Tax);

    let mut search_open = use_signal(|| false);
    let mut dialog = use_signal(|| None::<TaxDialogMode>);
    let mut delete_target = use_signal(|| None::<Tax>);
    let mut deleting = use_signal(|| false);

    let session = SESSION.read();
    let can_search = session.allows(Action::Ver, EntityKind::Tax);
    let can_create = session.allows(Action::Crear, EntityKind::Tax);
    let can_edit = session.allows(Action::Editar, EntityKind::Tax);
    let can_delete = session.allows(Action::Eliminar, EntityKind::Tax);
    let default_action = session.default_action(EntityKind::Tax);
    drop(session);

    let mut menu_actions = Vec::new();
    if can_edit {
        menu_actions.push(RowAction::Edit);
    }
    if can_delete {
        menu_actions.push(RowAction::Delete);
    }

    let rows = query.rows();
    let json_rows: Vec<Value> = rows
        .read()
        .iter()
        .map(|t| {
            json!({
                "id": t.id,
                "codigo": t.codigo,
                "nombre": t.nombre,
                "porcentaje": format!("{:.2}%", t.porcentaje),
                "activo": t.activo,
            })
        })
        .collect();

    let columns = vec![
        Column::new("codigo", "Código"),
        Column::new("nombre", "Nombre"),
        Column::new("porcentaje", "Porcentaje"),
        Column::new("activo", "Activo"),
    ];

    let on_action = move |(action, index): (RowAction, usize)| {
        let Some(record) = rows.read().get(index).cloned() else {
            return;
        };
        match action {
            RowAction::Edit => dialog.set(Some(TaxDialogMode::Edit(record))),
            RowAction::Delete => delete_target.set(Some(record)),
            _ => {}
        }
    };

    rsx! {
        div {
            class: "p-6",

            Toolbar {
                title: EntityKind::Tax.title().to_string(),
                can_search,
                can_add: can_create,
                searching: query.is_searching(),
                search_summary: query.search_summary(),
                on_search: move |_| {
                    query.with_store(|s| s.open_form());
                    search_open.set(true);
                },
                on_cancel_search: move |_| query.cancel_search(),
                on_add: move |_| dialog.set(Some(TaxDialogMode::Create)),
            }

            DataTable {
                columns,
                rows: json_rows,
                loading: query.is_loading(),
                default_action,
                menu_actions,
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
                        .and_then(|f| TaxField::all().iter().position(|x| *x == f))
                        .map(|i| i.to_string())
                        .unwrap_or_default();
                    rsx! {
                        SearchDialog {
                            title: "Buscar impuestos".to_string(),
                            field_options: TaxField::all()
                                .iter()
                                .enumerate()
                                .map(|(i, f)| SelectOption::new(i.to_string(), f.label()))
                                .collect::<Vec<_>>(),
                            selected_field: selected,
                            value: temp.value.clone(),
                            precise: temp.precise,
                            on_field_change: move |v: String| {
                                let field = v
                                    .parse::<usize>()
                                    .ok()
                                    .and_then(|i| TaxField::all().get(i).copied());
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

            if let Some(mode) = dialog.read().clone() {
                TaxDialog {
                    mode,
                    on_completed: move |_| query.mutation_completed(),
                    on_close: move |_| dialog.set(None),
                }
            }

            if let Some(target) = delete_target.read().clone() {
                ConfirmDeleteDialog {
                    title: "Eliminar impuesto".to_string(),
                    target_name: format!("{} ({})", target.nombre, target.codigo),
                    deleting: *deleting.read(),
                    on_confirm: move |_| {
                        if *deleting.read() {
                            return;
                        }
                        deleting.set(true);
                        let id = target.id;
                        spawn(async move {
                            let result = ApiClient::new().delete_tax(id).await;
                            deleting.set(false);
                            delete_target.set(None);
                            match result {
                                Ok(()) => TOASTS.write().success("Impuesto eliminado"),
                                Err(e) => TOASTS.write().error(e.user_message()),
                            };
                            query.mutation_completed();
                        });
                    },
                    on_cancel: move |_| delete_target.set(None),
                }
            }
        }
    }
}
