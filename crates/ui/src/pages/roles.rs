//! Roles page
//!
//! The one page whose fallback row action is "Ver elementos": rows drill
//! into the role's permission matrix instead of a flat detail view.
//! System roles refuse deletion client-side before the backend does.

use dioxus::prelude::*;
use serde_json::{Value, json};

use tablero_api::ApiClient;
use tablero_core::{Action, EntityKind, RowAction, SearchField};
use tablero_model::{Role, RoleField};

use crate::components::{
    Column, ConfirmDeleteDialog, DataTable, DetailDialog, Pagination, RoleDialog, RoleDialogMode,
    SearchDialog, SelectOption,
};
use crate::hooks::use_entity_query;
use crate::pages::Toolbar;
use crate::state::{SESSION, TOASTS};

/// Actions summarised in the permission drill-down
const SUMMARY_ACTIONS: [Action; 4] = [Action::Ver, Action::Crear, Action::Editar, Action::Eliminar];

/// Roles list page
#[component]
pub fn RolesPage() -> Element {
    let mut query = use_entity_query::<RoleField, Role>(EntityKind::Role);

    let mut search_open = use_signal(|| false);
    let mut dialog = use_signal(|| None::<RoleDialogMode>);
    let mut delete_target = use_signal(|| None::<Role>);
    let mut elements_of = use_signal(|| None::<Role>);
    let mut deleting = use_signal(|| false);

    let session = SESSION.read();
    let can_search = session.allows(Action::Ver, EntityKind::Role);
    let can_create = session.allows(Action::Crear, EntityKind::Role);
    let can_edit = session.allows(Action::Editar, EntityKind::Role);
    let can_delete = session.allows(Action::Eliminar, EntityKind::Role);
    let default_action = session.default_action(EntityKind::Role);
    drop(session);

    let mut menu_actions = vec![RowAction::ViewElements];
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
        .map(|r| {
            json!({
                "id": r.id,
                "nombre": r.nombre,
                "descripcion": r.descripcion,
                "es_sistema": r.es_sistema,
            })
        })
        .collect();

    let columns = vec![
        Column::new("nombre", "Nombre"),
        Column::new("descripcion", "Descripción"),
        Column::new("es_sistema", "Sistema"),
    ];

    let on_action = move |(action, index): (RowAction, usize)| {
        let Some(record) = rows.read().get(index).cloned() else {
            return;
        };
        match action {
            RowAction::Edit => dialog.set(Some(RoleDialogMode::Edit(record))),
            RowAction::Delete => {
                if record.es_sistema {
                    TOASTS
                        .write()
                        .error("Los roles del sistema no pueden eliminarse");
                } else {
                    delete_target.set(Some(record));
                }
            }
            _ => elements_of.set(Some(record)),
        }
    };

    rsx! {
        div {
            class: "p-6",

            Toolbar {
                title: EntityKind::Role.title().to_string(),
                can_search,
                can_add: can_create,
                searching: query.is_searching(),
                search_summary: query.search_summary(),
                on_search: move |_| {
                    query.with_store(|s| s.open_form());
                    search_open.set(true);
                },
                on_cancel_search: move |_| query.cancel_search(),
                on_add: move |_| dialog.set(Some(RoleDialogMode::Create)),
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
                        .and_then(|f| RoleField::all().iter().position(|x| *x == f))
                        .map(|i| i.to_string())
                        .unwrap_or_default();
                    rsx! {
                        SearchDialog {
                            title: "Buscar roles".to_string(),
                            field_options: RoleField::all()
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
                                    .and_then(|i| RoleField::all().get(i).copied());
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
                RoleDialog {
                    mode,
                    on_completed: move |_| query.mutation_completed(),
                    on_close: move |_| dialog.set(None),
                }
            }

            if let Some(target) = delete_target.read().clone() {
                ConfirmDeleteDialog {
                    title: "Eliminar rol".to_string(),
                    target_name: target.nombre.clone(),
                    deleting: *deleting.read(),
                    on_confirm: move |_| {
                        if *deleting.read() {
                            return;
                        }
                        deleting.set(true);
                        let id = target.id;
                        spawn(async move {
                            let result = ApiClient::new().delete_role(id).await;
                            deleting.set(false);
                            delete_target.set(None);
                            match result {
                                Ok(()) => TOASTS.write().success("Rol eliminado"),
                                Err(e) => TOASTS.write().error(e.user_message()),
                            };
                            query.mutation_completed();
                        });
                    },
                    on_cancel: move |_| delete_target.set(None),
                }
            }

            // Permission drill-down ("Ver elementos")
            if let Some(role) = elements_of.read().clone() {
                DetailDialog {
                    title: format!("Permisos de {}", role.nombre),
                    fields: EntityKind::ALL
                        .iter()
                        .map(|entity| {
                            let granted: Vec<&str> = SUMMARY_ACTIONS
                                .iter()
                                .filter(|a| role.permisos.allows(**a, *entity))
                                .map(|a| a.key())
                                .collect();
                            let summary = if granted.is_empty() {
                                "—".to_string()
                            } else {
                                granted.join(", ")
                            };
                            (entity.title().to_string(), summary)
                        })
                        .collect::<Vec<_>>(),
                    on_close: move |_| elements_of.set(None),
                }
            }
        }
    }
}
