//! Clients page
//!
//! The busiest view of the dashboard: four searchable fields, each with
//! exact and fuzzy variants, plus the full create/edit/delete cycle.

use dioxus::prelude::*;
use serde_json::{Value, json};

use tablero_api::ApiClient;
use tablero_core::{Action, EntityKind, RowAction, SearchField};
use tablero_model::{Client, ClientField};

use crate::components::{
    ClientDialog, ClientDialogMode, Column, ConfirmDeleteDialog, DataTable, DetailDialog,
    Pagination, SearchDialog, SelectOption,
};
use crate::hooks::use_entity_query;
use crate::pages::Toolbar;
use crate::state::{SESSION, TOASTS};

/// Clients list page
#[component]
pub fn ClientsPage() -> Element {
    let mut query = use_entity_query::<ClientField, Client>(EntityKind::Client);

    let mut search_open = use_signal(|| false);
    let mut dialog = use_signal(|| None::<ClientDialogMode>);
    let mut delete_target = use_signal(|| None::<Client>);
    let mut detail = use_signal(|| None::<Client>);
    let mut deleting = use_signal(|| false);

    let session = SESSION.read();
    let can_search = session.allows(Action::Ver, EntityKind::Client);
    let can_create = session.allows(Action::Crear, EntityKind::Client);
    let can_edit = session.allows(Action::Editar, EntityKind::Client);
    let can_delete = session.allows(Action::Eliminar, EntityKind::Client);
    let default_action = session.default_action(EntityKind::Client);
    drop(session);

    let mut menu_actions = vec![RowAction::View];
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
        .map(|c| {
            json!({
                "id": c.id,
                "nombre": c.nombre,
                "apellido": c.apellido,
                "documento": c.documento,
                "telefono": c.telefono,
                "email": c.email,
                "fecha_registro": c.fecha_registro.format("%d/%m/%Y").to_string(),
            })
        })
        .collect();

    let columns = vec![
        Column::new("nombre", "Nombre"),
        Column::new("apellido", "Apellido"),
        Column::new("documento", "Documento"),
        Column::new("telefono", "Teléfono"),
        Column::new("email", "Email"),
        Column::new("fecha_registro", "Registrado"),
    ];

    let on_action = move |(action, index): (RowAction, usize)| {
        let Some(record) = rows.read().get(index).cloned() else {
            return;
        };
        match action {
            RowAction::Edit => dialog.set(Some(ClientDialogMode::Edit(record))),
            RowAction::Delete => delete_target.set(Some(record)),
            _ => detail.set(Some(record)),
        }
    };

    rsx! {
        div {
            class: "p-6",

            Toolbar {
                title: EntityKind::Client.title().to_string(),
                can_search,
                can_add: can_create,
                searching: query.is_searching(),
                search_summary: query.search_summary(),
                on_search: move |_| {
                    query.with_store(|s| s.open_form());
                    search_open.set(true);
                },
                on_cancel_search: move |_| query.cancel_search(),
                on_add: move |_| dialog.set(Some(ClientDialogMode::Create)),
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

            // Search form
            if *search_open.read() {
                {
                    let temp = query.temp();
                    let selected = temp
                        .field
                        .and_then(|f| ClientField::all().iter().position(|x| *x == f))
                        .map(|i| i.to_string())
                        .unwrap_or_default();
                    let exact_capable = temp.field.map(|f| f.exact_capable()).unwrap_or(true);
                    rsx! {
                        SearchDialog {
                            title: "Buscar clientes".to_string(),
                            field_options: ClientField::all()
                                .iter()
                                .enumerate()
                                .map(|(i, f)| SelectOption::new(i.to_string(), f.label()))
                                .collect::<Vec<_>>(),
                            selected_field: selected,
                            value: temp.value.clone(),
                            precise: temp.precise,
                            exact_capable,
                            on_field_change: move |v: String| {
                                let field = v
                                    .parse::<usize>()
                                    .ok()
                                    .and_then(|i| ClientField::all().get(i).copied());
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

            // Create / edit form
            if let Some(mode) = dialog.read().clone() {
                ClientDialog {
                    mode,
                    on_completed: move |_| query.mutation_completed(),
                    on_close: move |_| dialog.set(None),
                }
            }

            // Delete confirmation
            if let Some(target) = delete_target.read().clone() {
                ConfirmDeleteDialog {
                    title: "Eliminar cliente".to_string(),
                    target_name: target.display_name(),
                    deleting: *deleting.read(),
                    on_confirm: move |_| {
                        if *deleting.read() {
                            return;
                        }
                        deleting.set(true);
                        let id = target.id;
                        spawn(async move {
                            let result = ApiClient::new().delete_client(id).await;
                            deleting.set(false);
                            delete_target.set(None);
                            match result {
                                Ok(()) => TOASTS.write().success("Cliente eliminado"),
                                Err(e) => TOASTS.write().error(e.user_message()),
                            };
                            query.mutation_completed();
                        });
                    },
                    on_cancel: move |_| delete_target.set(None),
                }
            }

            // Read-only detail
            if let Some(record) = detail.read().clone() {
                DetailDialog {
                    title: "Detalle del cliente".to_string(),
                    fields: vec![
                        ("Nombre".to_string(), record.display_name()),
                        ("Documento".to_string(), record.documento.clone()),
                        ("Teléfono".to_string(), record.telefono.clone()),
                        ("Dirección".to_string(), record.direccion.clone().unwrap_or_else(|| "—".to_string())),
                        ("Email".to_string(), record.email.clone().unwrap_or_else(|| "—".to_string())),
                        ("Registrado".to_string(), record.fecha_registro.format("%d/%m/%Y %H:%M").to_string()),
                    ],
                    on_close: move |_| detail.set(None),
                }
            }
        }
    }
}
