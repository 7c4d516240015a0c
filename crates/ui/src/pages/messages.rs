//! Messages page
//!
//! The inbox. Its toolbar action is "Enviar" rather than "Agregar" and
//! subjects only offer fuzzy search; senders can also be matched exactly.

use dioxus::prelude::*;
use serde_json::{Value, json};

use tablero_api::ApiClient;
use tablero_core::{Action, EntityKind, RowAction, SearchField};
use tablero_model::{Message, MessageField};

use crate::components::{
    Column, ConfirmDeleteDialog, DataTable, DetailDialog, MessageDialog, Pagination,
    SearchDialog, SelectOption,
};
use crate::hooks::use_entity_query;
use crate::pages::Toolbar;
use crate::state::{SESSION, TOASTS};

/// Inbox list page
#[component]
pub fn MessagesPage() -> Element {
    let mut query = use_entity_query::<MessageField, Message>(EntityKind::Message);

    let mut search_open = use_signal(|| false);
    let mut compose_open = use_signal(|| false);
    let mut delete_target = use_signal(|| None::<Message>);
    let mut detail = use_signal(|| None::<Message>);
    let mut deleting = use_signal(|| false);

    let session = SESSION.read();
    let can_search = session.allows(Action::Ver, EntityKind::Message);
    let can_send = session.allows(Action::Crear, EntityKind::Message);
    let can_delete = session.allows(Action::Eliminar, EntityKind::Message);
    let default_action = session.default_action(EntityKind::Message);
    drop(session);

    let mut menu_actions = vec![RowAction::View];
    if can_delete {
        menu_actions.push(RowAction::Delete);
    }

    let rows = query.rows();
    let json_rows: Vec<Value> = rows
        .read()
        .iter()
        .map(|m| {
            json!({
                "id": m.id,
                "asunto": m.asunto,
                "remitente": m.remitente,
                "destinatario": m.destinatario,
                "leido": m.leido,
                "fecha": m.fecha.format("%d/%m/%Y %H:%M").to_string(),
            })
        })
        .collect();

    let columns = vec![
        Column::new("asunto", "Asunto"),
        Column::new("remitente", "Remitente"),
        Column::new("destinatario", "Destinatario"),
        Column::new("leido", "Leído"),
        Column::new("fecha", "Fecha"),
    ];

    let on_action = move |(action, index): (RowAction, usize)| {
        let Some(record) = rows.read().get(index).cloned() else {
            return;
        };
        match action {
            RowAction::Delete => delete_target.set(Some(record)),
            _ => detail.set(Some(record)),
        }
    };

    rsx! {
        div {
            class: "p-6",

            Toolbar {
                title: EntityKind::Message.title().to_string(),
                can_search,
                can_add: can_send,
                add_label: "Enviar".to_string(),
                searching: query.is_searching(),
                search_summary: query.search_summary(),
                on_search: move |_| {
                    query.with_store(|s| s.open_form());
                    search_open.set(true);
                },
                on_cancel_search: move |_| query.cancel_search(),
                on_add: move |_| compose_open.set(true),
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
                        .and_then(|f| MessageField::all().iter().position(|x| *x == f))
                        .map(|i| i.to_string())
                        .unwrap_or_default();
                    // Subjects have no exact endpoint; the toggle greys out
                    let exact_capable = temp.field.map(|f| f.exact_capable()).unwrap_or(true);
                    rsx! {
                        SearchDialog {
                            title: "Buscar mensajes".to_string(),
                            field_options: MessageField::all()
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
                                    .and_then(|i| MessageField::all().get(i).copied());
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

            if *compose_open.read() {
                MessageDialog {
                    on_completed: move |_| query.mutation_completed(),
                    on_close: move |_| compose_open.set(false),
                }
            }

            if let Some(target) = delete_target.read().clone() {
                ConfirmDeleteDialog {
                    title: "Eliminar mensaje".to_string(),
                    target_name: target.asunto.clone(),
                    deleting: *deleting.read(),
                    on_confirm: move |_| {
                        if *deleting.read() {
                            return;
                        }
                        deleting.set(true);
                        let id = target.id;
                        spawn(async move {
                            let result = ApiClient::new().delete_message(id).await;
                            deleting.set(false);
                            delete_target.set(None);
                            match result {
                                Ok(()) => TOASTS.write().success("Mensaje eliminado"),
                                Err(e) => TOASTS.write().error(e.user_message()),
                            };
                            query.mutation_completed();
                        });
                    },
                    on_cancel: move |_| delete_target.set(None),
                }
            }

            if let Some(record) = detail.read().clone() {
                DetailDialog {
                    title: record.asunto.clone(),
                    fields: vec![
                        ("Remitente".to_string(), record.remitente.clone()),
                        ("Destinatario".to_string(), record.destinatario.clone()),
                        ("Fecha".to_string(), record.fecha.format("%d/%m/%Y %H:%M").to_string()),
                        ("Contenido".to_string(), record.contenido.clone()),
                    ],
                    on_close: move |_| detail.set(None),
                }
            }
        }
    }
}
