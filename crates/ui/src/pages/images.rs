//! Images page

use dioxus::prelude::*;
use serde_json::{Value, json};

use tablero_api::ApiClient;
use tablero_core::{Action, EntityKind, RowAction, SearchField};
use tablero_model::{ImageField, ImageRecord};

use crate::components::{
    Column, ConfirmDeleteDialog, DataTable, DetailDialog, ImageDialog, ImageDialogMode,
    Pagination, SearchDialog, SelectOption,
};
use crate::hooks::use_entity_query;
use crate::pages::Toolbar;
use crate::state::{SESSION, TOASTS};

/// Images list page
#[component]
pub fn ImagesPage() -> Element {
    let mut query = use_entity_query::<ImageField, ImageRecord>(EntityKind::Image);

    let mut search_open = use_signal(|| false);
    let mut dialog = use_signal(|| None::<ImageDialogMode>);
    let mut delete_target = use_signal(|| None::<ImageRecord>);
    let mut detail = use_signal(|| None::<ImageRecord>);
    let mut deleting = use_signal(|| false);

    let session = SESSION.read();
    let can_search = session.allows(Action::Ver, EntityKind::Image);
    let can_create = session.allows(Action::Crear, EntityKind::Image);
    let can_edit = session.allows(Action::Editar, EntityKind::Image);
    let can_delete = session.allows(Action::Eliminar, EntityKind::Image);
    let default_action = session.default_action(EntityKind::Image);
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
        .map(|i| {
            json!({
                "id": i.id,
                "nombre": i.nombre,
                "url": i.url,
                "descripcion": i.descripcion,
                "fecha_subida": i.fecha_subida.format("%d/%m/%Y").to_string(),
            })
        })
        .collect();

    let columns = vec![
        Column::new("nombre", "Nombre"),
        Column::new("url", "URL"),
        Column::new("descripcion", "Descripción"),
        Column::new("fecha_subida", "Subida"),
    ];

    let on_action = move |(action, index): (RowAction, usize)| {
        let Some(record) = rows.read().get(index).cloned() else {
            return;
        };
        match action {
            RowAction::Edit => dialog.set(Some(ImageDialogMode::Edit(record))),
            RowAction::Delete => delete_target.set(Some(record)),
            _ => detail.set(Some(record)),
        }
    };

    rsx! {
        div {
            class: "p-6",

            Toolbar {
                title: EntityKind::Image.title().to_string(),
                can_search,
                can_add: can_create,
                searching: query.is_searching(),
                search_summary: query.search_summary(),
                on_search: move |_| {
                    query.with_store(|s| s.open_form());
                    search_open.set(true);
                },
                on_cancel_search: move |_| query.cancel_search(),
                on_add: move |_| dialog.set(Some(ImageDialogMode::Create)),
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
                        .and_then(|f| ImageField::all().iter().position(|x| *x == f))
                        .map(|i| i.to_string())
                        .unwrap_or_default();
                    rsx! {
                        SearchDialog {
                            title: "Buscar imágenes".to_string(),
                            field_options: ImageField::all()
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
                                    .and_then(|i| ImageField::all().get(i).copied());
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
                ImageDialog {
                    mode,
                    on_completed: move |_| query.mutation_completed(),
                    on_close: move |_| dialog.set(None),
                }
            }

            if let Some(target) = delete_target.read().clone() {
                ConfirmDeleteDialog {
                    title: "Eliminar imagen".to_string(),
                    target_name: target.nombre.clone(),
                    deleting: *deleting.read(),
                    on_confirm: move |_| {
                        if *deleting.read() {
                            return;
                        }
                        deleting.set(true);
                        let id = target.id;
                        spawn(async move {
                            let result = ApiClient::new().delete_image(id).await;
                            deleting.set(false);
                            delete_target.set(None);
                            match result {
                                Ok(()) => TOASTS.write().success("Imagen eliminada"),
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
                    title: "Detalle de la imagen".to_string(),
                    fields: vec![
                        ("Nombre".to_string(), record.nombre.clone()),
                        ("URL".to_string(), record.url.clone()),
                        ("Descripción".to_string(), record.descripcion.clone().unwrap_or_else(|| "—".to_string())),
                        ("Subida".to_string(), record.fecha_subida.format("%d/%m/%Y %H:%M").to_string()),
                    ],
                    on_close: move |_| detail.set(None),
                }
            }
        }
    }
}
