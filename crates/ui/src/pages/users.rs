//! User accounts page

use dioxus::prelude::*;
use serde_json::{Value, json};

use tablero_api::ApiClient;
use tablero_core::{Action, EntityKind, RowAction, SearchField};
use tablero_model::{User, UserField};

use crate::components::{
    Column, ConfirmDeleteDialog, DataTable, DetailDialog, Pagination, SearchDialog, SelectOption,
    UserDialog, UserDialogMode,
};
use crate::hooks::use_entity_query;
use crate::pages::Toolbar;
use crate::state::{SESSION, TOASTS};

/// User accounts list page
#[component]
pub fn UsersPage() -> Element {
    let mut query = use_entity_query::<UserField, User>(EntityKind::User);

    let mut search_open = use_signal(|| false);
    let mut dialog = use_signal(|| None::<UserDialogMode>);
    let mut delete_target = use_signal(|| None::<User>);
    let mut detail = use_signal(|| None::<User>);
    let mut deleting = use_signal(|| false);

    let session = SESSION.read();
    let can_search = session.allows(Action::Ver, EntityKind::User);
    let can_create = session.allows(Action::Crear, EntityKind::User);
    let can_edit = session.allows(Action::Editar, EntityKind::User);
    let can_delete = session.allows(Action::Eliminar, EntityKind::User);
    let default_action = session.default_action(EntityKind::User);
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
        .map(|u| {
            json!({
                "id": u.id,
                "nombre_usuario": u.nombre_usuario,
                "email": u.email,
                "rol": u.rol,
                "activo": u.activo,
                "fecha_creacion": u.fecha_creacion.format("%d/%m/%Y").to_string(),
            })
        })
        .collect();

    let columns = vec![
        Column::new("nombre_usuario", "Usuario"),
        Column::new("email", "Email"),
        Column::new("rol", "Rol"),
        Column::new("activo", "Activo"),
        Column::new("fecha_creacion", "Creado"),
    ];

    let on_action = move |(action, index): (RowAction, usize)| {
        let Some(record) = rows.read().get(index).cloned() else {
            return;
        };
        match action {
            RowAction::Edit => dialog.set(Some(UserDialogMode::Edit(record))),
            RowAction::Delete => delete_target.set(Some(record)),
            _ => detail.set(Some(record)),
        }
    };

    rsx! {
        div {
            class: "p-6",

            Toolbar {
                title: EntityKind::User.title().to_string(),
                can_search,
                can_add: can_create,
                searching: query.is_searching(),
                search_summary: query.search_summary(),
                on_search: move |_| {
                    query.with_store(|s| s.open_form());
                    search_open.set(true);
                },
                on_cancel_search: move |_| query.cancel_search(),
                on_add: move |_| dialog.set(Some(UserDialogMode::Create)),
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
                        .and_then(|f| UserField::all().iter().position(|x| *x == f))
                        .map(|i| i.to_string())
                        .unwrap_or_default();
                    let exact_capable = temp.field.map(|f| f.exact_capable()).unwrap_or(true);
                    rsx! {
                        SearchDialog {
                            title: "Buscar usuarios".to_string(),
                            field_options: UserField::all()
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
                                    .and_then(|i| UserField::all().get(i).copied());
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
                UserDialog {
                    mode,
                    on_completed: move |_| query.mutation_completed(),
                    on_close: move |_| dialog.set(None),
                }
            }

            if let Some(target) = delete_target.read().clone() {
                ConfirmDeleteDialog {
                    title: "Eliminar usuario".to_string(),
                    target_name: target.nombre_usuario.clone(),
                    deleting: *deleting.read(),
                    on_confirm: move |_| {
                        if *deleting.read() {
                            return;
                        }
                        deleting.set(true);
                        let id = target.id;
                        spawn(async move {
                            let result = ApiClient::new().delete_user(id).await;
                            deleting.set(false);
                            delete_target.set(None);
                            match result {
                                Ok(()) => TOASTS.write().success("Usuario eliminado"),
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
                    title: "Detalle del usuario".to_string(),
                    fields: vec![
                        ("Usuario".to_string(), record.nombre_usuario.clone()),
                        ("Email".to_string(), record.email.clone()),
                        ("Rol".to_string(), record.rol.clone()),
                        ("Activo".to_string(), if record.activo { "Sí" } else { "No" }.to_string()),
                        ("Creado".to_string(), record.fecha_creacion.format("%d/%m/%Y %H:%M").to_string()),
                    ],
                    on_close: move |_| detail.set(None),
                }
            }
        }
    }
}
