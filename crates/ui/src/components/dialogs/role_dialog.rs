//! # Role Dialog Component
//!
//! Dialog for creating and editing roles.
//!
//! ## Features
//!
//! - Role name with debounced server-side availability check
//! - Permission matrix editor: one row per entity, one cell per action
//! - System roles open read-only
//!

use std::collections::HashSet;

use dioxus::prelude::*;
use tablero_api::ApiClient;
use tablero_core::{Action, EntityKind, PermissionSnapshot};
use tablero_model::{CreateRole, Role, UpdateRole};
use tablero_query::{NAME_MIN_LEN, UniqueRule};

use crate::components::inputs::{TextArea, TextInput};
use crate::hooks::{UniqueProbe, use_unique_check};
use crate::state::TOASTS;

/// Actions editable in the matrix, in column order
const MATRIX_ACTIONS: [Action; 4] = [Action::Ver, Action::Crear, Action::Editar, Action::Eliminar];

// ============================================================================
// Types
// ============================================================================

/// Mode for the role dialog
#[derive(Debug, Clone, PartialEq)]
pub enum RoleDialogMode {
    Create,
    Edit(Role),
}

/// Form state for role editing
///
/// Grants live in a flat set while the form is open; the snapshot is
/// rebuilt from it at submit time.
#[derive(Debug, Clone, Default)]
struct RoleFormState {
    nombre: String,
    descripcion: String,
    grants: HashSet<(Action, EntityKind)>,
}

impl RoleFormState {
    fn from_role(role: &Role) -> Self {
        let mut grants = HashSet::new();
        for action in MATRIX_ACTIONS {
            for entity in EntityKind::ALL {
                if role.permisos.allows(action, entity) {
                    grants.insert((action, entity));
                }
            }
        }
        Self {
            nombre: role.nombre.clone(),
            descripcion: role.descripcion.clone().unwrap_or_default(),
            grants,
        }
    }

    /// Validate the form and return errors if any
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.nombre.trim().is_empty() {
            errors.push("El nombre es obligatorio".to_string());
        }
        errors
    }

    /// Rebuild the permission snapshot from the flat grant set
    fn snapshot(&self) -> PermissionSnapshot {
        self.grants
            .iter()
            .fold(PermissionSnapshot::new(), |snapshot, (action, entity)| {
                snapshot.grant(*action, *entity)
            })
    }
}

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct RoleDialogProps {
    /// Dialog mode (create or edit)
    pub mode: RoleDialogMode,

    /// Fired once the backend call resolved, success or failure alike
    #[props(default)]
    pub on_completed: EventHandler<()>,

    /// Fired when the dialog should be dismissed
    #[props(default)]
    pub on_close: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Role creation and editing dialog with permission matrix
#[component]
pub fn RoleDialog(props: RoleDialogProps) -> Element {
    let initial_state = match &props.mode {
        RoleDialogMode::Create => RoleFormState::default(),
        RoleDialogMode::Edit(role) => RoleFormState::from_role(role),
    };
    let unique_rule = match &props.mode {
        RoleDialogMode::Create => UniqueRule::for_new(NAME_MIN_LEN),
        RoleDialogMode::Edit(role) => UniqueRule::for_edit(NAME_MIN_LEN, role.nombre.clone()),
    };

    let mut form = use_signal(|| initial_state);
    let mut errors = use_signal(Vec::<String>::new);
    let mut saving = use_signal(|| false);
    let mut unique = use_unique_check(UniqueProbe::RoleName, unique_rule);

    let is_edit = matches!(props.mode, RoleDialogMode::Edit(_));
    let read_only = matches!(&props.mode, RoleDialogMode::Edit(role) if role.es_sistema);
    let title = if read_only {
        "Rol del sistema"
    } else if is_edit {
        "Editar rol"
    } else {
        "Nuevo rol"
    };

    let name_error = unique
        .is_taken()
        .then(|| "Este nombre ya está registrado".to_string());
    let name_suffix = unique.is_checking().then(|| "⏳".to_string());

    let mode = props.mode.clone();
    let submit = move |_| {
        let validation = form.read().validate();
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }
        if !unique.clear_to_submit() {
            return;
        }

        errors.set(Vec::new());
        saving.set(true);

        let mode = mode.clone();
        let state = form.read().clone();
        spawn(async move {
            let client = ApiClient::new();
            let result = match mode {
                RoleDialogMode::Create => {
                    let payload = CreateRole {
                        nombre: state.nombre.trim().to_string(),
                        descripcion: {
                            let trimmed = state.descripcion.trim();
                            (!trimmed.is_empty()).then(|| trimmed.to_string())
                        },
                        permisos: state.snapshot(),
                    };
                    client.create_role(&payload).await.map(|_| ())
                }
                RoleDialogMode::Edit(role) => {
                    let payload = UpdateRole {
                        nombre: Some(state.nombre.trim().to_string()),
                        descripcion: {
                            let trimmed = state.descripcion.trim();
                            (!trimmed.is_empty()).then(|| trimmed.to_string())
                        },
                        permisos: Some(state.snapshot()),
                    };
                    client.update_role(role.id, &payload).await.map(|_| ())
                }
            };

            saving.set(false);
            props.on_completed.call(());

            match result {
                Ok(()) => {
                    TOASTS.write().success("Rol guardado");
                    props.on_close.call(());
                }
                Err(e) => {
                    TOASTS.write().error(e.user_message());
                }
            }
        });
    };

    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-black/60",
            onclick: move |_| props.on_close.call(()),

            div {
                class: "w-full max-w-lg rounded-xl bg-slate-800 border border-slate-700 p-6 shadow-2xl",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "text-base font-semibold text-slate-100 mb-4", "{title}" }

                if !errors.read().is_empty() {
                    div {
                        class: "mb-4 rounded-lg bg-rose-500/10 border border-rose-500/40 px-3 py-2",
                        for error in errors.read().iter() {
                            p { class: "text-xs text-rose-400", "{error}" }
                        }
                    }
                }

                div {
                    class: "space-y-4",

                    TextInput {
                        value: form.read().nombre.clone(),
                        label: Some("Nombre".to_string()),
                        required: true,
                        readonly: read_only,
                        error: name_error,
                        suffix: name_suffix,
                        on_change: move |v: String| {
                            form.write().nombre = v.clone();
                            unique.input_changed(v);
                        },
                    }

                    TextArea {
                        value: form.read().descripcion.clone(),
                        label: Some("Descripción".to_string()),
                        rows: 2,
                        disabled: read_only,
                        on_change: move |v| form.write().descripcion = v,
                    }

                    // Permission matrix
                    div {
                        label {
                            class: "block text-sm font-medium text-slate-300 mb-1.5",
                            "Permisos"
                        }

                        div {
                            class: "rounded-lg border border-slate-700 overflow-hidden",

                            table {
                                class: "w-full text-xs",

                                thead {
                                    class: "bg-slate-900/60 text-slate-400",
                                    tr {
                                        th { class: "px-3 py-2 text-left font-medium", "Entidad" }
                                        for action in MATRIX_ACTIONS {
                                            th { class: "px-2 py-2 font-medium capitalize", "{action.key()}" }
                                        }
                                    }
                                }

                                tbody {
                                    for entity in EntityKind::ALL {
                                        tr {
                                            class: "border-t border-slate-700",
                                            td { class: "px-3 py-1.5 text-slate-300", "{entity.title()}" }

                                            for action in MATRIX_ACTIONS {
                                                td {
                                                    class: "px-2 py-1.5 text-center",
                                                    button {
                                                        r#type: "button",
                                                        class: if form.read().grants.contains(&(action, entity)) {
                                                            "w-5 h-5 rounded bg-indigo-600 text-white text-[10px]"
                                                        } else {
                                                            "w-5 h-5 rounded bg-slate-700 text-slate-500 text-[10px]"
                                                        },
                                                        disabled: read_only,
                                                        onclick: move |_| {
                                                            let mut state = form.write();
                                                            if !state.grants.remove(&(action, entity)) {
                                                                state.grants.insert((action, entity));
                                                            }
                                                        },
                                                        if form.read().grants.contains(&(action, entity)) { "✓" } else { "" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "mt-6 flex justify-end gap-2",

                    button {
                        class: "px-3 py-1.5 text-sm rounded-lg bg-slate-700 hover:bg-slate-600 text-slate-200 transition-colors",
                        disabled: *saving.read(),
                        onclick: move |_| props.on_close.call(()),
                        "Cancelar"
                    }

                    if !read_only {
                        button {
                            class: "px-3 py-1.5 text-sm rounded-lg bg-indigo-600 hover:bg-indigo-500 text-white transition-colors disabled:opacity-50",
                            disabled: *saving.read() || !unique.clear_to_submit(),
                            onclick: submit,
                            if *saving.read() { "Guardando..." } else { "Guardar" }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_rebuild_round_trips() {
        let mut state = RoleFormState::default();
        state.grants.insert((Action::Ver, EntityKind::Client));
        state.grants.insert((Action::Eliminar, EntityKind::Tax));

        let snapshot = state.snapshot();
        assert!(snapshot.allows(Action::Ver, EntityKind::Client));
        assert!(snapshot.allows(Action::Eliminar, EntityKind::Tax));
        assert!(!snapshot.allows(Action::Ver, EntityKind::Tax));
    }
}
