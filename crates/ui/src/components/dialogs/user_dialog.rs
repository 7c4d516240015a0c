//! # User Dialog Component
//!
//! Dialog for creating and editing dashboard user accounts.
//!
//! ## Features
//!
//! - Create accounts with login name, email, role and password
//! - Edit existing accounts (no password change here)
//! - Debounced server-side check of the login name's availability;
//!   names fire from the first typed character
//!

use dioxus::prelude::*;
use tablero_api::ApiClient;
use tablero_model::{CreateUser, UpdateUser, User};
use tablero_query::{NAME_MIN_LEN, UniqueRule};

use crate::components::inputs::{TextInput, Toggle};
use crate::hooks::{UniqueProbe, use_unique_check};
use crate::state::TOASTS;

// ============================================================================
// Types
// ============================================================================

/// Mode for the user dialog
#[derive(Debug, Clone, PartialEq)]
pub enum UserDialogMode {
    Create,
    Edit(User),
}

/// Form state for user editing
#[derive(Debug, Clone)]
struct UserFormState {
    nombre_usuario: String,
    email: String,
    rol: String,
    clave: String,
    activo: bool,
}

impl Default for UserFormState {
    fn default() -> Self {
        Self {
            nombre_usuario: String::new(),
            email: String::new(),
            rol: String::new(),
            clave: String::new(),
            activo: true,
        }
    }
}

impl UserFormState {
    fn from_user(user: &User) -> Self {
        Self {
            nombre_usuario: user.nombre_usuario.clone(),
            email: user.email.clone(),
            rol: user.rol.clone(),
            clave: String::new(),
            activo: user.activo,
        }
    }

    /// Validate the form and return errors if any
    fn validate(&self, is_edit: bool) -> Vec<String> {
        let mut errors = Vec::new();

        if self.nombre_usuario.trim().is_empty() {
            errors.push("El nombre de usuario es obligatorio".to_string());
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            errors.push("El email no es válido".to_string());
        }
        if self.rol.trim().is_empty() {
            errors.push("El rol es obligatorio".to_string());
        }
        if !is_edit && self.clave.len() < 8 {
            errors.push("La contraseña debe tener al menos 8 caracteres".to_string());
        }

        errors
    }
}

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct UserDialogProps {
    /// Dialog mode (create or edit)
    pub mode: UserDialogMode,

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

/// User account creation and editing dialog
#[component]
pub fn UserDialog(props: UserDialogProps) -> Element {
    let initial_state = match &props.mode {
        UserDialogMode::Create => UserFormState::default(),
        UserDialogMode::Edit(user) => UserFormState::from_user(user),
    };
    let unique_rule = match &props.mode {
        UserDialogMode::Create => UniqueRule::for_new(NAME_MIN_LEN),
        UserDialogMode::Edit(user) => {
            UniqueRule::for_edit(NAME_MIN_LEN, user.nombre_usuario.clone())
        }
    };

    let mut form = use_signal(|| initial_state);
    let mut errors = use_signal(Vec::<String>::new);
    let mut saving = use_signal(|| false);
    let mut unique = use_unique_check(UniqueProbe::Username, unique_rule);

    let is_edit = matches!(props.mode, UserDialogMode::Edit(_));
    let title = if is_edit { "Editar usuario" } else { "Nuevo usuario" };

    let username_error = unique
        .is_taken()
        .then(|| "Este nombre de usuario ya está registrado".to_string());
    let username_suffix = unique.is_checking().then(|| "⏳".to_string());

    let mode = props.mode.clone();
    let submit = move |_| {
        let validation = form.read().validate(is_edit);
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
                UserDialogMode::Create => {
                    let payload = CreateUser {
                        nombre_usuario: state.nombre_usuario.trim().to_string(),
                        email: state.email.trim().to_string(),
                        rol: state.rol.trim().to_string(),
                        clave: state.clave,
                    };
                    client.create_user(&payload).await.map(|_| ())
                }
                UserDialogMode::Edit(user) => {
                    let payload = UpdateUser {
                        nombre_usuario: Some(state.nombre_usuario.trim().to_string()),
                        email: Some(state.email.trim().to_string()),
                        rol: Some(state.rol.trim().to_string()),
                        activo: Some(state.activo),
                    };
                    client.update_user(user.id, &payload).await.map(|_| ())
                }
            };

            saving.set(false);
            props.on_completed.call(());

            match result {
                Ok(()) => {
                    TOASTS.write().success("Usuario guardado");
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
                class: "w-full max-w-md rounded-xl bg-slate-800 border border-slate-700 p-6 shadow-2xl",
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
                        value: form.read().nombre_usuario.clone(),
                        label: Some("Nombre de usuario".to_string()),
                        required: true,
                        error: username_error,
                        suffix: username_suffix,
                        on_change: move |v: String| {
                            form.write().nombre_usuario = v.clone();
                            unique.input_changed(v);
                        },
                    }

                    TextInput {
                        value: form.read().email.clone(),
                        label: Some("Email".to_string()),
                        input_type: "email".to_string(),
                        required: true,
                        on_change: move |v| form.write().email = v,
                    }

                    TextInput {
                        value: form.read().rol.clone(),
                        label: Some("Rol".to_string()),
                        placeholder: Some("Operador".to_string()),
                        required: true,
                        on_change: move |v| form.write().rol = v,
                    }

                    if !is_edit {
                        TextInput {
                            value: form.read().clave.clone(),
                            label: Some("Contraseña".to_string()),
                            input_type: "password".to_string(),
                            required: true,
                            help_text: Some("Mínimo 8 caracteres".to_string()),
                            on_change: move |v| form.write().clave = v,
                        }
                    }

                    if is_edit {
                        Toggle {
                            checked: form.read().activo,
                            label: Some("Activo".to_string()),
                            on_change: move |v| form.write().activo = v,
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
