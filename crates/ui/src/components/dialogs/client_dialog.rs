//! # Client Dialog Component
//!
//! Dialog for creating and editing client records.

use dioxus::prelude::*;
use tablero_api::ApiClient;
use tablero_model::{Client, CreateClient, UpdateClient};

use crate::components::inputs::TextInput;
use crate::state::TOASTS;

// ============================================================================
// Types
// ============================================================================

/// Mode for the client dialog
#[derive(Debug, Clone, PartialEq)]
pub enum ClientDialogMode {
    Create,
    Edit(Client),
}

/// Form state for client editing
#[derive(Debug, Clone, Default)]
struct ClientFormState {
    nombre: String,
    apellido: String,
    documento: String,
    telefono: String,
    direccion: String,
    email: String,
}

impl ClientFormState {
    fn from_client(client: &Client) -> Self {
        Self {
            nombre: client.nombre.clone(),
            apellido: client.apellido.clone(),
            documento: client.documento.clone(),
            telefono: client.telefono.clone(),
            direccion: client.direccion.clone().unwrap_or_default(),
            email: client.email.clone().unwrap_or_default(),
        }
    }

    /// Validate the form and return errors if any
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.nombre.trim().is_empty() {
            errors.push("El nombre es obligatorio".to_string());
        }
        if self.apellido.trim().is_empty() {
            errors.push("El apellido es obligatorio".to_string());
        }
        if self.documento.trim().is_empty() {
            errors.push("El documento es obligatorio".to_string());
        }
        if self.telefono.trim().is_empty() {
            errors.push("El teléfono es obligatorio".to_string());
        }
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            errors.push("El email no es válido".to_string());
        }

        errors
    }

    fn optional(value: &str) -> Option<String> {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ClientDialogProps {
    /// Dialog mode (create or edit)
    pub mode: ClientDialogMode,

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

/// Client creation and editing dialog
#[component]
pub fn ClientDialog(props: ClientDialogProps) -> Element {
    let initial_state = match &props.mode {
        ClientDialogMode::Create => ClientFormState::default(),
        ClientDialogMode::Edit(client) => ClientFormState::from_client(client),
    };

    let mut form = use_signal(|| initial_state);
    let mut errors = use_signal(Vec::<String>::new);
    let mut saving = use_signal(|| false);

    let is_edit = matches!(props.mode, ClientDialogMode::Edit(_));
    let title = if is_edit { "Editar cliente" } else { "Nuevo cliente" };

    let mode = props.mode.clone();
    let submit = move |_| {
        let validation = form.read().validate();
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }

        errors.set(Vec::new());
        saving.set(true);

        let mode = mode.clone();
        let state = form.read().clone();
        spawn(async move {
            let client = ApiClient::new();
            let result = match mode {
                ClientDialogMode::Create => {
                    let payload = CreateClient {
                        nombre: state.nombre.trim().to_string(),
                        apellido: state.apellido.trim().to_string(),
                        documento: state.documento.trim().to_string(),
                        telefono: state.telefono.trim().to_string(),
                        direccion: ClientFormState::optional(&state.direccion),
                        email: ClientFormState::optional(&state.email),
                    };
                    client.create_client(&payload).await.map(|_| ())
                }
                ClientDialogMode::Edit(existing) => {
                    let payload = UpdateClient {
                        nombre: Some(state.nombre.trim().to_string()),
                        apellido: Some(state.apellido.trim().to_string()),
                        documento: Some(state.documento.trim().to_string()),
                        telefono: Some(state.telefono.trim().to_string()),
                        direccion: ClientFormState::optional(&state.direccion),
                        email: ClientFormState::optional(&state.email),
                    };
                    client.update_client(existing.id, &payload).await.map(|_| ())
                }
            };

            saving.set(false);
            props.on_completed.call(());

            match result {
                Ok(()) => {
                    TOASTS.write().success("Cliente guardado");
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
                    class: "grid grid-cols-2 gap-4",

                    TextInput {
                        value: form.read().nombre.clone(),
                        label: Some("Nombre".to_string()),
                        required: true,
                        on_change: move |v| form.write().nombre = v,
                    }

                    TextInput {
                        value: form.read().apellido.clone(),
                        label: Some("Apellido".to_string()),
                        required: true,
                        on_change: move |v| form.write().apellido = v,
                    }

                    TextInput {
                        value: form.read().documento.clone(),
                        label: Some("Documento".to_string()),
                        required: true,
                        on_change: move |v| form.write().documento = v,
                    }

                    TextInput {
                        value: form.read().telefono.clone(),
                        label: Some("Teléfono".to_string()),
                        required: true,
                        on_change: move |v| form.write().telefono = v,
                    }

                    TextInput {
                        value: form.read().direccion.clone(),
                        label: Some("Dirección".to_string()),
                        on_change: move |v| form.write().direccion = v,
                    }

                    TextInput {
                        value: form.read().email.clone(),
                        label: Some("Email".to_string()),
                        input_type: "email".to_string(),
                        on_change: move |v| form.write().email = v,
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
                        disabled: *saving.read(),
                        onclick: submit,
                        if *saving.read() { "Guardando..." } else { "Guardar" }
                    }
                }
            }
        }
    }
}
