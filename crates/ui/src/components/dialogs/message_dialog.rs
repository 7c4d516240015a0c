//! # Message Dialog Component
//!
//! Compose dialog behind the "Enviar" toolbar action of the inbox.
//! Messages cannot be edited after sending, so this dialog has no edit
//! mode.

use dioxus::prelude::*;
use tablero_api::ApiClient;
use tablero_model::SendMessage;

use crate::components::inputs::{TextArea, TextInput};
use crate::state::TOASTS;

// ============================================================================
// Types
// ============================================================================

/// Form state for message composition
#[derive(Debug, Clone, Default)]
struct MessageFormState {
    destinatario: String,
    asunto: String,
    contenido: String,
}

impl MessageFormState {
    /// Validate the form and return errors if any
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.destinatario.trim().is_empty() {
            errors.push("El destinatario es obligatorio".to_string());
        }
        if self.asunto.trim().is_empty() {
            errors.push("El asunto es obligatorio".to_string());
        }
        if self.contenido.trim().is_empty() {
            errors.push("El contenido es obligatorio".to_string());
        }

        errors
    }
}

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct MessageDialogProps {
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

/// Message compose dialog
#[component]
pub fn MessageDialog(props: MessageDialogProps) -> Element {
    let mut form = use_signal(MessageFormState::default);
    let mut errors = use_signal(Vec::<String>::new);
    let mut sending = use_signal(|| false);

    let submit = move |_| {
        let validation = form.read().validate();
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }

        errors.set(Vec::new());
        sending.set(true);

        let state = form.read().clone();
        spawn(async move {
            let payload = SendMessage {
                asunto: state.asunto.trim().to_string(),
                destinatario: state.destinatario.trim().to_string(),
                contenido: state.contenido.trim().to_string(),
            };
            let result = ApiClient::new().send_message(&payload).await;

            sending.set(false);
            props.on_completed.call(());

            match result {
                Ok(_) => {
                    TOASTS.write().success("Mensaje enviado");
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

                h2 { class: "text-base font-semibold text-slate-100 mb-4", "Nuevo mensaje" }

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
                        value: form.read().destinatario.clone(),
                        label: Some("Destinatario".to_string()),
                        required: true,
                        on_change: move |v| form.write().destinatario = v,
                    }

                    TextInput {
                        value: form.read().asunto.clone(),
                        label: Some("Asunto".to_string()),
                        required: true,
                        on_change: move |v| form.write().asunto = v,
                    }

                    TextArea {
                        value: form.read().contenido.clone(),
                        label: Some("Contenido".to_string()),
                        rows: 5,
                        required: true,
                        on_change: move |v| form.write().contenido = v,
                    }
                }

                div {
                    class: "mt-6 flex justify-end gap-2",

                    button {
                        class: "px-3 py-1.5 text-sm rounded-lg bg-slate-700 hover:bg-slate-600 text-slate-200 transition-colors",
                        disabled: *sending.read(),
                        onclick: move |_| props.on_close.call(()),
                        "Cancelar"
                    }

                    button {
                        class: "px-3 py-1.5 text-sm rounded-lg bg-indigo-600 hover:bg-indigo-500 text-white transition-colors disabled:opacity-50",
                        disabled: *sending.read(),
                        onclick: submit,
                        if *sending.read() { "Enviando..." } else { "Enviar" }
                    }
                }
            }
        }
    }
}
