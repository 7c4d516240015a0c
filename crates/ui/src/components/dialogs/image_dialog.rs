//! # Image Dialog Component
//!
//! Dialog for registering and editing image records. The URL is fixed
//! once registered; only name and description can change afterwards.

use dioxus::prelude::*;
use tablero_api::ApiClient;
use tablero_model::{CreateImage, ImageRecord, UpdateImage};

use crate::components::inputs::{TextArea, TextInput};
use crate::state::TOASTS;

// ============================================================================
// Types
// ============================================================================

/// Mode for the image dialog
#[derive(Debug, Clone, PartialEq)]
pub enum ImageDialogMode {
    Create,
    Edit(ImageRecord),
}

/// Form state for image editing
#[derive(Debug, Clone, Default)]
struct ImageFormState {
    nombre: String,
    url: String,
    descripcion: String,
}

impl ImageFormState {
    fn from_image(image: &ImageRecord) -> Self {
        Self {
            nombre: image.nombre.clone(),
            url: image.url.clone(),
            descripcion: image.descripcion.clone().unwrap_or_default(),
        }
    }

    /// Validate the form and return errors if any
    fn validate(&self, is_edit: bool) -> Vec<String> {
        let mut errors = Vec::new();

        if self.nombre.trim().is_empty() {
            errors.push("El nombre es obligatorio".to_string());
        }
        if !is_edit {
            let url = self.url.trim();
            if url.is_empty() {
                errors.push("La URL es obligatoria".to_string());
            } else if !url.starts_with("http://") && !url.starts_with("https://") {
                errors.push("La URL debe comenzar con http:// o https://".to_string());
            }
        }

        errors
    }
}

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ImageDialogProps {
    /// Dialog mode (create or edit)
    pub mode: ImageDialogMode,

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

/// Image registration and editing dialog
#[component]
pub fn ImageDialog(props: ImageDialogProps) -> Element {
    let initial_state = match &props.mode {
        ImageDialogMode::Create => ImageFormState::default(),
        ImageDialogMode::Edit(image) => ImageFormState::from_image(image),
    };

    let mut form = use_signal(|| initial_state);
    let mut errors = use_signal(Vec::<String>::new);
    let mut saving = use_signal(|| false);

    let is_edit = matches!(props.mode, ImageDialogMode::Edit(_));
    let title = if is_edit { "Editar imagen" } else { "Nueva imagen" };

    let mode = props.mode.clone();
    let submit = move |_| {
        let validation = form.read().validate(is_edit);
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
            let descripcion = {
                let trimmed = state.descripcion.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            };
            let result = match mode {
                ImageDialogMode::Create => {
                    let payload = CreateImage {
                        nombre: state.nombre.trim().to_string(),
                        url: state.url.trim().to_string(),
                        descripcion,
                    };
                    client.create_image(&payload).await.map(|_| ())
                }
                ImageDialogMode::Edit(image) => {
                    let payload = UpdateImage {
                        nombre: Some(state.nombre.trim().to_string()),
                        descripcion,
                    };
                    client.update_image(image.id, &payload).await.map(|_| ())
                }
            };

            saving.set(false);
            props.on_completed.call(());

            match result {
                Ok(()) => {
                    TOASTS.write().success("Imagen guardada");
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
                        value: form.read().nombre.clone(),
                        label: Some("Nombre".to_string()),
                        required: true,
                        on_change: move |v| form.write().nombre = v,
                    }

                    TextInput {
                        value: form.read().url.clone(),
                        label: Some("URL".to_string()),
                        placeholder: Some("https://...".to_string()),
                        required: !is_edit,
                        readonly: is_edit,
                        help_text: is_edit.then(|| "La URL no puede modificarse".to_string()),
                        on_change: move |v| form.write().url = v,
                    }

                    TextArea {
                        value: form.read().descripcion.clone(),
                        label: Some("Descripción".to_string()),
                        rows: 3,
                        on_change: move |v| form.write().descripcion = v,
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
