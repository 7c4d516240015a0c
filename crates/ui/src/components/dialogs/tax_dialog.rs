//! # Tax Dialog Component
//!
//! Dialog for creating and editing tax definitions.
//!
//! ## Features
//!
//! - Create taxes with code, name and percentage
//! - Edit existing taxes, including the active flag
//! - Debounced server-side check of the code's availability while typing;
//!   the record's own code never counts as a conflict when editing
//! - Validation with error messages
//!

use dioxus::prelude::*;
use tablero_api::ApiClient;
use tablero_model::{CreateTax, Tax, UpdateTax};
use tablero_query::{CODE_MIN_LEN, UniqueRule};

use crate::components::inputs::{NumberInput, TextInput, Toggle};
use crate::hooks::{UniqueProbe, use_unique_check};
use crate::state::TOASTS;

// ============================================================================
// Types
// ============================================================================

/// Mode for the tax dialog
#[derive(Debug, Clone, PartialEq)]
pub enum TaxDialogMode {
    /// Create a new tax
    Create,
    /// Edit an existing tax
    Edit(Tax),
}

/// Form state for tax editing
#[derive(Debug, Clone)]
struct TaxFormState {
    codigo: String,
    nombre: String,
    porcentaje: f64,
    activo: bool,
}

impl Default for TaxFormState {
    fn default() -> Self {
        Self {
            codigo: String::new(),
            nombre: String::new(),
            porcentaje: 0.0,
            activo: true,
        }
    }
}

impl TaxFormState {
    fn from_tax(tax: &Tax) -> Self {
        Self {
            codigo: tax.codigo.clone(),
            nombre: tax.nombre.clone(),
            porcentaje: tax.porcentaje,
            activo: tax.activo,
        }
    }

    /// Validate the form and return errors if any
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.codigo.trim().is_empty() {
            errors.push("El código es obligatorio".to_string());
        }
        if self.nombre.trim().is_empty() {
            errors.push("El nombre es obligatorio".to_string());
        }
        if !(0.0..=100.0).contains(&self.porcentaje) {
            errors.push("El porcentaje debe estar entre 0 y 100".to_string());
        }

        errors
    }
}

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct TaxDialogProps {
    /// Dialog mode (create or edit)
    pub mode: TaxDialogMode,

    /// Fired once the backend call resolved, success or failure alike;
    /// the page re-fetches its active view on this signal
    #[props(default)]
    pub on_completed: EventHandler<()>,

    /// Fired when the dialog should be dismissed
    #[props(default)]
    pub on_close: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Tax creation and editing dialog
#[component]
pub fn TaxDialog(props: TaxDialogProps) -> Element {
    let initial_state = match &props.mode {
        TaxDialogMode::Create => TaxFormState::default(),
        TaxDialogMode::Edit(tax) => TaxFormState::from_tax(tax),
    };
    let unique_rule = match &props.mode {
        TaxDialogMode::Create => UniqueRule::for_new(CODE_MIN_LEN),
        TaxDialogMode::Edit(tax) => UniqueRule::for_edit(CODE_MIN_LEN, tax.codigo.clone()),
    };

    let mut form = use_signal(|| initial_state);
    let mut errors = use_signal(Vec::<String>::new);
    let mut saving = use_signal(|| false);
    let mut unique = use_unique_check(UniqueProbe::TaxCode, unique_rule);

    let is_edit = matches!(props.mode, TaxDialogMode::Edit(_));
    let title = if is_edit { "Editar impuesto" } else { "Nuevo impuesto" };

    let code_error = unique
        .is_taken()
        .then(|| "Este código ya está registrado".to_string());
    let code_suffix = unique.is_checking().then(|| "⏳".to_string());

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
                TaxDialogMode::Create => {
                    let payload = CreateTax {
                        codigo: state.codigo.trim().to_string(),
                        nombre: state.nombre.trim().to_string(),
                        porcentaje: state.porcentaje,
                    };
                    client.create_tax(&payload).await.map(|_| ())
                }
                TaxDialogMode::Edit(tax) => {
                    let payload = UpdateTax {
                        codigo: Some(state.codigo.trim().to_string()),
                        nombre: Some(state.nombre.trim().to_string()),
                        porcentaje: Some(state.porcentaje),
                        activo: Some(state.activo),
                    };
                    client.update_tax(tax.id, &payload).await.map(|_| ())
                }
            };

            saving.set(false);
            props.on_completed.call(());

            match result {
                Ok(()) => {
                    TOASTS.write().success("Impuesto guardado");
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
                        value: form.read().codigo.clone(),
                        label: Some("Código".to_string()),
                        placeholder: Some("IVA21".to_string()),
                        required: true,
                        error: code_error,
                        suffix: code_suffix,
                        on_change: move |v: String| {
                            form.write().codigo = v.clone();
                            unique.input_changed(v);
                        },
                    }

                    TextInput {
                        value: form.read().nombre.clone(),
                        label: Some("Nombre".to_string()),
                        placeholder: Some("IVA general".to_string()),
                        required: true,
                        on_change: move |v| form.write().nombre = v,
                    }

                    NumberInput {
                        value: form.read().porcentaje,
                        label: Some("Porcentaje".to_string()),
                        min: Some(0.0),
                        max: Some(100.0),
                        on_change: move |v| form.write().porcentaje = v,
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
