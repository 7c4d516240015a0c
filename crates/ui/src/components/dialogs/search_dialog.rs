//! Search dialog
//!
//! The two-mode search form shared by every entity page. The page owns
//! the search store: this dialog edits the *temp* state through its
//! handlers and only a confirmed submit touches the committed search.
//! Closing the dialog without submitting therefore changes nothing.

use dioxus::prelude::*;

use crate::components::inputs::{Select, SelectOption, TextInput, Toggle};

/// Properties for SearchDialog component
#[derive(Props, Clone, PartialEq)]
pub struct SearchDialogProps {
    /// Dialog title (e.g. "Buscar clientes")
    pub title: String,

    /// Selectable fields; values are indices into the entity's field list
    pub field_options: Vec<SelectOption>,

    /// Currently selected field index, or empty when none
    pub selected_field: String,

    /// Search value being typed
    pub value: String,

    /// Whether exact matching is requested
    pub precise: bool,

    /// Whether the selected field offers an exact endpoint at all
    #[props(default = true)]
    pub exact_capable: bool,

    /// Field selection handler
    #[props(default)]
    pub on_field_change: EventHandler<String>,

    /// Value edit handler
    #[props(default)]
    pub on_value_change: EventHandler<String>,

    /// Exact toggle handler
    #[props(default)]
    pub on_precise_change: EventHandler<bool>,

    /// Submit handler; only fired with a filled-in form
    #[props(default)]
    pub on_submit: EventHandler<()>,

    /// Close-without-submitting handler
    #[props(default)]
    pub on_close: EventHandler<()>,
}

/// Two-mode (exact/fuzzy) search form
#[component]
pub fn SearchDialog(props: SearchDialogProps) -> Element {
    let filled = !props.selected_field.is_empty() && !props.value.trim().is_empty();

    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-black/60",
            onclick: move |_| props.on_close.call(()),

            div {
                class: "w-full max-w-md rounded-xl bg-slate-800 border border-slate-700 p-6 shadow-2xl",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "text-base font-semibold text-slate-100 mb-4", "{props.title}" }

                div {
                    class: "space-y-4",

                    Select {
                        value: props.selected_field.clone(),
                        options: props.field_options.clone(),
                        label: Some("Buscar por".to_string()),
                        placeholder: Some("Seleccione un campo".to_string()),
                        on_change: move |v| props.on_field_change.call(v),
                    }

                    TextInput {
                        value: props.value.clone(),
                        label: Some("Valor".to_string()),
                        placeholder: Some("Escriba el valor a buscar".to_string()),
                        on_change: move |v| props.on_value_change.call(v),
                        on_enter: move |_| {
                            if filled {
                                props.on_submit.call(());
                            }
                        },
                    }

                    Toggle {
                        checked: props.precise && props.exact_capable,
                        label: Some("Búsqueda exacta".to_string()),
                        help_text: if props.exact_capable {
                            Some("Coincidencia exacta en lugar de parcial".to_string())
                        } else {
                            Some("Este campo solo admite búsqueda parcial".to_string())
                        },
                        disabled: !props.exact_capable,
                        on_change: move |v| props.on_precise_change.call(v),
                    }
                }

                div {
                    class: "mt-6 flex justify-end gap-2",

                    button {
                        class: "px-3 py-1.5 text-sm rounded-lg bg-slate-700 hover:bg-slate-600 text-slate-200 transition-colors",
                        onclick: move |_| props.on_close.call(()),
                        "Cerrar"
                    }

                    button {
                        class: "px-3 py-1.5 text-sm rounded-lg bg-indigo-600 hover:bg-indigo-500 text-white transition-colors disabled:opacity-50",
                        disabled: !filled,
                        onclick: move |_| props.on_submit.call(()),
                        "Buscar"
                    }
                }
            }
        }
    }
}
