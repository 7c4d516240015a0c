//! Delete confirmation dialog
//!
//! Shared by every entity page. The page owns the actual DELETE call;
//! this dialog only renders the warning and reports the user's choice.

use dioxus::prelude::*;

/// Properties for ConfirmDeleteDialog component
#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// Dialog title (e.g. "Eliminar cliente")
    pub title: String,

    /// Display name of the record about to be deleted
    pub target_name: String,

    /// Whether the DELETE request is in flight
    #[props(default = false)]
    pub deleting: bool,

    /// Confirm handler
    #[props(default)]
    pub on_confirm: EventHandler<()>,

    /// Cancel handler
    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

/// Confirmation dialog for destructive actions
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-black/60",
            onclick: move |_| {
                if !props.deleting {
                    props.on_cancel.call(());
                }
            },

            div {
                class: "w-full max-w-sm rounded-xl bg-slate-800 border border-slate-700 p-6 shadow-2xl",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "flex items-start gap-3",

                    span { class: "text-2xl", "⚠️" }

                    div {
                        h2 { class: "text-base font-semibold text-slate-100", "{props.title}" }
                        p {
                            class: "mt-2 text-sm text-slate-400",
                            "Se eliminará "
                            span { class: "text-slate-200 font-medium", "{props.target_name}" }
                            ". Esta acción no se puede deshacer."
                        }
                    }
                }

                div {
                    class: "mt-6 flex justify-end gap-2",

                    button {
                        class: "px-3 py-1.5 text-sm rounded-lg bg-slate-700 hover:bg-slate-600 text-slate-200 transition-colors",
                        disabled: props.deleting,
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancelar"
                    }

                    button {
                        class: "px-3 py-1.5 text-sm rounded-lg bg-rose-600 hover:bg-rose-500 text-white transition-colors disabled:opacity-50",
                        disabled: props.deleting,
                        onclick: move |_| props.on_confirm.call(()),
                        if props.deleting { "Eliminando..." } else { "Eliminar" }
                    }
                }
            }
        }
    }
}
