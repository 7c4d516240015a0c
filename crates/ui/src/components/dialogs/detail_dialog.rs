//! Read-only detail dialog
//!
//! Backs the "Ver" row action: a plain label/value listing of one record,
//! assembled by the page from its typed row.

use dioxus::prelude::*;

/// Properties for DetailDialog component
#[derive(Props, Clone, PartialEq)]
pub struct DetailDialogProps {
    /// Dialog title (e.g. "Detalle del cliente")
    pub title: String,

    /// Label/value pairs, in display order
    pub fields: Vec<(String, String)>,

    /// Close handler
    #[props(default)]
    pub on_close: EventHandler<()>,
}

/// Read-only record detail view
#[component]
pub fn DetailDialog(props: DetailDialogProps) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-black/60",
            onclick: move |_| props.on_close.call(()),

            div {
                class: "w-full max-w-md rounded-xl bg-slate-800 border border-slate-700 p-6 shadow-2xl",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "text-base font-semibold text-slate-100 mb-4", "{props.title}" }

                dl {
                    class: "space-y-3",

                    for (label, value) in &props.fields {
                        div {
                            class: "flex justify-between gap-4 text-sm",
                            dt { class: "text-slate-400 shrink-0", "{label}" }
                            dd { class: "text-slate-200 text-right break-all", "{value}" }
                        }
                    }
                }

                div {
                    class: "mt-6 flex justify-end",

                    button {
                        class: "px-3 py-1.5 text-sm rounded-lg bg-slate-700 hover:bg-slate-600 text-slate-200 transition-colors",
                        onclick: move |_| props.on_close.call(()),
                        "Cerrar"
                    }
                }
            }
        }
    }
}
