//! Page Components for Tablero
//!
//! One page per entity, all built from the same pieces: a permission-gated
//! toolbar, the shared data table, pagination and the entity's dialogs.
//! Each page owns its query state through [`use_entity_query`]
//! (crate::hooks::use_entity_query); mounting a page starts with the
//! unfiltered list and unmounting drops the search with it.

use dioxus::prelude::*;

pub mod audit;
pub mod clients;
pub mod images;
pub mod messages;
pub mod roles;
pub mod taxes;
pub mod users;

// Re-export page components for convenience
pub use audit::AuditPage;
pub use clients::ClientsPage;
pub use images::ImagesPage;
pub use messages::MessagesPage;
pub use roles::RolesPage;
pub use taxes::TaxesPage;
pub use users::UsersPage;

// ============================================================================
// Shared Toolbar
// ============================================================================

/// Properties for the page toolbar
#[derive(Props, Clone, PartialEq)]
pub struct ToolbarProps {
    /// Page title
    pub title: String,

    /// Whether the search button is shown (read permission)
    #[props(default = true)]
    pub can_search: bool,

    /// Whether the add button is shown (create permission)
    #[props(default = false)]
    pub can_add: bool,

    /// Label of the add button ("Agregar", "Enviar")
    #[props(default = "Agregar".to_string())]
    pub add_label: String,

    /// Whether a search is active
    #[props(default = false)]
    pub searching: bool,

    /// Summary of the committed search, shown in the filter chip
    #[props(default)]
    pub search_summary: Option<String>,

    /// Open the search dialog
    #[props(default)]
    pub on_search: EventHandler<()>,

    /// Return to the unfiltered list
    #[props(default)]
    pub on_cancel_search: EventHandler<()>,

    /// Open the create dialog
    #[props(default)]
    pub on_add: EventHandler<()>,
}

/// Toolbar shared by every entity page
#[component]
pub fn Toolbar(props: ToolbarProps) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between mb-4",

            div {
                class: "flex items-center gap-3",

                h1 { class: "text-lg font-semibold text-slate-100", "{props.title}" }

                // Active-search chip
                if props.searching {
                    div {
                        class: "flex items-center gap-2 px-2.5 py-1 rounded-full bg-indigo-500/10 border border-indigo-500/40",

                        if let Some(summary) = &props.search_summary {
                            span { class: "text-xs text-indigo-300", "{summary}" }
                        }

                        button {
                            class: "text-xs text-indigo-300 hover:text-indigo-100 underline transition-colors",
                            onclick: move |_| props.on_cancel_search.call(()),
                            "cancelar búsqueda"
                        }
                    }
                }
            }

            div {
                class: "flex items-center gap-2",

                if props.can_search {
                    button {
                        class: "px-3 py-1.5 text-sm rounded-lg bg-slate-700 hover:bg-slate-600 text-slate-200 transition-colors",
                        onclick: move |_| props.on_search.call(()),
                        "🔍 Buscar"
                    }
                }

                if props.can_add {
                    button {
                        class: "px-3 py-1.5 text-sm rounded-lg bg-indigo-600 hover:bg-indigo-500 text-white transition-colors",
                        onclick: move |_| props.on_add.call(()),
                        "+ {props.add_label}"
                    }
                }
            }
        }
    }
}
