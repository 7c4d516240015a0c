//! # Data Table Component
//!
//! The shared table every entity page renders. Rows arrive as JSON values
//! so one component serves all entities; cell lookup is by column key.
//! Each row carries a primary action button (resolved from the session's
//! permission matrix by the page) plus a dropup menu for re-selecting
//! among the allowed actions.

use dioxus::prelude::*;
use serde_json::Value;

use tablero_core::RowAction;

// ============================================================================
// Column
// ============================================================================

/// One column of the table
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Key looked up in each row's JSON object
    pub key: String,
    /// Header label
    pub label: String,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

// ============================================================================
// Data Table Component
// ============================================================================

/// Properties for DataTable component
#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    /// Column definitions, in display order
    pub columns: Vec<Column>,

    /// Rows of the visible page, as JSON objects
    pub rows: Vec<Value>,

    /// Whether a fetch is in flight
    #[props(default = false)]
    pub loading: bool,

    /// Primary action resolved from the permission matrix
    #[props(default)]
    pub default_action: RowAction,

    /// Actions offered by the per-row dropup menu
    #[props(default)]
    pub menu_actions: Vec<RowAction>,

    /// Fired with the chosen action and the row's index in `rows`
    #[props(default)]
    pub on_action: EventHandler<(RowAction, usize)>,
}

/// Paginated entity table with permission-gated row actions
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    // Index of the row whose dropup menu is open
    let mut open_menu = use_signal(|| None::<usize>);

    let show_actions = props.default_action != RowAction::None || !props.menu_actions.is_empty();

    if props.rows.is_empty() && !props.loading {
        return rsx! { NotFoundView {} };
    }

    rsx! {
        div {
            class: "overflow-x-auto rounded-lg border border-slate-700",

            table {
                class: "w-full text-sm text-left",

                thead {
                    class: "bg-slate-800 text-slate-400 uppercase text-xs",
                    tr {
                        for column in &props.columns {
                            th { class: "px-4 py-3 font-medium", "{column.label}" }
                        }
                        if show_actions {
                            th { class: "px-4 py-3 font-medium text-right", "Acciones" }
                        }
                    }
                }

                tbody {
                    for (index, row) in props.rows.iter().enumerate() {
                        tr {
                            key: "{row_key(row, index)}",
                            class: "border-t border-slate-700 hover:bg-slate-800/50 transition-colors",

                            for column in &props.columns {
                                td { class: "px-4 py-3 text-slate-200", "{cell_text(row, &column.key)}" }
                            }

                            if show_actions {
                                td {
                                    class: "px-4 py-3 text-right",

                                    div {
                                        class: "relative inline-flex items-center gap-1",

                                        if props.default_action != RowAction::None {
                                            button {
                                                class: "px-2.5 py-1 text-xs rounded bg-indigo-600 hover:bg-indigo-500 text-white transition-colors",
                                                onclick: move |_| {
                                                    open_menu.set(None);
                                                    props.on_action.call((props.default_action, index));
                                                },
                                                "{props.default_action.label()}"
                                            }
                                        }

                                        if !props.menu_actions.is_empty() {
                                            button {
                                                class: "px-1.5 py-1 text-xs rounded bg-slate-700 hover:bg-slate-600 text-slate-300 transition-colors",
                                                onclick: move |_| {
                                                    let current = *open_menu.read();
                                                    open_menu.set(if current == Some(index) { None } else { Some(index) });
                                                },
                                                "▴"
                                            }

                                            // Dropup menu, anchored above the toggle
                                            if *open_menu.read() == Some(index) {
                                                div {
                                                    class: "absolute right-0 bottom-full mb-1 z-20 min-w-32 rounded-lg bg-slate-800 border border-slate-600 shadow-xl py-1",

                                                    for action in props.menu_actions.clone() {
                                                        button {
                                                            class: "w-full text-left px-3 py-1.5 text-xs text-slate-200 hover:bg-slate-700 transition-colors",
                                                            onclick: move |_| {
                                                                open_menu.set(None);
                                                                props.on_action.call((action, index));
                                                            },
                                                            "{action.label()}"
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
                }
            }
        }
    }
}

// ============================================================================
// Not Found View
// ============================================================================

/// Shown when a page resolves with zero rows or the request failed
///
/// The two cases are indistinguishable on purpose, so the message hedges
/// rather than blaming the data or the network.
#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-16 text-center rounded-lg border border-dashed border-slate-700",

            span { class: "text-4xl mb-3", "🔍" }
            p { class: "text-slate-300 font-medium", "No se encontraron resultados" }
            p {
                class: "text-slate-500 text-sm mt-1 max-w-md",
                "Puede que no existan registros que coincidan o que el servidor no esté disponible en este momento."
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Stable-ish row key: the record id when present, the index otherwise
fn row_key(row: &Value, index: usize) -> String {
    row.get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| index.to_string())
}

/// Render one cell as text
fn cell_text(row: &Value, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "Sí".to_string(),
        Some(Value::Bool(false)) => "No".to_string(),
        Some(Value::Null) | None => "—".to_string(),
        Some(other) => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_text_renders_scalars() {
        let row = json!({
            "nombre": "Ana",
            "porcentaje": 21.0,
            "activo": true,
            "email": null,
        });
        assert_eq!(cell_text(&row, "nombre"), "Ana");
        assert_eq!(cell_text(&row, "porcentaje"), "21.0");
        assert_eq!(cell_text(&row, "activo"), "Sí");
        assert_eq!(cell_text(&row, "email"), "—");
        assert_eq!(cell_text(&row, "missing"), "—");
    }

    #[test]
    fn test_row_key_prefers_the_id() {
        let row = json!({"id": "3f6c"});
        assert_eq!(row_key(&row, 4), "3f6c");
        assert_eq!(row_key(&json!({}), 4), "4");
    }
}
