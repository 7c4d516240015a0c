//! # Pagination Component
//!
//! Page selector rendered under every entity table. Works identically for
//! the unfiltered list and for search results; the page owns which view
//! is active and only hears the chosen page number.

use dioxus::prelude::*;

/// How many numbered buttons to show around the current page
const WINDOW: u32 = 2;

/// Properties for Pagination component
#[derive(Props, Clone, PartialEq)]
pub struct PaginationProps {
    /// Current page, 1-based
    pub page: u32,

    /// Total number of pages
    pub total_pages: u32,

    /// Fired with the chosen page
    #[props(default)]
    pub on_page_change: EventHandler<u32>,
}

/// Numbered page selector with first/prev/next/last controls
#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    if props.total_pages <= 1 {
        return rsx! {};
    }

    let page = props.page;
    let total = props.total_pages;
    let first = page.saturating_sub(WINDOW).max(1);
    let last = (page + WINDOW).min(total);

    rsx! {
        nav {
            class: "flex items-center justify-center gap-1 mt-4",

            PageButton {
                label: "«".to_string(),
                disabled: page == 1,
                on_click: move |_| props.on_page_change.call(1),
            }
            PageButton {
                label: "‹".to_string(),
                disabled: page == 1,
                on_click: move |_| props.on_page_change.call(page - 1),
            }

            for number in first..=last {
                PageButton {
                    label: number.to_string(),
                    active: number == page,
                    on_click: move |_| props.on_page_change.call(number),
                }
            }

            PageButton {
                label: "›".to_string(),
                disabled: page == total,
                on_click: move |_| props.on_page_change.call(page + 1),
            }
            PageButton {
                label: "»".to_string(),
                disabled: page == total,
                on_click: move |_| props.on_page_change.call(total),
            }

            span {
                class: "ml-3 text-xs text-slate-500",
                "Página {page} de {total}"
            }
        }
    }
}

/// Properties for a single pagination button
#[derive(Props, Clone, PartialEq)]
struct PageButtonProps {
    label: String,

    #[props(default = false)]
    active: bool,

    #[props(default = false)]
    disabled: bool,

    #[props(default)]
    on_click: EventHandler<()>,
}

#[component]
fn PageButton(props: PageButtonProps) -> Element {
    let class = if props.active {
        "px-2.5 py-1 text-xs rounded bg-indigo-600 text-white"
    } else if props.disabled {
        "px-2.5 py-1 text-xs rounded bg-slate-800 text-slate-600 cursor-not-allowed"
    } else {
        "px-2.5 py-1 text-xs rounded bg-slate-800 text-slate-300 hover:bg-slate-700 transition-colors"
    };

    rsx! {
        button {
            class: "{class}",
            disabled: props.disabled,
            onclick: move |_| props.on_click.call(()),
            "{props.label}"
        }
    }
}
