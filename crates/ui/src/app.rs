//! Main Application Component for Tablero
//!
//! This module contains the root Dioxus component that renders the entire
//! application: the entity sidebar, the header with the session user, the
//! active page and the toast viewport.

use dioxus::prelude::*;

use tablero_core::EntityKind;

use crate::pages::{
    AuditPage, ClientsPage, ImagesPage, MessagesPage, RolesPage, TaxesPage, UsersPage,
};
use crate::state::{ACTIVE_PAGE, SESSION, TOASTS, ToastKind};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Tablero UI initialized");
        if let Some(user) = crate::initial_session() {
            SESSION.write().install(user.clone());
        }
    });

    rsx! {
        div {
            class: "app-container h-screen w-screen flex flex-col bg-slate-900 text-slate-100 overflow-hidden",

            Header {}

            div {
                class: "flex flex-1 overflow-hidden",

                Sidebar {}
                MainContent {}
            }

            ToastViewport {}
        }
    }
}

// ============================================================================
// Header Component
// ============================================================================

/// Top bar with the app title and the session user
#[component]
fn Header() -> Element {
    let session = SESSION.read();
    let user_line = session
        .user()
        .map(|u| format!("{} · {}", u.nombre_usuario, u.rol));
    drop(session);

    rsx! {
        header {
            class: "h-12 bg-slate-800 border-b border-slate-700 flex items-center justify-between px-4 shrink-0",

            div {
                class: "flex items-center gap-2",
                span { class: "text-xl", "📋" }
                span { class: "font-semibold text-sm", "Tablero" }
            }

            if let Some(line) = user_line {
                span { class: "text-xs text-slate-400", "{line}" }
            } else {
                span { class: "text-xs text-slate-500", "Sin sesión" }
            }
        }
    }
}

// ============================================================================
// Sidebar Component
// ============================================================================

/// Entity navigation, one entry per entity in catalog order
#[component]
fn Sidebar() -> Element {
    let active = *ACTIVE_PAGE.read();

    rsx! {
        nav {
            class: "w-48 bg-slate-800/60 border-r border-slate-700 py-3 shrink-0 overflow-y-auto",

            for entity in EntityKind::ALL {
                button {
                    class: if entity == active {
                        "w-full flex items-center gap-2 px-4 py-2 text-sm bg-indigo-600/20 text-indigo-300 border-r-2 border-indigo-500"
                    } else {
                        "w-full flex items-center gap-2 px-4 py-2 text-sm text-slate-300 hover:bg-slate-700/50 transition-colors"
                    },
                    onclick: move |_| *ACTIVE_PAGE.write() = entity,

                    span { "{entity.icon()}" }
                    span { "{entity.title()}" }
                }
            }
        }
    }
}

// ============================================================================
// Main Content
// ============================================================================

/// The active entity page
///
/// Switching pages unmounts the previous one, dropping its query state;
/// coming back always starts from the unfiltered first page.
#[component]
fn MainContent() -> Element {
    let active = *ACTIVE_PAGE.read();

    rsx! {
        main {
            class: "flex-1 overflow-y-auto",

            match active {
                EntityKind::Client => rsx! { ClientsPage {} },
                EntityKind::User => rsx! { UsersPage {} },
                EntityKind::Role => rsx! { RolesPage {} },
                EntityKind::Tax => rsx! { TaxesPage {} },
                EntityKind::Image => rsx! { ImagesPage {} },
                EntityKind::Message => rsx! { MessagesPage {} },
                EntityKind::Audit => rsx! { AuditPage {} },
            }
        }
    }
}

// ============================================================================
// Toast Viewport
// ============================================================================

/// Fixed stack of toasts, bottom right; clicking a toast dismisses it
#[component]
fn ToastViewport() -> Element {
    let toasts = TOASTS.read().visible().to_vec();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 items-end",

            for toast in toasts {
                button {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Loading => "flex items-center gap-2 px-3 py-2 rounded-lg text-sm bg-slate-700 text-slate-200 shadow-lg",
                        ToastKind::Success => "flex items-center gap-2 px-3 py-2 rounded-lg text-sm bg-emerald-600 text-white shadow-lg",
                        ToastKind::Error => "flex items-center gap-2 px-3 py-2 rounded-lg text-sm bg-rose-600 text-white shadow-lg",
                    },
                    onclick: move |_| TOASTS.write().dismiss_id(toast.id),

                    span {
                        match toast.kind {
                            ToastKind::Loading => "⏳",
                            ToastKind::Success => "✓",
                            ToastKind::Error => "✕",
                        }
                    }
                    span { "{toast.message}" }
                }
            }
        }
    }
}
