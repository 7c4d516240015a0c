//! Tablero
//!
//! Administrative dashboard desktop client
//!
//! This is the main entry point for the Dioxus Desktop application.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use tablero_core::{Action, EntityKind, PermissionSnapshot};
use tablero_ui::SessionUser;

fn main() {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   📋 Tablero                                              ║");
    println!("║   Panel administrativo de escritorio                      ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    // The standalone shell has no login flow; hand the UI an operator
    // session directly. Hosts embedding the UI call install_session
    // after their own authentication instead.
    tablero_ui::launch_with_session(standalone_session());
}

/// Session used when the shell runs without an external session provider
fn standalone_session() -> SessionUser {
    let mut permisos = PermissionSnapshot::new();
    for entity in EntityKind::ALL {
        permisos = permisos.grant(Action::Ver, entity);
        if entity.mutable() {
            permisos = permisos
                .grant(Action::Crear, entity)
                .grant(Action::Editar, entity)
                .grant(Action::Eliminar, entity);
        }
    }

    SessionUser {
        nombre_usuario: "operador".to_string(),
        rol: "Operador".to_string(),
        es_admin: false,
        permisos,
    }
}
