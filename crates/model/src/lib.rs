//! # Tablero Model
//!
//! Domain models for the Tablero dashboard: the business entities rendered
//! in tables, the create/update payloads sent to the backend, and the
//! paginated page types every list endpoint answers with.
//!
//! Each searchable entity also defines its search-field enum here. The
//! `SearchField` implementation is that entity's endpoint decision table:
//! it maps `(field, precise)` to the query the backend expects.

pub mod audit;
pub mod client;
pub mod image;
pub mod message;
pub mod page;
pub mod role;
pub mod tax;
pub mod user;

// Re-export commonly used items at crate root
pub use audit::{AuditEntry, AuditField};
pub use client::{Client, ClientField, CreateClient, UpdateClient};
pub use image::{CreateImage, ImageField, ImageRecord, UpdateImage};
pub use message::{Message, MessageField, SendMessage};
pub use page::{PageOutcome, PageResult};
pub use role::{CreateRole, Role, RoleField, UpdateRole};
pub use tax::{CreateTax, Tax, TaxField, UpdateTax};
pub use user::{CreateUser, UpdateUser, User, UserField};
