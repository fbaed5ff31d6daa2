//! # Scarlet Shop
//!
//! A small shoe-shop web application: a public catalog, per-visitor cart
//! and favourites held in server-side session state, and an
//! unauthenticated admin form for adding and deleting catalog items.
//!
//! Built on [axum](https://crates.io/crates/axum) with
//! [Sea-ORM](https://crates.io/crates/sea-orm) persistence and
//! [`tower-sessions`](https://crates.io/crates/tower-sessions) for visitor
//! state, which this crate persists in the same database through its own
//! [`DbSessionStore`].
//!
//! ## Layout
//!
//! - [`entity`] — Sea-ORM entities: `item`, `size`, the `item_size` join,
//!   and the `session` table.
//! - [`migration`] — the schema migrator.
//! - [`catalog`] — catalog service logic: seeding, listing, validated
//!   creation, deletion, lookup.
//! - [`session_state`] — typed `Cart` and `Favourites` containers over the
//!   session.
//! - [`session_store`] — the `SessionStore` implementation over the shared
//!   database connection.
//! - [`routes`] — the HTTP surface; [`views`] — inline HTML pages.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sea_orm::Database;
//! use scarlet_shop::{router, AppState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite://scarlet.db?mode=rwc").await?;
//! let app = router(AppState { db });
//! # Ok(())
//! # }
//! ```
//!
//! The session layer is applied by the caller (see `main.rs`), so tests
//! can wire a store of their own.

pub mod catalog;
pub mod config;
pub mod entity;
pub mod error;
pub mod migration;
pub mod routes;
pub mod session_state;
pub mod session_store;
pub mod views;

pub use error::AppError;
pub use routes::{router, AppState};
pub use session_store::DbSessionStore;
