//! Session entity model for Sea-ORM database interaction.
//!
//! Defines the schema representation for session storage, used exclusively
//! by [`crate::session_store::DbSessionStore`]. Application code never reads
//! this table directly.

use sea_orm::entity::prelude::*;

/// A stored visitor session.
///
/// | Column      | Type               | Description                   |
/// |-------------|--------------------|-------------------------------|
/// | id          | TEXT (Primary Key) | Session ID                    |
/// | data        | BLOB               | MessagePack-serialized record |
/// | expiry_date | TIMESTAMPTZ        | Session expiration timestamp  |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "session")]
pub struct Model {
    /// The unique session identifier, a `tower_sessions::Id` rendered as text.
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,

    /// The MessagePack-serialized session record, cart and favourites included.
    pub data: Vec<u8>,

    /// When the session stops being loadable. Expired rows are filtered at
    /// query time and bulk-deleted by `delete_expired`.
    pub expiry_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
