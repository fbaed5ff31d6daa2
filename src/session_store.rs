use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set, TransactionTrait,
};
use time::OffsetDateTime;
use tower_sessions::{session::Id, session::Record, session_store, ExpiredDeletion, SessionStore};

use crate::entity::session::{self, ActiveModel as SessionActiveModel, Entity as SessionEntity};

/// Database-backed session store for `tower-sessions` over the shared
/// Sea-ORM connection.
///
/// Visitor state (cart and favourites lists) lives in the session record,
/// which is serialized with MessagePack and persisted in the `session`
/// table next to the catalog data. Expired rows are filtered out at load
/// time and can be bulk-removed through [`ExpiredDeletion`].
///
/// # Error Handling
///
/// Sea-ORM errors map to `session_store::Error::Backend`, serialization
/// errors to `Encode`, deserialization errors to `Decode`.
#[derive(Debug, Clone)]
pub struct DbSessionStore {
    conn: DatabaseConnection,
}

impl DbSessionStore {
    /// Creates a session store on top of an established database connection.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl SessionStore for DbSessionStore {
    /// Inserts a brand-new session record.
    ///
    /// Runs in a transaction so the collision check and the insert are one
    /// unit; on an ID collision a fresh ID is generated and the check
    /// repeats.
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        let txn = self
            .conn
            .begin()
            .await
            .map_err(|e| session_store::Error::Backend(e.to_string()))?;

        // Session ID collision mitigation
        while SessionEntity::find_by_id(record.id.to_string())
            .one(&txn)
            .await
            .map_err(|e| session_store::Error::Backend(e.to_string()))?
            .is_some()
        {
            record.id = Id::default();
        }

        let data =
            rmp_serde::to_vec(record).map_err(|e| session_store::Error::Encode(e.to_string()))?;
        let expiry_date = convert_time_to_datetime(record.expiry_date);

        let session_model = SessionActiveModel {
            id: Set(record.id.to_string()),
            data: Set(data),
            expiry_date: Set(expiry_date),
        };

        session_model
            .insert(&txn)
            .await
            .map_err(|e| session_store::Error::Backend(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| session_store::Error::Backend(e.to_string()))?;

        Ok(())
    }

    /// Saves a session record, updating the existing row or inserting one
    /// if the session is not stored yet (upsert).
    async fn save(&self, record: &Record) -> session_store::Result<()> {
        let data =
            rmp_serde::to_vec(record).map_err(|e| session_store::Error::Encode(e.to_string()))?;
        let expiry_date = convert_time_to_datetime(record.expiry_date);

        match SessionEntity::find_by_id(record.id.to_string())
            .one(&self.conn)
            .await
            .map_err(|e| session_store::Error::Backend(e.to_string()))?
        {
            Some(existing) => {
                let mut active_model = existing.into_active_model();
                active_model.data = Set(data);
                active_model.expiry_date = Set(expiry_date);
                active_model
                    .update(&self.conn)
                    .await
                    .map_err(|e| session_store::Error::Backend(e.to_string()))?;
            }
            None => {
                let session_model = SessionActiveModel {
                    id: Set(record.id.to_string()),
                    data: Set(data),
                    expiry_date: Set(expiry_date),
                };

                session_model
                    .insert(&self.conn)
                    .await
                    .map_err(|e| session_store::Error::Backend(e.to_string()))?;
            }
        }

        Ok(())
    }

    /// Loads a session by ID. Expired sessions are filtered out at the
    /// query level and load as `None`.
    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let now_db = convert_time_to_datetime(OffsetDateTime::now_utc());

        let session = SessionEntity::find_by_id(session_id.to_string())
            .filter(session::Column::ExpiryDate.gt(now_db))
            .one(&self.conn)
            .await
            .map_err(|e| session_store::Error::Backend(e.to_string()))?;

        match session {
            Some(model) => {
                let record = rmp_serde::from_slice(&model.data)
                    .map_err(|e| session_store::Error::Decode(e.to_string()))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Deletes a session by ID. Deleting an absent session is a success.
    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        SessionEntity::delete_by_id(session_id.to_string())
            .exec(&self.conn)
            .await
            .map_err(|e| session_store::Error::Backend(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ExpiredDeletion for DbSessionStore {
    /// Bulk-deletes every session whose expiry date has passed.
    async fn delete_expired(&self) -> session_store::Result<()> {
        let now_db = convert_time_to_datetime(OffsetDateTime::now_utc());

        SessionEntity::delete_many()
            .filter(session::Column::ExpiryDate.lt(now_db))
            .exec(&self.conn)
            .await
            .map_err(|e| session_store::Error::Backend(e.to_string()))?;

        Ok(())
    }
}

// Helper to convert time::OffsetDateTime to sea_orm::prelude::DateTimeWithTimeZone (chrono)
fn convert_time_to_datetime(time: OffsetDateTime) -> DateTimeWithTimeZone {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

    if let Some(datetime) = DateTime::from_timestamp(time.unix_timestamp(), time.nanosecond()) {
        return datetime.into();
    }

    // Fallback to manual construction if the timestamp is out of range
    let naive = NaiveDateTime::new(
        chrono::NaiveDate::from_ymd_opt(time.year(), time.month() as u32, time.day() as u32)
            .unwrap(),
        chrono::NaiveTime::from_hms_nano_opt(
            time.hour() as u32,
            time.minute() as u32,
            time.second() as u32,
            time.nanosecond(),
        )
        .unwrap(),
    );

    Utc.from_utc_datetime(&naive).into()
}
