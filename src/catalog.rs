//! Catalog service logic: seeding, listing, creation, deletion, and lookup
//! of items and their sizes.
//!
//! Every function takes the shared [`DatabaseConnection`]; mutations run as
//! a single transaction each and there is no cross-request coordination
//! beyond what the storage layer provides.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::{debug, info};

use crate::entity::{item, item_size, size};
use crate::error::AppError;

/// The fixed set of shoe-size labels seeded into an empty database.
pub const SIZE_LABELS: [&str; 12] = [
    "36", "37", "38", "39", "40", "41", "42", "43", "44", "45", "46", "47",
];

/// Validated input for catalog item creation.
///
/// Built once per request from the raw form pairs; anything malformed is
/// rejected here with [`AppError::Invalid`] before the domain model is
/// touched. Unknown-but-numeric size ids pass validation and are silently
/// dropped during resolution in [`create_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub title: String,
    pub image: String,
    pub price: i32,
    pub text: String,
    pub size_ids: Vec<i32>,
}

impl NewItem {
    /// Parses the urlencoded form pairs of the creation form. The `sizes`
    /// key may repeat (one entry per checked size).
    pub fn from_pairs<I>(pairs: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut title = None;
        let mut image = None;
        let mut price = None;
        let mut text = None;
        let mut size_ids = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "title" => title = Some(value),
                "image" => image = Some(value),
                "price" => price = Some(value),
                "text" => text = Some(value),
                "sizes" => size_ids.push(value.parse::<i32>().map_err(|_| {
                    AppError::Invalid(format!("size id `{value}` is not a number"))
                })?),
                _ => {}
            }
        }

        let title = required("title", title)?;
        if title.chars().count() > 100 {
            return Err(AppError::Invalid(
                "title is longer than 100 characters".to_string(),
            ));
        }
        let image = required("image", image)?;
        let text = required("text", text)?;
        let price_raw = required("price", price)?;
        // Sign stays unvalidated; only "is it a whole number" is checked
        let price = price_raw
            .trim()
            .parse::<i32>()
            .map_err(|_| AppError::Invalid(format!("price `{price_raw}` is not a whole number")))?;

        Ok(Self {
            title,
            image,
            price,
            text,
            size_ids,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Invalid(format!("missing required field `{field}`"))),
    }
}

/// Seeds the fixed size labels into an empty `size` table. Idempotent: if
/// any size row exists the call does nothing.
pub async fn seed_sizes(db: &DatabaseConnection) -> Result<(), AppError> {
    if size::Entity::find().one(db).await?.is_some() {
        return Ok(());
    }

    let rows = SIZE_LABELS.iter().map(|label| size::ActiveModel {
        value: Set((*label).to_string()),
        ..Default::default()
    });
    size::Entity::insert_many(rows).exec(db).await?;

    info!("seeded {} size labels", SIZE_LABELS.len());
    Ok(())
}

/// All sizes, in storage order. Used by the creation form.
pub async fn list_sizes(db: &DatabaseConnection) -> Result<Vec<size::Model>, AppError> {
    Ok(size::Entity::find().all(db).await?)
}

/// Every item with its sizes eagerly loaded, in storage order. No
/// pagination or filtering.
pub async fn list_items(
    db: &DatabaseConnection,
) -> Result<Vec<(item::Model, Vec<size::Model>)>, AppError> {
    Ok(item::Entity::find()
        .find_with_related(size::Entity)
        .all(db)
        .await?)
}

/// Inserts a new item and its size associations in one transaction.
///
/// Requested size ids are resolved against the `size` table; ids that
/// match nothing are dropped without error.
pub async fn create_item(db: &DatabaseConnection, new: NewItem) -> Result<item::Model, AppError> {
    let txn = db.begin().await?;

    let sizes = size::Entity::find()
        .filter(size::Column::Id.is_in(new.size_ids))
        .all(&txn)
        .await?;

    let stored = item::ActiveModel {
        image: Set(new.image),
        title: Set(new.title),
        price: Set(new.price),
        text: Set(new.text),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    if !sizes.is_empty() {
        let links = sizes.iter().map(|s| item_size::ActiveModel {
            item_id: Set(stored.id),
            size_id: Set(s.id),
        });
        item_size::Entity::insert_many(links).exec(&txn).await?;
    }

    txn.commit().await?;

    info!(item_id = stored.id, title = %stored.title, "created catalog item");
    Ok(stored)
}

/// Deletes an item and its size associations in one transaction.
///
/// An id that matches nothing is a silent no-op: resolved lookups that find
/// nothing are treated as success here, unlike [`find_item`].
pub async fn delete_item(db: &DatabaseConnection, item_id: i32) -> Result<(), AppError> {
    let txn = db.begin().await?;

    item_size::Entity::delete_many()
        .filter(item_size::Column::ItemId.eq(item_id))
        .exec(&txn)
        .await?;
    let res = item::Entity::delete_by_id(item_id).exec(&txn).await?;

    txn.commit().await?;

    if res.rows_affected > 0 {
        info!(item_id, "deleted catalog item");
    } else {
        debug!(item_id, "delete of absent item ignored");
    }
    Ok(())
}

/// The single item with its sizes, or [`AppError::NotFound`].
pub async fn find_item(
    db: &DatabaseConnection,
    item_id: i32,
) -> Result<(item::Model, Vec<size::Model>), AppError> {
    item::Entity::find_by_id(item_id)
        .find_with_related(size::Entity)
        .all(db)
        .await?
        .into_iter()
        .next()
        .ok_or(AppError::NotFound)
}

/// Existing items whose id appears in `ids`, one row per distinct id.
/// Ids with no matching row (stale cart or favourite entries) simply
/// produce nothing.
pub async fn items_by_ids(
    db: &DatabaseConnection,
    ids: &[i32],
) -> Result<Vec<item::Model>, AppError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    Ok(item::Entity::find()
        .filter(item::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn form_pairs_parse_with_repeated_sizes() {
        let new_item = NewItem::from_pairs(pairs(&[
            ("title", "Shoe A"),
            ("image", "a.png"),
            ("price", "100"),
            ("text", "desc"),
            ("sizes", "1"),
            ("sizes", "2"),
        ]))
        .expect("valid form");

        assert_eq!(new_item.title, "Shoe A");
        assert_eq!(new_item.price, 100);
        assert_eq!(new_item.size_ids, vec![1, 2]);
    }

    #[test]
    fn sizes_may_be_absent() {
        let new_item = NewItem::from_pairs(pairs(&[
            ("title", "Shoe B"),
            ("image", "b.png"),
            ("price", "50"),
            ("text", "desc"),
        ]))
        .expect("valid form");

        assert!(new_item.size_ids.is_empty());
    }

    #[test]
    fn negative_price_is_accepted() {
        let new_item = NewItem::from_pairs(pairs(&[
            ("title", "Refund"),
            ("image", "r.png"),
            ("price", "-5"),
            ("text", "desc"),
        ]))
        .expect("sign is not validated");

        assert_eq!(new_item.price, -5);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let err = NewItem::from_pairs(pairs(&[
            ("title", "Shoe"),
            ("image", "s.png"),
            ("price", "cheap"),
            ("text", "desc"),
        ]))
        .unwrap_err();

        assert!(matches!(err, AppError::Invalid(_)));
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = NewItem::from_pairs(pairs(&[
            ("title", "Shoe"),
            ("price", "10"),
            ("text", "desc"),
        ]))
        .unwrap_err();

        assert!(matches!(err, AppError::Invalid(ref msg) if msg.contains("image")));
    }

    #[test]
    fn overlong_title_is_rejected() {
        let long_title = "x".repeat(101);
        let err = NewItem::from_pairs(pairs(&[
            ("title", long_title.as_str()),
            ("image", "s.png"),
            ("price", "10"),
            ("text", "desc"),
        ]))
        .unwrap_err();

        assert!(matches!(err, AppError::Invalid(_)));
    }

    #[test]
    fn non_numeric_size_id_is_rejected() {
        let err = NewItem::from_pairs(pairs(&[
            ("title", "Shoe"),
            ("image", "s.png"),
            ("price", "10"),
            ("text", "desc"),
            ("sizes", "big"),
        ]))
        .unwrap_err();

        assert!(matches!(err, AppError::Invalid(_)));
    }
}
