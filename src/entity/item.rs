use sea_orm::entity::prelude::*;

/// A catalog item. Never updated in place: items are created through the
/// admin form and removed through the delete action, nothing else.
///
/// The 100-char title limit is a storage hint only; input-side validation
/// happens at the HTTP boundary before an ActiveModel is ever built.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub image: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub title: String,
    pub price: i32,
    #[sea_orm(column_type = "Text")]
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::size::Entity> for Entity {
    fn to() -> RelationDef {
        super::item_size::Relation::Size.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::item_size::Relation::Item.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
