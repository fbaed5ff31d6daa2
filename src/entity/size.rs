use sea_orm::entity::prelude::*;

/// A shoe-size label ("36" through "47"). Seeded once at startup and
/// immutable afterwards; no delete path exists.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "size")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        super::item_size::Relation::Item.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::item_size::Relation::Size.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
