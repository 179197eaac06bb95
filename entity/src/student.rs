use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name_first: String,
    pub name_last: String,
    pub phone: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub info: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
    #[sea_orm(has_many = "super::group_student::Entity")]
    GroupStudent,
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl Related<super::group_student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupStudent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
