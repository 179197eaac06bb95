use sea_orm::entity::prelude::*;

/// A scheduled class cohort. The table is named `class_group` because `group` is reserved in SQL.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub course_id: i32,
    pub teacher_id: i32,
    /// JSON array of weekday names.
    pub days: Json,
    #[sea_orm(nullable)]
    pub time: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Teacher,
    #[sea_orm(has_many = "super::group_student::Entity")]
    GroupStudent,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::group_student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupStudent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
