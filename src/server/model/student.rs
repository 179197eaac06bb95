//! Student domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::student::{
        CreateStudentDto, StudentDetailDto, StudentDto, StudentListItemDto, StudentSummaryDto,
        UpdateStudentDto,
    },
    server::model::{
        course::Course,
        group::Group,
        payment::{NewPayment, Payment},
        person::PersonName,
        teacher::Teacher,
    },
};

/// A student with its payment history.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub name: PersonName,
    pub phone: String,
    pub info: Option<String>,
    pub payment_history: Vec<Payment>,
}

impl Student {
    /// Converts entity models to a domain model, keeping the payment order as given.
    pub fn from_entity(
        entity: entity::student::Model,
        payments: Vec<entity::payment::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: PersonName::new(entity.name_first, entity.name_last),
            phone: entity.phone,
            info: entity.info,
            payment_history: payments.into_iter().map(Payment::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name.into_dto(),
            phone: self.phone,
            info: self.info,
            payment_history: self
                .payment_history
                .into_iter()
                .map(Payment::into_dto)
                .collect(),
        }
    }
}

/// Id, name and phone of a student.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentSummary {
    pub id: i32,
    pub name: PersonName,
    pub phone: String,
}

impl StudentSummary {
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: PersonName::new(entity.name_first, entity.name_last),
            phone: entity.phone,
        }
    }

    pub fn into_dto(self) -> StudentSummaryDto {
        StudentSummaryDto {
            id: self.id,
            name: self.name.into_dto(),
            phone: self.phone,
        }
    }
}

/// Student list row flattened with its group and teacher names.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentListItem {
    pub id: i32,
    pub name: PersonName,
    pub phone: String,
    pub group_name: Option<String>,
    pub teacher_name: Option<PersonName>,
}

impl StudentListItem {
    pub fn into_dto(self) -> StudentListItemDto {
        StudentListItemDto {
            id: self.id,
            name: self.name.into_dto(),
            phone: self.phone,
            group: self.group_name,
            teacher: self.teacher_name.map(PersonName::into_dto),
        }
    }
}

/// A student merged with its group, the group's teacher and course.
#[derive(Debug, Clone)]
pub struct StudentDetail {
    pub student: Student,
    pub group: Option<Group>,
    pub teacher: Option<Teacher>,
    pub course: Option<Course>,
}

impl StudentDetail {
    pub fn into_dto(self) -> StudentDetailDto {
        let student = self.student.into_dto();

        StudentDetailDto {
            id: Some(student.id),
            name: Some(student.name),
            phone: Some(student.phone),
            info: student.info,
            payment_history: Some(student.payment_history),
            group: self.group.map(Group::into_student_group_dto),
            teacher: self.teacher.map(Teacher::into_dto),
            course: self.course.map(Course::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub name: PersonName,
    pub phone: String,
    pub info: Option<String>,
    pub payment_history: Vec<NewPayment>,
}

impl CreateStudentParams {
    /// Converts the request body; payments without a usable date are stamped with `now`.
    pub fn from_dto(dto: CreateStudentDto, now: DateTime<Utc>) -> Self {
        Self {
            name: dto.name.into(),
            phone: dto.phone,
            info: dto.info,
            payment_history: dto
                .payment_history
                .into_iter()
                .map(|payment| NewPayment::from_dto(payment, now))
                .collect(),
        }
    }
}

/// Fields to change on a student; `None` keeps the stored value. The id comes from the path.
#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub id: i32,
    pub name: Option<PersonName>,
    pub phone: Option<String>,
    pub info: Option<String>,
}

impl UpdateStudentParams {
    pub fn from_dto(id: i32, dto: UpdateStudentDto) -> Self {
        Self {
            id,
            name: dto.name.map(Into::into),
            phone: dto.phone,
            info: dto.info,
        }
    }
}
