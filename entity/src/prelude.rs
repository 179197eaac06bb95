pub use super::class_group::Entity as ClassGroup;
pub use super::course::Entity as Course;
pub use super::group_student::Entity as GroupStudent;
pub use super::payment::Entity as Payment;
pub use super::student::Entity as Student;
pub use super::teacher::Entity as Teacher;
