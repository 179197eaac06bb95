mod course;
mod group;
mod payment;
mod student;
mod teacher;
