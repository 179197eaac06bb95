use axum::{routing::get, Router};

use crate::server::{
    controller::{course, docs, group, student, teacher},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/students", get(student::get_all).post(student::create_one))
        .route("/students/unassigned", get(student::get_unassigned))
        .route("/students/search", get(student::search))
        .route(
            "/students/select/{student_id}",
            get(student::get_one)
                .patch(student::edit_one)
                .delete(student::remove_one)
                .post(student::make_payment),
        )
        .route("/teachers", get(teacher::get_all).post(teacher::create_one))
        .route(
            "/teachers/{teacher_id}",
            get(teacher::get_one)
                .patch(teacher::edit_one)
                .delete(teacher::remove_one),
        )
        .route("/courses", get(course::get_all).post(course::create_one))
        .route(
            "/courses/{course_id}",
            get(course::get_one)
                .patch(course::edit_one)
                .delete(course::remove_one),
        )
        .route("/groups", get(group::get_all).post(group::create_one))
        .route(
            "/groups/{group_id}",
            get(group::get_one)
                .patch(group::edit_one)
                .delete(group::remove_one),
        )
        .route("/openapi.json", get(docs::openapi))
}
