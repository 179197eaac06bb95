use super::*;

/// Tests creating a group and listing it.
///
/// Expected: 201 with resolved references, then a list row with the member count
#[tokio::test]
async fn creates_and_lists_group() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let teacher = factory::create_teacher(db).await.unwrap();
    let course = factory::create_course(db).await.unwrap();
    let student = factory::create_student(db).await.unwrap();

    let (status, created) = send(
        &app,
        "POST",
        "/groups",
        Some(json!({
            "name": "Beginner A1",
            "course": course.id,
            "teacher": teacher.id,
            "students": [student.id],
            "days": ["Tue", "Thu", "Sat"],
            "time": "10:00"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["teacher"]["id"], teacher.id);
    assert_eq!(created["course"]["price"], course.price);
    assert_eq!(created["students"][0]["id"], student.id);

    let (status, list) = send(&app, "GET", "/groups", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["name"], "Beginner A1");
    assert_eq!(list[0]["studentCount"], 1);
}

/// Tests creating a group for a course that does not exist.
///
/// Expected: 400 with error body
#[tokio::test]
async fn unknown_course_is_bad_request() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let teacher = factory::create_teacher(db).await.unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/groups",
        Some(json!({"name": "Orphan", "course": 77, "teacher": teacher.id})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

/// Tests that deleting a group leaves its students unassigned.
///
/// Expected: 200 on delete, then the student in the unassigned list
#[tokio::test]
async fn deleting_group_unassigns_students() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let (_, _, group, student) = factory::helpers::create_student_in_group(db)
        .await
        .unwrap();

    let (status, _) = send(&app, "DELETE", &format!("/groups/{}", group.id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, unassigned) = send(&app, "GET", "/students/unassigned", None).await;
    assert_eq!(unassigned[0]["id"], student.id);
}
