//! Fuzzy search across students and teachers.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{student::StudentRepository, teacher::TeacherRepository},
    error::AppError,
    model::{person::PersonName, search::SearchResults},
    util::fuzzy::FuzzyQuery,
};

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches first name, last name and phone of students and teachers.
    ///
    /// Both collections are loaded concurrently and ranked independently: more matched
    /// query terms first, lower id first among equal scores.
    ///
    /// # Arguments
    /// - `query` - Raw search text; blank text matches nothing
    ///
    /// # Returns
    /// - `Ok(SearchResults)` - Matches per collection, possibly empty
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn search(&self, query: &str) -> Result<SearchResults, AppError> {
        let query = FuzzyQuery::parse(query);
        if query.is_empty() {
            return Ok(SearchResults::default());
        }

        let student_repo = StudentRepository::new(self.db);
        let teacher_repo = TeacherRepository::new(self.db);
        let (students, teachers) = tokio::try_join!(student_repo.get_all(), teacher_repo.get_all())?;

        Ok(SearchResults {
            students: rank(students, |s| score(&query, &s.name, &s.phone), |s| s.id),
            teachers: rank(teachers, |t| score(&query, &t.name, &t.phone), |t| t.id),
        })
    }
}

fn score(query: &FuzzyQuery, name: &PersonName, phone: &str) -> usize {
    query.score([name.first.as_str(), name.last.as_str(), phone])
}

fn rank<T>(items: Vec<T>, score: impl Fn(&T) -> usize, id: impl Fn(&T) -> i32) -> Vec<T> {
    let mut scored: Vec<(usize, T)> = items
        .into_iter()
        .map(|item| (score(&item), item))
        .filter(|(score, _)| *score > 0)
        .collect();

    scored.sort_by(|(a_score, a), (b_score, b)| b_score.cmp(a_score).then(id(a).cmp(&id(b))));

    scored.into_iter().map(|(_, item)| item).collect()
}
