//! Approximate text matching for the student/teacher search.
//!
//! A query is split into terms and each term is compared against the whitespace tokens
//! of the searched fields. Text terms tolerate a number of edits that grows with the
//! term length; digit-only terms match anywhere inside a token so that a partial phone
//! number finds its owner. Tokens and terms are lowercased and stripped of punctuation
//! before comparison, which turns `+998 (90) 123-45-67` into `998 90 1234567`.

/// Digit-only terms shorter than this must match a token exactly.
const MIN_DIGIT_SUBSTRING: usize = 3;

/// A parsed search query.
#[derive(Debug, Clone)]
pub struct FuzzyQuery {
    terms: Vec<String>,
}

impl FuzzyQuery {
    /// Splits `query` into normalized terms, dropping the empty ones.
    pub fn parse(query: &str) -> Self {
        let terms = query
            .split_whitespace()
            .map(normalize)
            .filter(|term| !term.is_empty())
            .collect();

        Self { terms }
    }

    /// Whether the query has no usable term and therefore matches nothing.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of query terms matched by at least one token of `fields`.
    ///
    /// A score of 0 means the document does not match.
    pub fn score<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> usize {
        let tokens: Vec<String> = fields
            .into_iter()
            .flat_map(str::split_whitespace)
            .map(normalize)
            .filter(|token| !token.is_empty())
            .collect();

        self.terms
            .iter()
            .filter(|term| tokens.iter().any(|token| term_matches(term, token)))
            .count()
    }
}

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn term_matches(term: &str, token: &str) -> bool {
    if term == token {
        return true;
    }

    if term.chars().all(|c| c.is_ascii_digit()) {
        return term.len() >= MIN_DIGIT_SUBSTRING && token.contains(term);
    }

    let budget = edit_budget(term.chars().count());
    budget > 0 && within_edit_distance(term, token, budget)
}

/// Allowed edits for a term of `len` characters.
fn edit_budget(len: usize) -> usize {
    match len {
        0..=2 => 0,
        3..=5 => 1,
        _ => 2,
    }
}

/// Levenshtein distance check that gives up once every cell of a row exceeds `max`.
fn within_edit_distance(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > max {
        return false;
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        let mut row_min = current[0];

        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
            row_min = row_min.min(current[j + 1]);
        }

        if row_min > max {
            return false;
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()] <= max
}
