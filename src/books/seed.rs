use std::fs;
use crate::books::domain::model::BookEntity;
use crate::core::bookstore::{BookstoreError, BookstoreResult};

const DEFAULT_SEED: &str = include_str!("../../data/books.json");

// loads the catalog seed from `path`, or the bundled catalog when no path is set
pub fn load_seed(path: Option<&str>) -> BookstoreResult<Vec<BookEntity>> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|err| BookstoreError::runtime(
                format!("failed to read seed {} due to {}", path, err).as_str(), None))?;
            parse_seed(json.as_str())
        }
        None => parse_seed(DEFAULT_SEED),
    }
}

pub(crate) fn parse_seed(json: &str) -> BookstoreResult<Vec<BookEntity>> {
    let books: Vec<BookEntity> = serde_json::from_str(json)?;
    if let Some(book) = books.iter().find(|b| b.isbn.trim().is_empty()) {
        return Err(BookstoreError::validation(
            format!("seed book '{}' has no isbn", book.title).as_str(), None));
    }
    Ok(books)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use crate::books::seed::{load_seed, parse_seed};
    use crate::core::bookstore::BookstoreError;

    #[tokio::test]
    async fn test_should_load_bundled_seed() {
        let books = load_seed(None).expect("should load seed");
        assert_eq!(10, books.len());
        assert_eq!("1", books[0].isbn.as_str());
        assert_eq!("Chinua Achebe", books[0].author.as_str());
        assert_eq!("10", books[9].isbn.as_str());
        assert!(books.iter().all(|b| b.reviews.is_empty()));
    }

    #[tokio::test]
    async fn test_should_parse_reviews_when_present() {
        let books = parse_seed(r#"[{"isbn":"x1","title":"T","author":"A","reviews":{"bob":"ok"}},
                                   {"isbn":"x2","title":"U","author":"B"}]"#).expect("should parse seed");
        assert_eq!(Some(&"ok".to_string()), books[0].reviews.get("bob"));
        assert!(books[1].reviews.is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_bad_seed() {
        assert!(matches!(parse_seed("{}"), Err(BookstoreError::Serialization { .. })));
        assert!(matches!(parse_seed(r#"[{"isbn":"","title":"T","author":"A"}]"#),
            Err(BookstoreError::Validation { .. })));
        assert!(matches!(load_seed(Some("/nonexistent/books.json")), Err(BookstoreError::Runtime { .. })));
    }

    #[tokio::test]
    async fn test_should_load_seed_file() {
        let path = std::env::temp_dir().join(format!("bookstore-seed-{}.json", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).expect("should create seed file");
        file.write_all(br#"[{"isbn":"978-0","title":"Dubliners","author":"James Joyce"}]"#).expect("should write seed");
        let books = load_seed(path.to_str()).expect("should load seed");
        let _ = std::fs::remove_file(&path);
        assert_eq!(1, books.len());
        assert_eq!("James Joyce", books[0].author.as_str());
    }
}
