use serde::{Deserialize, Serialize, Serializer};
use serde::ser::SerializeMap;
use crate::books::domain::model::BookEntity;
use crate::books::domain::Reviews;

// BookDto is the wire form of a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub reviews: Reviews,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            reviews: other.reviews.clone(),
        }
    }
}

// BookListing serializes books as an object keyed by ISBN, keeping catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct BookListing(pub Vec<BookDto>);

impl BookListing {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for BookListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for book in &self.0 {
            map.serialize_entry(&book.isbn, book)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::{BookDto, BookListing};

    #[tokio::test]
    async fn test_should_build_dto_from_entity() {
        let mut entity = BookEntity::new("1", "Things Fall Apart", "Chinua Achebe");
        entity.reviews.insert("alice".to_string(), "a classic".to_string());
        let dto = BookDto::from(&entity);
        assert_eq!("1", dto.isbn.as_str());
        assert_eq!(Some(&"a classic".to_string()), dto.reviews.get("alice"));
    }

    #[tokio::test]
    async fn test_should_serialize_listing_keyed_by_isbn() {
        let listing = BookListing(vec![
            BookDto::from(&BookEntity::new("2", "Fairy tales", "Hans Christian Andersen")),
            BookDto::from(&BookEntity::new("10", "Molloy", "Samuel Beckett")),
        ]);
        let json = serde_json::to_string(&listing).expect("serialize listing");
        assert_eq!(
            r#"{"2":{"isbn":"2","title":"Fairy tales","author":"Hans Christian Andersen","reviews":{}},"10":{"isbn":"10","title":"Molloy","author":"Samuel Beckett","reviews":{}}}"#,
            json.as_str());
    }
}
