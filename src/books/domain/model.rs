use serde::{Deserialize, Serialize};
use crate::books::domain::Reviews;
use crate::core::domain::{Attributed, Identifiable};

// BookEntity is a catalog entry; the ISBN is its key and never changes once
// the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub reviews: Reviews,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            reviews: Reviews::new(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Attributed for BookEntity {
    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "isbn" => Some(self.isbn.as_str()),
            "title" => Some(self.title.as_str()),
            "author" => Some(self.author.as_str()),
            _ => None,
        }
    }
}
