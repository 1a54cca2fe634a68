use std::collections::BTreeMap;

pub mod model;

// Reviews maps a reviewer identifier to the review text
pub type Reviews = BTreeMap<String, String>;
