pub mod accounts;
pub mod app;
pub mod books;
pub mod catalog;
pub mod gateway;
pub mod users;

pub mod core {
    pub mod bookstore;
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod events;
    pub mod repository;
}

pub mod utils {
    pub mod date;
    pub mod logging;
    pub(crate) mod memory;
}
