pub mod memory_user_repository;

use crate::core::repository::Repository;
use crate::users::domain::model::UserEntity;

// UserRepository is the user registry; create fails with duplicate-key when the
// username is taken, so uniqueness holds under concurrent registrations.
pub trait UserRepository: Repository<UserEntity> {}
