pub mod book_store;
pub mod member_store;
pub mod seed;

pub use book_store::BookStore;
pub use member_store::MemberStore;
pub use seed::{LibrarySeed, SeedError};
