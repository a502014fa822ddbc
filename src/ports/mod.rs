pub mod book_store;
pub mod clock;
pub mod member_store;
pub mod notifier;

pub use book_store::BookStore;
pub use clock::Clock;
pub use member_store::MemberStore;
pub use notifier::Notifier;
