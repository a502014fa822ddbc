pub mod book;
pub mod errors;
pub mod fee;
pub mod member;
pub mod policy;
pub mod value_objects;

pub use book::Book;
pub use errors::*;
pub use fee::{FeeResolver, LateFeeCalculator};
pub use member::Member;
pub use policy::{MembershipPolicy, PolicyResolver};
pub use value_objects::*;
