pub mod lending;
pub mod report;
pub mod search;
