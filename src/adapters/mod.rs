pub mod clock;
pub mod memory;
pub mod notifier;

pub use clock::{FixedClock, SystemClock};
pub use notifier::LoggingNotifier;
