// crates/shared-kernel/src/clock/mod.rs

mod system;

use chrono::{DateTime, Utc};

pub use system::{FixedClock, SystemClock};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
