pub mod cancel;
pub mod error;
pub mod jitter;
pub mod repeat;
pub mod sleep;

pub use cancel::CancelToken;
pub use error::DelayError;
pub use jitter::jittered_delay_ms;
pub use repeat::repeat_with_sleep;
pub use sleep::{sleep_millis, sleep_secs, SleepOutcome, Sleeper};
