use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DelayError {
    #[error("sleep duration is negative: {0}ms")]
    NegativeDuration(i64),
}
