use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundError {
    #[error("upper bound is zero")]
    DivisionByZero,
    #[error("upper bound must be positive, got {0}")]
    InvalidArgument(i64),
}

pub(crate) fn check_upper(upper: i64) -> Result<(), BoundError> {
    match upper {
        0 => Err(BoundError::DivisionByZero),
        negative if negative < 0 => Err(BoundError::InvalidArgument(negative)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_division_by_zero() {
        assert_eq!(check_upper(0), Err(BoundError::DivisionByZero));
    }

    #[test]
    fn negative_is_invalid_argument() {
        assert_eq!(check_upper(-3), Err(BoundError::InvalidArgument(-3)));
        assert_eq!(
            check_upper(i64::MIN),
            Err(BoundError::InvalidArgument(i64::MIN))
        );
    }

    #[test]
    fn positive_passes() {
        assert!(check_upper(1).is_ok());
        assert!(check_upper(i64::MAX).is_ok());
    }
}
