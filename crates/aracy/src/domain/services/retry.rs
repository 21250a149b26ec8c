//! Bounded retry
//!
//! Runs an attempt function up to a fixed number of times. Each attempt
//! either completes, produces a partial value worth keeping, or fails.

use std::future::Future;

use crate::domain::errors::DomainError;

/// Result of a single attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Attempt<T> {
    /// Good enough, stop retrying
    Complete(T),
    /// Usable but insufficient; retry if budget remains
    Partial(T, DomainError),
}

/// What a bounded retry run ended with
#[derive(Debug, Clone)]
pub struct RetryOutcome<T> {
    /// The completed value, or the latest partial one
    pub value: Option<T>,
    /// Whether `value` came from a completed attempt
    pub complete: bool,
    pub attempts: usize,
    pub last_error: Option<DomainError>,
}

/// Run `attempt(n)` for `n` in `1..=max_attempts` until one completes.
///
/// Non-retryable errors stop the loop early.
pub async fn retry_bounded<T, F, Fut>(max_attempts: usize, mut attempt: F) -> RetryOutcome<T>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<Attempt<T>, DomainError>>,
{
    let mut outcome = RetryOutcome {
        value: None,
        complete: false,
        attempts: 0,
        last_error: None,
    };

    for n in 1..=max_attempts {
        outcome.attempts = n;
        match attempt(n).await {
            Ok(Attempt::Complete(value)) => {
                outcome.value = Some(value);
                outcome.complete = true;
                return outcome;
            }
            Ok(Attempt::Partial(value, shortfall)) => {
                tracing::warn!("Attempt {}/{}: {}", n, max_attempts, shortfall);
                outcome.value = Some(value);
                outcome.last_error = Some(shortfall);
            }
            Err(e) => {
                tracing::warn!("Attempt {}/{} failed: {}", n, max_attempts, e);
                let retryable = e.is_retryable();
                outcome.last_error = Some(e);
                if !retryable {
                    break;
                }
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn shortfall(extracted: usize) -> DomainError {
        DomainError::NormalizationShortfall {
            expected: 3,
            extracted,
        }
    }

    #[tokio::test]
    async fn test_stops_at_first_complete() {
        let calls = Cell::new(0);
        let outcome = retry_bounded(3, |_| {
            calls.set(calls.get() + 1);
            async { Ok(Attempt::Complete(vec![1, 2, 3])) }
        })
        .await;

        assert_eq!(calls.get(), 1);
        assert!(outcome.complete);
        assert_eq!(outcome.value, Some(vec![1, 2, 3]));
        assert!(outcome.last_error.is_none());
    }

    #[tokio::test]
    async fn test_partial_then_complete() {
        let outcome = retry_bounded(3, |n| async move {
            if n < 2 {
                Ok(Attempt::Partial(vec![1], shortfall(1)))
            } else {
                Ok(Attempt::Complete(vec![1, 2, 3]))
            }
        })
        .await;

        assert_eq!(outcome.attempts, 2);
        assert!(outcome.complete);
        assert_eq!(outcome.value, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_keeps_latest_partial_after_budget() {
        let outcome = retry_bounded(3, |n| async move {
            match n {
                1 => Ok(Attempt::Partial(vec![1], shortfall(1))),
                2 => Ok(Attempt::Partial(vec![1, 2], shortfall(2))),
                _ => Err(DomainError::ProviderUnavailable("offline".into())),
            }
        })
        .await;

        assert_eq!(outcome.attempts, 3);
        assert!(!outcome.complete);
        assert_eq!(outcome.value, Some(vec![1, 2]));
        assert!(matches!(
            outcome.last_error,
            Some(DomainError::ProviderUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_non_retryable_error_stops_early() {
        let calls = Cell::new(0);
        let outcome: RetryOutcome<Vec<u8>> = retry_bounded(3, |_| {
            calls.set(calls.get() + 1);
            async { Err(DomainError::Validation("bad prompt".into())) }
        })
        .await;

        assert_eq!(calls.get(), 1);
        assert!(outcome.value.is_none());
    }
}
