use std::time::Duration;

/// Classification of a request failure for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Gateway reported the service unavailable (502).
    Unavailable,
    /// Operation timed out (connect/read).
    Timeout,
    /// Network-level failure (connection refused, DNS, reset).
    Connection,
    /// Anything else; not retried.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    NoRetry,
    RetryAfter(Duration),
}

/// Exponential backoff with a cap.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(300),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// `attempt` is 1-based (1 = first attempt).
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if attempt >= self.max_attempts {
            return RetryDecision::NoRetry;
        }
        match kind {
            ErrorKind::Other => RetryDecision::NoRetry,
            ErrorKind::Unavailable | ErrorKind::Timeout | ErrorKind::Connection => {
                // base * 2^(attempt-1), capped.
                let exp = 1u32 << attempt.saturating_sub(1).min(8);
                let delay = self.base_delay.saturating_mul(exp).min(self.max_delay);
                RetryDecision::RetryAfter(delay)
            }
        }
    }

    /// Runs `f` until it succeeds or the policy says to stop, sleeping the
    /// current thread between attempts.
    pub fn run<T, E, F, K>(&self, mut f: F, classify: K) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        K: Fn(&E) -> ErrorKind,
        E: std::fmt::Display,
    {
        let mut attempt = 1u32;
        loop {
            match f() {
                Ok(v) => return Ok(v),
                Err(e) => match self.decide(attempt, classify(&e)) {
                    RetryDecision::NoRetry => return Err(e),
                    RetryDecision::RetryAfter(d) => {
                        tracing::warn!(
                            attempt,
                            delay_ms = d.as_millis() as u64,
                            "retrying after error: {}",
                            e
                        );
                        std::thread::sleep(d);
                        attempt += 1;
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn quick() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
        }
    }

    #[test]
    fn no_retry_for_other() {
        let p = RetryPolicy::default();
        assert_eq!(p.decide(1, ErrorKind::Other), RetryDecision::NoRetry);
    }

    #[test]
    fn backoff_doubles_then_caps() {
        let p = RetryPolicy {
            max_attempts: 20,
            ..RetryPolicy::default()
        };
        assert_eq!(
            p.decide(1, ErrorKind::Unavailable),
            RetryDecision::RetryAfter(Duration::from_millis(300))
        );
        assert_eq!(
            p.decide(2, ErrorKind::Unavailable),
            RetryDecision::RetryAfter(Duration::from_millis(600))
        );
        assert_eq!(
            p.decide(12, ErrorKind::Timeout),
            RetryDecision::RetryAfter(p.max_delay)
        );
    }

    #[test]
    fn respects_max_attempts() {
        let p = quick();
        assert!(matches!(p.decide(2, ErrorKind::Connection), RetryDecision::RetryAfter(_)));
        assert_eq!(p.decide(3, ErrorKind::Connection), RetryDecision::NoRetry);
    }

    #[test]
    fn run_retries_until_success() {
        let calls = Cell::new(0);
        let out: Result<u32, String> = quick().run(
            || {
                calls.set(calls.get() + 1);
                if calls.get() < 3 {
                    Err("busy".to_string())
                } else {
                    Ok(7)
                }
            },
            |_| ErrorKind::Unavailable,
        );
        assert_eq!(out, Ok(7));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn run_stops_on_non_retryable() {
        let calls = Cell::new(0);
        let out: Result<(), String> = quick().run(
            || {
                calls.set(calls.get() + 1);
                Err("bad request".to_string())
            },
            |_| ErrorKind::Other,
        );
        assert!(out.is_err());
        assert_eq!(calls.get(), 1);
    }
}
