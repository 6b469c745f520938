//! Fault reporting for error-level diagnostics.

use serde::Deserialize;

/// Assertion facility invoked after an error is logged.
///
/// `condition == false` signals an internal invariant violation. Whether that
/// is fatal is up to the implementation.
pub trait FaultReporter: Send + Sync {
    fn report(&self, condition: bool, message: &str);
}

/// What a failed condition does
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultPolicy {
    /// Panic in debug builds, nothing in release builds
    #[default]
    DebugAssert,
    /// Always panic
    Panic,
    /// Never fatal; the logged error line is the only record
    LogOnly,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PolicyReporter {
    policy: FaultPolicy,
}

impl PolicyReporter {
    pub fn new(policy: FaultPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> FaultPolicy {
        self.policy
    }
}

impl FaultReporter for PolicyReporter {
    fn report(&self, condition: bool, message: &str) {
        match self.policy {
            FaultPolicy::DebugAssert => debug_assert!(condition, "{}", message),
            FaultPolicy::Panic => assert!(condition, "{}", message),
            FaultPolicy::LogOnly => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_debug_assert() {
        assert_eq!(PolicyReporter::default().policy(), FaultPolicy::DebugAssert);
    }

    #[test]
    fn test_true_condition_never_panics() {
        for policy in [FaultPolicy::DebugAssert, FaultPolicy::Panic, FaultPolicy::LogOnly] {
            PolicyReporter::new(policy).report(true, "fine");
        }
    }

    #[test]
    fn test_log_only_never_panics() {
        PolicyReporter::new(FaultPolicy::LogOnly).report(false, "recorded only");
    }

    #[test]
    #[should_panic(expected = "file write failed")]
    fn test_panic_policy_panics_with_message() {
        PolicyReporter::new(FaultPolicy::Panic).report(false, "file write failed");
    }

    #[test]
    fn test_debug_assert_matches_build() {
        let result = std::panic::catch_unwind(|| {
            PolicyReporter::new(FaultPolicy::DebugAssert).report(false, "boom");
        });
        assert_eq!(result.is_err(), cfg!(debug_assertions));
    }
}
