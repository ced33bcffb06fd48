//! Input validation for simulation workloads.
//!
//! Checks the Workload Source contract before a discipline runs. The engine
//! itself does not re-validate: behavior on malformed input is undefined
//! beyond the iteration-ceiling backstop, so callers run these checks first.
//! Detects:
//! - Zero burst times (a process must require at least one tick)
//! - Duplicate pids
//! - A zero round-robin quantum

use std::collections::HashSet;

use crate::models::Workload;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process declares a burst of zero ticks.
    ZeroBurst,
    /// Two processes share the same pid.
    DuplicatePid,
    /// The round-robin quantum is zero.
    ZeroQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a workload (and, when scheduling round robin, its quantum).
///
/// Checks:
/// 1. Every burst time is at least 1
/// 2. No duplicate pids
/// 3. The quantum, when supplied, is at least 1
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(workload: &Workload, quantum: Option<u64>) -> ValidationResult {
    let mut errors = Vec::new();

    let mut pids = HashSet::new();
    for process in workload.processes() {
        if process.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process {} has a zero burst time", process.pid),
            ));
        }
        if !pids.insert(process.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", process.pid),
            ));
        }
    }

    if quantum == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroQuantum,
            "Round-robin quantum must be a positive integer",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let workload = Workload::new().with_process(0, 4).with_prioritized(1, 3, 1);
        assert!(validate_input(&workload, Some(2)).is_ok());
        assert!(validate_input(&workload, None).is_ok());
    }

    #[test]
    fn test_zero_burst() {
        let workload = Workload::new().with_process(0, 0);
        let errors = validate_input(&workload, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBurst));
    }

    #[test]
    fn test_duplicate_pid() {
        // Submission assigns unique pids; deserialized workloads may not.
        let json = r#"{"processes":[
            {"pid":1,"arrival_time":0,"burst_time":2,"priority":null,
             "remaining_burst":2,"completion_time":null,
             "waiting_time":0,"turnaround_time":0},
            {"pid":1,"arrival_time":3,"burst_time":1,"priority":null,
             "remaining_burst":1,"completion_time":null,
             "waiting_time":0,"turnaround_time":0}
        ]}"#;
        let workload: Workload = serde_json::from_str(json).unwrap();

        let errors = validate_input(&workload, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePid));
    }

    #[test]
    fn test_zero_quantum() {
        let workload = Workload::new().with_process(0, 4);
        let errors = validate_input(&workload, Some(0)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroQuantum));
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let workload = Workload::new().with_process(0, 0).with_process(1, 0);
        let errors = validate_input(&workload, Some(0)).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_empty_workload_is_valid() {
        assert!(validate_input(&Workload::new(), Some(1)).is_ok());
    }
}
