use std::str::FromStr;

use serde::{Deserialize, Serialize};

use autoserve_core::AppError;

/// Lifecycle status of a booking.
///
/// The lifecycle is a fixed state machine:
///
/// ```text
/// pending ──► approved ──► completed
///    │            │
///    └────────────┴──────► cancelled
/// ```
///
/// `completed` and `cancelled` are terminal. Every other edge is illegal,
/// including any move out of a terminal status and any same-status "move".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Created, awaiting operator review.
    Pending,
    /// Accepted for service.
    Approved,
    /// Service performed. Terminal.
    Completed,
    /// Called off before completion. Terminal.
    Cancelled,
}

impl BookingStatus {
    /// Whether a transition from `self` to `next` is legal.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Cancelled)
                | (Self::Approved, Self::Completed)
                | (Self::Approved, Self::Cancelled)
        )
    }

    /// Whether this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// The lowercase wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(AppError::validation(format!(
                "Unknown booking status: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BookingStatus::*;

    const ALL: [BookingStatus; 4] = [Pending, Approved, Completed, Cancelled];

    #[test]
    fn test_legal_transitions() {
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Approved.can_transition_to(Completed));
        assert!(Approved.can_transition_to(Cancelled));
    }

    #[test]
    fn test_cancellation_of_approved_booking_is_legal() {
        // An approved booking can still be called off before the work
        // is done.
        assert!(Approved.can_transition_to(Cancelled));
    }

    #[test]
    fn test_terminal_statuses_admit_nothing() {
        for next in ALL {
            assert!(!Completed.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }
        assert!(Completed.is_terminal());
        assert!(Cancelled.is_terminal());
        assert!(!Pending.is_terminal());
        assert!(!Approved.is_terminal());
    }

    #[test]
    fn test_self_transitions_are_illegal() {
        for status in ALL {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn test_no_shortcut_from_pending_to_completed() {
        assert!(!Pending.can_transition_to(Completed));
    }

    #[test]
    fn test_no_backward_transitions() {
        assert!(!Approved.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Approved));
        assert!(!Cancelled.can_transition_to(Pending));
    }

    #[test]
    fn test_wire_names_round_trip() {
        for status in ALL {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), status);
        }
        assert!("done".parse::<BookingStatus>().is_err());
    }
}
