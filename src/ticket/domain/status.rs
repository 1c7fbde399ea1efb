//! Ticket workflow states and board-flow stepping.

use super::ParseStatusError;
use serde::{Deserialize, Serialize};

/// Ticket workflow state.
///
/// The board flow is the ordered sequence Pending → InProgress → Testing →
/// Done. `Future` is a side-state outside that flow: it never appears on the
/// kanban board and is neither produced nor left via [`Status::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Reported, work not started.
    Pending,
    /// Being implemented.
    InProgress,
    /// Awaiting functional verification.
    Testing,
    /// Completed and verified.
    Done,
    /// Deferred improvement, parked outside the board flow.
    Future,
}

/// Direction of a single board-flow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// One position towards `Done`.
    Forward,
    /// One position towards `Pending`.
    Back,
}

impl Status {
    /// The four board columns in workflow order.
    pub const BOARD_FLOW: [Self; 4] = [Self::Pending, Self::InProgress, Self::Testing, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Testing => "testing",
            Self::Done => "done",
            Self::Future => "future",
        }
    }

    /// Returns the product's display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::InProgress => "En Desarrollo",
            Self::Testing => "Testing",
            Self::Done => "Terminado",
            Self::Future => "Mejora Futura",
        }
    }

    /// Returns `true` when the state occupies a kanban column.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        !matches!(self, Self::Future)
    }

    /// Returns the neighbouring board-flow state, clamped at both ends.
    ///
    /// Stepping forward from `Done` or back from `Pending` returns the state
    /// unchanged. `Future` sits outside the flow and always returns itself.
    #[must_use]
    pub fn step(self, direction: MoveDirection) -> Self {
        let Some(position) = Self::BOARD_FLOW.iter().position(|state| *state == self) else {
            return self;
        };
        let target = match direction {
            MoveDirection::Forward => position.saturating_add(1),
            MoveDirection::Back => position.saturating_sub(1),
        };
        Self::BOARD_FLOW.get(target).copied().unwrap_or(self)
    }
}

impl TryFrom<&str> for Status {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "testing" => Ok(Self::Testing),
            "done" => Ok(Self::Done),
            "future" => Ok(Self::Future),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}
