//! Leave request status and the verification decision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use cuti_core::AppError;

/// Lifecycle state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "leave_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaveStatus {
    /// Editable by the owner, invisible to anyone else.
    Draft,
    /// Submitted and waiting for a manager.
    Terkirim,
    /// Approved.
    Diterima,
    /// Rejected.
    Ditolak,
}

impl LeaveStatus {
    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(&self, next: LeaveStatus) -> bool {
        match self {
            Self::Draft => matches!(next, Self::Terkirim),
            Self::Terkirim => matches!(next, Self::Diterima | Self::Ditolak),
            Self::Diterima | Self::Ditolak => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Terkirim => "TERKIRIM",
            Self::Diterima => "DITERIMA",
            Self::Ditolak => "DITOLAK",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeaveStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DRAFT" => Ok(Self::Draft),
            "TERKIRIM" => Ok(Self::Terkirim),
            "DITERIMA" => Ok(Self::Diterima),
            "DITOLAK" => Ok(Self::Ditolak),
            _ => Err(AppError::validation(
                "Status hanya boleh salah satu dari DRAFT, TERKIRIM, DITOLAK, atau DITERIMA",
            )),
        }
    }
}

/// Outcome a manager may give a submitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerifyDecision {
    Diterima,
    Ditolak,
}

impl VerifyDecision {
    /// Confirmation message for the decision.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Diterima => "Izin cuti berhasil diterima",
            Self::Ditolak => "Izin cuti berhasil ditolak",
        }
    }
}

impl From<VerifyDecision> for LeaveStatus {
    fn from(decision: VerifyDecision) -> Self {
        match decision {
            VerifyDecision::Diterima => LeaveStatus::Diterima,
            VerifyDecision::Ditolak => LeaveStatus::Ditolak,
        }
    }
}

impl FromStr for VerifyDecision {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DITERIMA" => Ok(Self::Diterima),
            "DITOLAK" => Ok(Self::Ditolak),
            _ => Err(AppError::validation("Status hanya boleh DITOLAK atau DITERIMA")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_graph() {
        use LeaveStatus::*;
        assert!(Draft.can_transition_to(Terkirim));
        assert!(!Draft.can_transition_to(Diterima));
        assert!(!Draft.can_transition_to(Ditolak));
        assert!(Terkirim.can_transition_to(Diterima));
        assert!(Terkirim.can_transition_to(Ditolak));
        assert!(!Terkirim.can_transition_to(Draft));
        for terminal in [Diterima, Ditolak] {
            for next in [Draft, Terkirim, Diterima, Ditolak] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_decision_parsing() {
        assert_eq!("diterima".parse::<VerifyDecision>().unwrap(), VerifyDecision::Diterima);
        let err = "DRAFT".parse::<VerifyDecision>().unwrap_err();
        assert_eq!(err.message, "Status hanya boleh DITOLAK atau DITERIMA");
        assert_eq!(LeaveStatus::from(VerifyDecision::Ditolak), LeaveStatus::Ditolak);
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&LeaveStatus::Terkirim).unwrap();
        assert_eq!(json, "\"TERKIRIM\"");
        assert!("PENDING".parse::<LeaveStatus>().is_err());
    }
}
