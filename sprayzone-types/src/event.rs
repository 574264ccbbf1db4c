use crate::polygon::SprayingPoint;
use serde::{Deserialize, Serialize};

/// Kind of geofence transition reported by the monitoring platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Enter,
    Dwell,
    Exit,
    /// Any code the platform reports that is not one of the above.
    Unknown(i32),
}

impl TransitionKind {
    pub const ENTER_CODE: i32 = 1;
    pub const EXIT_CODE: i32 = 2;
    pub const DWELL_CODE: i32 = 4;

    /// Map a raw platform transition code.
    ///
    /// ```
    /// use sprayzone_types::event::TransitionKind;
    ///
    /// assert_eq!(TransitionKind::from_code(4), TransitionKind::Dwell);
    /// assert_eq!(TransitionKind::from_code(8), TransitionKind::Unknown(8));
    /// ```
    pub fn from_code(code: i32) -> Self {
        match code {
            Self::ENTER_CODE => TransitionKind::Enter,
            Self::EXIT_CODE => TransitionKind::Exit,
            Self::DWELL_CODE => TransitionKind::Dwell,
            other => TransitionKind::Unknown(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            TransitionKind::Enter => Self::ENTER_CODE,
            TransitionKind::Exit => Self::EXIT_CODE,
            TransitionKind::Dwell => Self::DWELL_CODE,
            TransitionKind::Unknown(code) => *code,
        }
    }
}

/// A single transition notification from the monitoring platform.
///
/// One platform event may name several triggering geofences; each request id
/// is evaluated on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub kind: TransitionKind,
    pub request_ids: Vec<String>,
    /// Set when the platform delivered an error instead of a transition.
    #[serde(default)]
    pub error_code: Option<i32>,
}

impl TransitionEvent {
    pub fn new(kind: TransitionKind, request_ids: Vec<String>) -> Self {
        Self {
            kind,
            request_ids,
            error_code: None,
        }
    }

    /// An ENTER event for a single geofence.
    pub fn enter(request_id: impl Into<String>) -> Self {
        Self::new(TransitionKind::Enter, vec![request_id.into()])
    }

    pub fn dwell(request_id: impl Into<String>) -> Self {
        Self::new(TransitionKind::Dwell, vec![request_id.into()])
    }

    pub fn exit(request_id: impl Into<String>) -> Self {
        Self::new(TransitionKind::Exit, vec![request_id.into()])
    }

    /// An event the platform could not deliver.
    pub fn failed(error_code: i32) -> Self {
        Self {
            kind: TransitionKind::Unknown(-1),
            request_ids: Vec::new(),
            error_code: Some(error_code),
        }
    }

    pub fn has_error(&self) -> bool {
        self.error_code.is_some()
    }
}

/// Zone-entered notification payload handed to the notification collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprayingRequest {
    pub request_id: String,
    /// Perimeter points in traversal order starting at the first vertex.
    pub points: Vec<SprayingPoint>,
}

impl SprayingRequest {
    pub fn new(request_id: impl Into<String>, points: Vec<SprayingPoint>) -> Self {
        Self {
            request_id: request_id.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
