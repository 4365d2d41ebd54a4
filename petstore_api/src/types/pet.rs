//! Pet records exchanged with the `/pets` endpoints.

use serde::{Deserialize, Serialize};

/// Numeric identifier for a pet. Identifiers passed to the client are not
/// restricted to this type; anything implementing `Display` is forwarded.
pub type PetID = i64;

pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_SOLD: &str = "sold";

/// A pet as stored by the remote service.
///
/// Nothing here is validated client-side: an empty `name` or an unknown
/// `status` is sent as-is and left for the service to reject.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    /// Service identifier. Omitted from the body when unset so the service
    /// can assign one on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PetID>,

    pub name: String,

    /// Lifecycle status, e.g. `available`, `pending` or `sold`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Pet {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            status: None,
        }
    }

    pub fn with_id(mut self, id: PetID) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
}

/// Error payload returned by the service on 4xx/5xx responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceErrorBody {
    pub message: String,
}
