mod pet;
pub use self::pet::{Pet, PetID, ServiceErrorBody, STATUS_AVAILABLE, STATUS_PENDING, STATUS_SOLD};
