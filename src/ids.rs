//! Identifier generation for stored documents.
//!
//! Every entity id is a 24-character hex object id; that format is part of
//! the external API contract. Generation goes through the [`IdGenerator`]
//! trait so the backing format can be swapped without touching resolver or
//! repository code.

use mongodb::bson::oid::ObjectId;

/// Produces fresh unique ids in the external 24-hex format.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator backed by BSON ObjectId.
pub struct ObjectIdGenerator;

impl IdGenerator for ObjectIdGenerator {
    fn generate(&self) -> String {
        ObjectId::new().to_hex()
    }
}

/// Check that an id is a well-formed 24-hex-character object id.
pub fn is_valid_id(id: &str) -> bool {
    ObjectId::parse_str(id).is_ok()
}
