use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Key/value row of the config store. Keys are scoped by prefix, e.g.
/// `tourist:role_id`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ConfigEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub key: String,
    pub value: String,
}
