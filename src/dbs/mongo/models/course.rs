use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A course taught in a given academic year, picked from a dedicated
/// course-selection channel. Maintained by the degree/course provisioning
/// commands; the selection engine only reads it.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Course {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub acronym: String,
    pub name: String,
    pub role_id: u64,
    pub year: u32,
    pub guild_id: u64,

    /// The course-selection channel this course is offered in.
    pub channel_id: u64,
}
