use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Rendered-message bookkeeping for an injected course-selection group.
/// Those groups have no `RoleGroup` row, so the message id lives here,
/// keyed by (channel, academic year).
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CoursePanel {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub channel_id: u64,
    pub year: u32,
    pub message_id: u64,
}
