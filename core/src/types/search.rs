use crate::types::assignment::{Assignment, AssignmentStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Filters applied identically on every page of one aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AssignmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referee_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_search: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ordering {
    /// Backend field name, e.g. "game.startsAt".
    pub field: String,
    #[serde(default)]
    pub direction: OrderDirection,
}

/// The caller-supplied part of a search: filters and orderings, no paging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub filters: AssignmentFilters,
    #[serde(default)]
    pub orderings: Vec<Ordering>,
}

/// One page request as sent over the wire. Offset and limit are owned by the
/// aggregator; whatever the caller had set is overridden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(flatten)]
    pub query: SearchQuery,
    pub offset: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(query: &SearchQuery, offset: u64, limit: u64) -> Self {
        Self {
            query: query.clone(),
            offset,
            limit,
        }
    }
}

/// One page of results. Both fields may be absent on the wire: missing items
/// mean an empty page, a missing count means 0 (which disables the
/// reached-total termination check downstream).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub items: Vec<Assignment>,
    #[serde(default)]
    pub total_items_count: u64,
}
