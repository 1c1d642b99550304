use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Used until the remote settings document has resolved.
pub const DEFAULT_VALIDATION_DEADLINE_HOURS: i64 = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSettings {
    /// Hours after kickoff during which an assignment can still be validated.
    pub deadline_hours: i64,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            deadline_hours: DEFAULT_VALIDATION_DEADLINE_HOURS,
        }
    }
}

/// Async settings collaborator. Returns `None` while the remote settings
/// document has not resolved yet.
#[async_trait]
pub trait SettingsSource: Send + Sync {
    async fn validation_settings(&self) -> Option<ValidationSettings>;
}

pub async fn resolve_deadline_hours(source: &dyn SettingsSource) -> i64 {
    match source.validation_settings().await {
        Some(settings) => settings.deadline_hours,
        None => DEFAULT_VALIDATION_DEADLINE_HOURS,
    }
}
