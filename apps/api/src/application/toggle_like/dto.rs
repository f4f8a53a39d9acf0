use crate::domain::comment::{entity::Comment, reaction::Reaction};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Client-reported transition. Missing fields fall back to `like` from `neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ToggleLikeRequest {
    pub action: Reaction,
    pub previous_action: Reaction,
}

impl Default for ToggleLikeRequest {
    fn default() -> Self {
        Self {
            action: Reaction::Like,
            previous_action: Reaction::Neutral,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToggleLikeResponse {
    pub comment: Comment,
    pub user_action: Reaction,
    pub likes: i32,
}
