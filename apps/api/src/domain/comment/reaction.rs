use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// A reader's stance on a comment, tracked on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, Default)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Reaction {
    Like,
    Dislike,
    #[default]
    Neutral,
}

impl Reaction {
    pub const ALL: [Reaction; 3] = [Reaction::Like, Reaction::Dislike, Reaction::Neutral];

    /// Contribution of this state to a comment's `likes` counter.
    fn weight(self) -> i32 {
        match self {
            Reaction::Like => 1,
            Reaction::Dislike => -1,
            Reaction::Neutral => 0,
        }
    }

    /// Counter adjustment for moving from `previous` to `next`.
    ///
    /// | previous → next | delta |
    /// |---|---|
    /// | neutral → like | +1 |
    /// | neutral → dislike | −1 |
    /// | dislike → like | +2 |
    /// | like → dislike | −2 |
    /// | like → neutral | −1 |
    /// | dislike → neutral | +1 |
    /// | unchanged | 0 |
    pub fn transition_delta(previous: Reaction, next: Reaction) -> i32 {
        next.weight() - previous.weight()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Reaction::Like => "like",
            Reaction::Dislike => "dislike",
            Reaction::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
