//! Display names bound to each mark for a session.

use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Names shown for X and O. Fixed for the life of a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerNames {
    /// Name bound to X.
    x: String,
    /// Name bound to O.
    o: String,
}

impl PlayerNames {
    /// Binds names to marks. Surrounding whitespace is trimmed and blank
    /// names fall back to "Player X" / "Player O".
    #[instrument(skip(x, o))]
    pub fn new(x: impl AsRef<str>, o: impl AsRef<str>) -> Self {
        Self {
            x: normalize(x.as_ref(), Mark::X),
            o: normalize(o.as_ref(), Mark::O),
        }
    }

    /// Name bound to `mark`.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new("", "")
    }
}

fn normalize(name: &str, mark: Mark) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        default_name(mark)
    } else {
        trimmed.to_string()
    }
}

/// Fallback name for a mark.
pub fn default_name(mark: Mark) -> String {
    format!("Player {mark}")
}
