use serde::{Deserialize, Serialize};

/// Hard upper bound on the number of instances generated from a single
/// recurring event. The caller is expected to reject counts outside of
/// `[1, MAX_OCCURRENCES]` before they reach the expander, which only
/// enforces the upper bound.
pub const MAX_OCCURRENCES: u32 = 100;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    pub freq: RecurrenceFrequency,
    /// Number of instances to generate, `1..=MAX_OCCURRENCES`
    pub count: Option<u32>,
    /// Inclusive upper bound on instance start timestamps, in millis
    pub until: Option<i64>,
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self {
            freq: RecurrenceFrequency::Daily,
            count: None,
            until: None,
        }
    }
}

impl RecurrenceRule {
    pub fn is_valid(&self, start_ts: i64) -> bool {
        if let Some(count) = self.count {
            if count < 1 || count > MAX_OCCURRENCES {
                return false;
            }
        }
        if let Some(until) = self.until {
            if until < start_ts || until > crate::event::TemplateEvent::get_max_timestamp() {
                return false;
            }
        }
        true
    }
}
