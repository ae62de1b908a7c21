use chrono_tz::{Tz, UTC};

/// Display settings shared by recurrence expansion and view bucketing.
/// Weeks always start on Monday (ISO), so the only tweakable setting is
/// the timezone used to turn instants into calendar dates.
#[derive(Debug, Clone)]
pub struct CalendarSettings {
    pub timezone: Tz,
}

impl CalendarSettings {
    pub fn set_timezone(&mut self, timezone: &str) -> bool {
        match timezone.parse::<Tz>() {
            Ok(tzid) => {
                self.timezone = tzid;
                true
            }
            Err(_) => false,
        }
    }
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self { timezone: UTC }
    }
}
