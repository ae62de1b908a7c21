use almanac_domain::CalendarSettings;
use chrono_tz::Tz;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Timezone used to turn instants into calendar dates when expanding
    /// and bucketing. Events keep their instants; this only affects which
    /// cell a given instant falls into.
    pub timezone: Tz,
}

impl Config {
    pub fn new() -> Self {
        let default_timezone = chrono_tz::UTC;
        let timezone = match std::env::var("ALMANAC_TIMEZONE") {
            Ok(tzid) => match tzid.parse::<Tz>() {
                Ok(timezone) => timezone,
                Err(_) => {
                    warn!(
                        "The given ALMANAC_TIMEZONE: {} is not a valid IANA timezone, falling back to UTC.",
                        tzid
                    );
                    default_timezone
                }
            },
            Err(_) => default_timezone,
        };

        Self { timezone }
    }

    pub fn calendar_settings(&self) -> CalendarSettings {
        CalendarSettings {
            timezone: self.timezone,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
