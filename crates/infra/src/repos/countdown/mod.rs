mod inmemory;

use almanac_domain::{Countdown, ID};
pub use inmemory::InMemoryCountdownRepo;

pub trait ICountdownRepo: Send + Sync {
    fn insert(&self, countdown: &Countdown) -> anyhow::Result<()>;
    fn find(&self, countdown_id: &ID) -> Option<Countdown>;
    fn list(&self) -> Vec<Countdown>;
    fn delete(&self, countdown_id: &ID) -> Option<Countdown>;
}
