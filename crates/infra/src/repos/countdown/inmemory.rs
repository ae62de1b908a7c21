use super::ICountdownRepo;
use crate::repos::shared::inmemory_repo::*;
use almanac_domain::{Countdown, ID};

pub struct InMemoryCountdownRepo {
    countdowns: std::sync::Mutex<Vec<Countdown>>,
}

impl InMemoryCountdownRepo {
    pub fn new() -> Self {
        Self {
            countdowns: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl ICountdownRepo for InMemoryCountdownRepo {
    fn insert(&self, countdown: &Countdown) -> anyhow::Result<()> {
        insert(countdown, &self.countdowns);
        Ok(())
    }

    fn find(&self, countdown_id: &ID) -> Option<Countdown> {
        find(countdown_id, &self.countdowns)
    }

    fn list(&self) -> Vec<Countdown> {
        all(&self.countdowns)
    }

    fn delete(&self, countdown_id: &ID) -> Option<Countdown> {
        delete(countdown_id, &self.countdowns)
    }
}
