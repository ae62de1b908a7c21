use super::IEventInstanceRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use almanac_domain::{EventInstance, ID};

pub struct InMemoryEventInstanceRepo {
    event_instances: std::sync::Mutex<Vec<EventInstance>>,
}

impl InMemoryEventInstanceRepo {
    pub fn new() -> Self {
        Self {
            event_instances: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl IEventInstanceRepo for InMemoryEventInstanceRepo {
    fn save_instances(&self, instances: &[EventInstance]) -> anyhow::Result<()> {
        insert_many(instances, &self.event_instances);
        Ok(())
    }

    fn find_by_template(&self, template_id: &ID) -> Vec<EventInstance> {
        find_by(&self.event_instances, |instance| {
            instance.template_id == *template_id
        })
    }

    fn find_in_span(&self, start_ts: i64, end_ts: i64) -> Vec<EventInstance> {
        find_by(&self.event_instances, |instance| {
            start_ts <= instance.end_ts && end_ts >= instance.start_ts
        })
    }

    fn delete_by_template(&self, template_id: &ID) -> DeleteResult {
        delete_by(&self.event_instances, |instance| {
            instance.template_id == *template_id
        })
    }
}
