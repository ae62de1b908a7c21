use super::ITemplateEventRepo;
use crate::repos::shared::inmemory_repo::*;
use almanac_domain::{TemplateEvent, ID};

pub struct InMemoryTemplateEventRepo {
    template_events: std::sync::Mutex<Vec<TemplateEvent>>,
}

impl InMemoryTemplateEventRepo {
    pub fn new() -> Self {
        Self {
            template_events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl ITemplateEventRepo for InMemoryTemplateEventRepo {
    fn insert(&self, event: &TemplateEvent) -> anyhow::Result<()> {
        insert(event, &self.template_events);
        Ok(())
    }

    fn save(&self, event: &TemplateEvent) -> anyhow::Result<()> {
        save(event, &self.template_events);
        Ok(())
    }

    fn find(&self, event_id: &ID) -> Option<TemplateEvent> {
        find(event_id, &self.template_events)
    }

    fn list(&self) -> Vec<TemplateEvent> {
        all(&self.template_events)
    }

    fn delete(&self, event_id: &ID) -> Option<TemplateEvent> {
        delete(event_id, &self.template_events)
    }
}
