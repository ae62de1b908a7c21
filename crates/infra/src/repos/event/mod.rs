mod inmemory;

use almanac_domain::{TemplateEvent, ID};
pub use inmemory::InMemoryTemplateEventRepo;

pub trait ITemplateEventRepo: Send + Sync {
    fn insert(&self, event: &TemplateEvent) -> anyhow::Result<()>;
    fn save(&self, event: &TemplateEvent) -> anyhow::Result<()>;
    fn find(&self, event_id: &ID) -> Option<TemplateEvent>;
    fn list(&self) -> Vec<TemplateEvent>;
    fn delete(&self, event_id: &ID) -> Option<TemplateEvent>;
}
