mod inmemory;

use crate::repos::shared::repo::DeleteResult;
use almanac_domain::{EventInstance, ID};
pub use inmemory::InMemoryEventInstanceRepo;

pub trait IEventInstanceRepo: Send + Sync {
    fn save_instances(&self, instances: &[EventInstance]) -> anyhow::Result<()>;
    fn find_by_template(&self, template_id: &ID) -> Vec<EventInstance>;
    /// Instances overlapping the `[start_ts, end_ts]` span
    fn find_in_span(&self, start_ts: i64, end_ts: i64) -> Vec<EventInstance>;
    fn delete_by_template(&self, template_id: &ID) -> DeleteResult;
}
