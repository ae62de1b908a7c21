use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// Occurrence of a `TemplateEvent`
///
/// Instances are always regenerated in full from their template, never
/// edited in place. `template_id` is a back-reference used for lookup and
/// cascade delete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInstance {
    pub id: ID,
    pub template_id: ID,
    pub start_ts: i64,
    pub end_ts: i64,
    /// 0-based position in the generated sequence
    pub occurrence_index: u32,
}

impl EventInstance {
    pub fn derived(template_id: &ID, occurrence_index: u32, start_ts: i64, end_ts: i64) -> Self {
        Self {
            id: template_id.derive(occurrence_index),
            template_id: template_id.clone(),
            start_ts,
            end_ts,
            occurrence_index,
        }
    }

    pub fn duration_millis(&self) -> i64 {
        self.end_ts - self.start_ts
    }
}

impl Entity for EventInstance {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn derived_instance_points_back_to_template() {
        let template_id = ID::new();
        let instance = EventInstance::derived(&template_id, 2, 1000, 4000);
        assert_eq!(instance.template_id, template_id);
        assert_eq!(instance.occurrence_index, 2);
        assert_eq!(instance.duration_millis(), 3000);
        assert_ne!(instance.id, template_id);
    }

    #[test]
    fn rederiving_an_instance_keeps_its_id() {
        let template_id = ID::new();
        let first = EventInstance::derived(&template_id, 5, 0, 0);
        let second = EventInstance::derived(&template_id, 5, 9000, 9500);
        assert_eq!(first.id, second.id);
    }
}
