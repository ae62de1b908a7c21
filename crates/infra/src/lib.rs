mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{
    DeleteResult, ICountdownRepo, IEventInstanceRepo, ITemplateEventRepo, ITodoRepo, Repos,
};
use std::sync::Arc;
pub use system::{FixedSys, ISys, RealSys};

#[derive(Clone)]
pub struct AlmanacContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> AlmanacContext {
    AlmanacContext {
        repos: Repos::create_inmemory(),
        config: Config::new(),
        sys: Arc::new(RealSys {}),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use almanac_domain::{EventInstance, TemplateEvent, ID};

    fn template_event(name: &str) -> TemplateEvent {
        TemplateEvent {
            id: Default::default(),
            name: name.into(),
            start_ts: Some(0),
            end_ts: None,
            recurrence: None,
            created: 0,
            updated: 0,
        }
    }

    #[test]
    fn template_event_repo_roundtrip() {
        let ctx = setup_context();
        let mut event = template_event("Standup");
        ctx.repos.events.insert(&event).unwrap();

        assert_eq!(ctx.repos.events.list().len(), 1);
        assert_eq!(
            ctx.repos.events.find(&event.id).unwrap().name,
            "Standup".to_string()
        );

        event.name = "Daily standup".into();
        ctx.repos.events.save(&event).unwrap();
        assert_eq!(
            ctx.repos.events.find(&event.id).unwrap().name,
            "Daily standup".to_string()
        );

        assert!(ctx.repos.events.delete(&event.id).is_some());
        assert!(ctx.repos.events.find(&event.id).is_none());
    }

    #[test]
    fn instance_repo_deletes_by_template() {
        let ctx = setup_context();
        let template_id = ID::new();
        let other_template_id = ID::new();

        let instances = (0..4)
            .map(|i| EventInstance::derived(&template_id, i, i as i64 * 1000, i as i64 * 1000))
            .collect::<Vec<_>>();
        ctx.repos.event_instances.save_instances(&instances).unwrap();
        ctx.repos
            .event_instances
            .save_instances(&[EventInstance::derived(&other_template_id, 0, 0, 0)])
            .unwrap();

        assert_eq!(
            ctx.repos
                .event_instances
                .find_by_template(&template_id)
                .len(),
            4
        );

        let res = ctx.repos.event_instances.delete_by_template(&template_id);
        assert_eq!(res.deleted_count, 4);
        assert!(ctx
            .repos
            .event_instances
            .find_by_template(&template_id)
            .is_empty());
        assert_eq!(
            ctx.repos
                .event_instances
                .find_by_template(&other_template_id)
                .len(),
            1
        );
    }

    #[test]
    fn instance_repo_finds_overlapping_span() {
        let ctx = setup_context();
        let template_id = ID::new();
        ctx.repos
            .event_instances
            .save_instances(&[
                EventInstance::derived(&template_id, 0, 0, 1000),
                EventInstance::derived(&template_id, 1, 5000, 6000),
                EventInstance::derived(&template_id, 2, 10000, 11000),
            ])
            .unwrap();

        let found = ctx.repos.event_instances.find_in_span(4000, 9000);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].occurrence_index, 1);
    }
}
