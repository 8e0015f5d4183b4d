use std::collections::HashMap;
use serde::Serialize;
use crate::books::repository::BookRepository;
use crate::core::clock::Clock;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::session::Session;
use crate::gateway::events::EventPublisher;
use crate::users::repository::UserRepository;

/// LibraryManager owns the books, the users, the login session, the clock and
/// the event publisher. The catalog, checkout, hold, patrons and reports
/// contexts each implement their service trait on it. A failed call leaves
/// the stored state unchanged.
pub struct LibraryManager {
    pub(crate) config: Configuration,
    pub(crate) book_repository: Box<dyn BookRepository>,
    pub(crate) user_repository: Box<dyn UserRepository>,
    pub(crate) session: Session,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) events_publisher: Box<dyn EventPublisher>,
}

impl LibraryManager {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               user_repository: Box<dyn UserRepository>, clock: Box<dyn Clock>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            config: config.clone(),
            book_repository,
            user_repository,
            session: Session::new(),
            clock,
            events_publisher,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn publish<T: Serialize>(&self, name: &str, group: &str, key: &str,
                                        kind: DomainEventType, data: &T) -> LibraryResult<()> {
        let mut metadata = HashMap::from([("branch_id".to_string(), self.config.branch_id.to_string())]);
        if let Some(user) = self.session.current_user() {
            metadata.insert("user".to_string(), user.to_string());
        }
        let now = self.clock.now();
        let event = match kind {
            DomainEventType::Added => DomainEvent::added(name, group, key, &metadata, data, now)?,
            DomainEventType::Updated => DomainEvent::updated(name, group, key, &metadata, data, now)?,
            DomainEventType::Deleted => DomainEvent::deleted(name, group, key, &metadata, data, now)?,
        };
        self.events_publisher.publish(&event)
    }
}

// Rejects the call with "invalid input" when any named field is blank.
pub(crate) fn require_present(fields: &[(&str, &str)]) -> LibraryResult<()> {
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(LibraryError::validation(
                format!("invalid input: {} is required", name).as_str(), Some(name.to_string())));
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use crate::core::events::DomainEventType;
    use crate::core::library::LibraryError;
    use crate::manager::require_present;
    use crate::manager::testing::{fixture, start};

    #[test]
    fn test_should_require_present_fields() {
        assert!(require_present(&[("title", "Dune"), ("author", "Herbert")]).is_ok());
        let err = require_present(&[("title", "Dune"), ("author", "  ")]).unwrap_err();
        assert!(matches!(err, LibraryError::Validation { .. }));
        assert!(err.to_string().starts_with("invalid input"));
    }

    #[test]
    fn test_should_publish_with_metadata() {
        let (mut manager, _clock, publisher) = fixture();
        manager.session.login("alice");
        manager.publish("probe", "tests", "k", DomainEventType::Updated, &"payload").expect("should publish");
        let events = publisher.events();
        assert_eq!(1, events.len());
        assert_eq!(Some(&"alice".to_string()), events[0].metadata.get("user"));
        assert_eq!(Some(&"test".to_string()), events[0].metadata.get("branch_id"));
        assert_eq!(start(), events[0].created_at);
    }
}
