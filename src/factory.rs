use crate::books::factory::create_book_repository;
use crate::core::clock::SystemClock;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::manager::LibraryManager;
use crate::users::factory::create_user_repository;

pub fn create_library_manager(config: &Configuration, via: GatewayPublisherVia) -> LibraryManager {
    LibraryManager::new(config, create_book_repository(), create_user_repository(),
                        Box::new(SystemClock), create_publisher(via))
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::factory::create_library_manager;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_create_empty_manager() {
        let manager = create_library_manager(&Configuration::new("test"), GatewayPublisherVia::Memory);
        assert_eq!("test", manager.config().branch_id.as_str());
        assert!(!manager.session().is_logged_in());
    }
}
