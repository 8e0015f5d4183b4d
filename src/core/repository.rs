use std::collections::HashMap;
use crate::core::library::LibraryResult;

// Lookups resolve to the first stored entity whose id matches; storage keeps
// insertion order.
pub trait Repository<Entity> {
    // create an entity
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // exact match on every field named in the predicate
    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<Entity>>;

    fn count(&self) -> usize;
}

// FieldAccess lets in-memory repositories evaluate query predicates by name.
pub trait FieldAccess {
    fn field(&self, name: &str) -> Option<String>;

    fn matches(&self, predicate: &HashMap<String, String>) -> bool {
        predicate.iter().all(|(k, v)| self.field(k.as_str()).as_deref() == Some(v.as_str()))
    }
}
