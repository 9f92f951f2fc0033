mod in_memory_interaction_repository;

pub use in_memory_interaction_repository::{
    DEFAULT_INTERACTION_CAPACITY, InMemoryInteractionRepository,
};
