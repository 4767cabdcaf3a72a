pub mod builder;
pub mod ordering_key;
pub mod placeholder;
pub mod predicate;
pub mod projection;
