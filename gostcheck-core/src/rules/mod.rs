// Main rules module - delegates to semantic sub-modules
// This file coordinates the rule system but actual implementations are in:
// - engine.rs: Validator trait and the ValidationEngine registry
// - title_page.rs: Title page blocks (organization, metadata, stamps, type, place/year)
// - executor_list.rs: List of executors section or its title page fallback
// - messages.rs: Finding message templates

pub mod engine;
pub mod executor_list;
pub mod messages;
pub mod title_page;

pub use engine::{ValidationEngine, Validator};
pub use executor_list::ExecutorListValidator;
pub use title_page::TitlePageValidator;
