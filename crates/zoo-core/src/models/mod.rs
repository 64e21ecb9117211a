//! Domain models for the zoo.

mod animal;
mod enclosure;
mod environment;
mod health_record;
mod ids;

pub use animal::*;
pub use enclosure::*;
pub use environment::*;
pub use health_record::*;
pub use ids::*;
