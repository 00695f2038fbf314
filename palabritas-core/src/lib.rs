pub mod errors;
pub mod hint;
pub mod models;
pub mod quiz;
pub mod repo;
pub mod scheduler;
pub mod stats;
pub mod tuner;

pub use errors::*;
pub use hint::*;
pub use models::*;
pub use quiz::*;
pub use repo::*;
pub use scheduler::*;
pub use stats::*;
pub use tuner::*;
