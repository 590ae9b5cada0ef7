pub mod registry;
pub mod types;

pub use registry::{next_id, PrizeUpdate, Registry};
pub use types::{default_prizes, Prize};
