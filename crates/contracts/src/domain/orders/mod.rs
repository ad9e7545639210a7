pub mod aggregate;
pub mod cache;
pub mod events;
pub mod import;

pub use aggregate::{resolve_date, Order, OrderData};
pub use cache::OrderCache;
pub use events::OrderStreamEvent;
