pub mod memory;
pub mod models;
pub mod postgres;
pub mod seed;
pub mod store;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;
pub use store::{StoreError, UserStore};
