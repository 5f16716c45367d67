pub mod user;

pub use user::{Identity, NewUser, Seller, User};
