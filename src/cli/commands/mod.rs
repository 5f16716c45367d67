pub mod hash_password;
pub mod seed;
pub mod serve;
