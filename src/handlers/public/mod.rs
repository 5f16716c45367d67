// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition and read-only lookups. Nothing in this tier sees an
// authenticated caller.
//
// Security Level: None
// Route Prefix: /api/users
// Middleware: None

pub mod register; // POST /api/users/register - create account, get token
pub mod seed;     // GET  /api/users/seed     - load demo accounts
pub mod signin;   // POST /api/users/signin   - authenticate, get token
pub mod user_get; // GET  /api/users/:id      - show one record

pub use register::register_post;
pub use seed::seed_get;
pub use signin::signin_post;
pub use user_get::user_get;
