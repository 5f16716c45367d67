// handlers/elevated/mod.rs - Elevated handlers (administrator token required)
//
// Security Level: RequireAuth + RequireAdmin
// Route Prefix: /api/users
// Middleware: require_auth, then require_admin

pub mod user_delete; // DELETE /api/users/:id - remove a record
pub mod user_put;    // PUT    /api/users/:id - edit any record
pub mod users_list;  // GET    /api/users     - list every record

pub use user_delete::user_delete;
pub use user_put::user_put;
pub use users_list::users_list;
