// handlers/protected/mod.rs - Protected handlers (valid token required)
//
// Security Level: RequireAuth
// Route Prefix: /api/users
// Middleware: require_auth (injects AuthUser)

pub mod profile; // PUT /api/users/profile    - edit own record
pub mod vendor;  // PUT /api/users/vendor/:id - toggle seller flag

pub use profile::profile_put;
pub use vendor::vendor_put;
