// handlers/mod.rs - 3-Tier Handler Architecture
//
// Public (no auth) → Protected (RequireAuth) → Elevated (RequireAuth + RequireAdmin)
//
// The tier a handler lives in decides which guard layers the route table
// wraps it in (see server.rs).
pub mod elevated;
pub mod extract;
pub mod health;
pub mod protected;
pub mod public;
pub mod utils;
