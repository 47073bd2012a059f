pub mod role_guard;

pub use role_guard::RequireAuth;
