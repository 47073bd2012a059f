pub mod auth;
pub mod payroll;

pub use auth::AuthService;
