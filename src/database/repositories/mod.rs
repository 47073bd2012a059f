pub mod admin;
pub mod attendance;
pub mod employee;
pub mod leave;
pub mod payroll;

pub use admin::AdminRepository;
pub use attendance::AttendanceRepository;
pub use employee::EmployeeRepository;
pub use leave::LeaveRepository;
pub use payroll::PayrollRepository;
