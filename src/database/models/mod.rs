pub mod admin;
pub mod attendance;
pub mod employee;
pub mod leave;
pub(crate) mod macros;
pub mod payroll;

pub use admin::{Admin, AdminInfo};
pub use attendance::{AttendanceInput, AttendanceWithName};
pub use employee::{CreateEmployeeInput, Employee, EmployeeInfo, UpdateEmployeeInput};
pub use leave::{
    CreateLeaveInput, LeaveRequest, LeaveRequestWithName, LeaveStatus, PendingLeaveRequest,
    UpdateLeaveStatusInput,
};
pub use payroll::{CreatePayrollInput, PayrollRecord};
