// State management module
// Handles the in-memory entity store and its records

pub mod app_state;
pub mod models;

pub use app_state::{AppState, SharedState};
pub use models::{
    Employee, EmployeeId, EmployeeUpdate, LoginRequest, Manager, ManagerId, NewEmployee,
    NewManager,
};
