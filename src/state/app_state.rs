//! Application state management
//!
//! Holds the manager and employee collections shared by all handlers.

use super::models::{Employee, EmployeeId, EmployeeUpdate, Manager, ManagerId};
use crate::services::{CredentialError, CredentialService};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Store shared across request handlers
pub type SharedState = Arc<RwLock<AppState>>;

/// Sample managers: (email, password, full name)
const SEED_MANAGERS: [(&str, &str, &str); 2] = [
    ("manager1@example.com", "hashedpassword1", "Manager One"),
    ("manager2@example.com", "hashedpassword2", "Manager Two"),
];

/// Sample employees: (email, password, full name, index into `SEED_MANAGERS`)
const SEED_EMPLOYEES: [(&str, &str, &str, usize); 3] = [
    ("employee1@example.com", "hashedpassword3", "Employee One", 0),
    ("employee2@example.com", "hashedpassword4", "Employee Two", 0),
    ("employee3@example.com", "hashedpassword5", "Employee Three", 1),
];

/// Main application state
/// Authoritative in-memory collections of managers and employees
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registered managers, in insertion order
    managers: Vec<Manager>,
    /// Employees, in insertion order
    employees: Vec<Employee>,
    /// Password hashing used by register, create and login
    credentials: CredentialService,
}

impl AppState {
    /// Create an empty store
    pub fn new(credentials: CredentialService) -> Self {
        Self {
            managers: Vec::new(),
            employees: Vec::new(),
            credentials,
        }
    }

    /// Create a store holding the sample managers and employees
    pub fn seeded(credentials: CredentialService) -> Result<Self, CredentialError> {
        let mut state = Self::new(credentials);

        let mut manager_ids = Vec::with_capacity(SEED_MANAGERS.len());
        for (email, password, full_name) in SEED_MANAGERS {
            let hash = state.credentials.hash_password(password)?;
            let manager = Manager::new(email.to_string(), hash, full_name.to_string());
            manager_ids.push(manager.id);
            state.add_manager(manager);
        }

        for (email, password, full_name, manager) in SEED_EMPLOYEES {
            let hash = state.credentials.hash_password(password)?;
            state.add_employee(Employee::new(
                email.to_string(),
                hash,
                full_name.to_string(),
                manager_ids[manager],
            ));
        }

        Ok(state)
    }

    /// Password hashing service
    pub fn credentials(&self) -> &CredentialService {
        &self.credentials
    }

    /// All managers
    pub fn managers(&self) -> &[Manager] {
        &self.managers
    }

    /// Add a manager to the store
    pub fn add_manager(&mut self, manager: Manager) {
        self.managers.push(manager);
    }

    /// Whether a manager with this id exists
    pub fn manager_exists(&self, id: &ManagerId) -> bool {
        self.managers.iter().any(|m| m.id == *id)
    }

    /// First manager whose email matches, ignoring case
    pub fn find_manager_by_email(&self, email: &str) -> Option<&Manager> {
        self.managers.iter().find(|m| m.has_email(email))
    }

    /// All employees
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Add an employee to the store
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Add an employee only if its manager exists
    /// Returns false (and leaves the store unchanged) for a dangling manager id
    pub fn try_add_employee(&mut self, employee: Employee) -> bool {
        if !self.manager_exists(&employee.manager_id) {
            return false;
        }
        self.add_employee(employee);
        true
    }

    /// Get an employee by ID
    pub fn find_employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == *id)
    }

    /// Employees reporting to the given manager
    pub fn employees_by_manager(&self, manager_id: &ManagerId) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.manager_id == *manager_id)
            .collect()
    }

    /// Employees whose full name contains `query`, ignoring case
    pub fn search_employees(&self, query: &str) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.name_contains(query))
            .collect()
    }

    /// Overwrite an employee in place
    /// Returns the updated employee if it existed
    pub fn update_employee(
        &mut self,
        id: &EmployeeId,
        update: EmployeeUpdate,
    ) -> Option<&Employee> {
        let employee = self.employees.iter_mut().find(|e| e.id == *id)?;
        employee.apply_update(update);
        Some(&*employee)
    }

    /// Remove an employee from the store
    /// Returns the removed employee if it existed
    pub fn remove_employee(&mut self, id: &EmployeeId) -> Option<Employee> {
        let index = self.employees.iter().position(|e| e.id == *id)?;
        Some(self.employees.remove(index))
    }
}
