//! Employee API handlers
//!
//! Contains HTTP request handlers for employee CRUD operations and name search.

use super::utils::{json_body, path_param, query_params, require_query};
use crate::error::AppError;
use crate::state::{Employee, EmployeeId, EmployeeUpdate, ManagerId, NewEmployee, SharedState};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Response carrying a single employee
#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    /// Human-readable message
    pub message: String,
    /// The employee that was created, updated or deleted
    pub employee: Employee,
}

impl EmployeeResponse {
    fn new(message: &str, employee: Employee) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
            employee,
        })
    }
}

/// Query parameters for name search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring to look for in employee names
    pub name: Option<String>,
}

/// GET /api/employee/all - List all employees
pub async fn list_employees(State(state): State<SharedState>) -> Json<Vec<Employee>> {
    let state = state.read().await;
    Json(state.employees().to_vec())
}

/// POST /api/employee/create - Create an employee under an existing manager
pub async fn create_employee(
    State(state): State<SharedState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let request = json_body(payload)?;
    request.validate().map_err(AppError::Validation)?;

    let credentials = state.read().await.credentials().clone();
    let password_hash = credentials.hash_password(&request.password)?;
    let employee = Employee::new(
        request.email,
        password_hash,
        request.full_name,
        request.manager_id,
    );

    let mut state = state.write().await;
    if !state.try_add_employee(employee.clone()) {
        warn!(manager_id = %employee.manager_id, "Employee rejected: unknown manager");
        return Err(AppError::InvalidReference("Manager not found.".to_string()));
    }

    info!(employee_id = %employee.id, manager_id = %employee.manager_id, "Employee created");
    Ok(EmployeeResponse::new("Employee created successfully!", employee))
}

/// GET /api/employee/manager/:id - List employees reporting to a manager
pub async fn list_employees_by_manager(
    State(state): State<SharedState>,
    manager_id: Result<Path<ManagerId>, PathRejection>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let manager_id = path_param(manager_id)?;
    let state = state.read().await;
    let employees: Vec<Employee> = state
        .employees_by_manager(&manager_id)
        .into_iter()
        .cloned()
        .collect();

    if employees.is_empty() {
        return Err(AppError::NotFound(
            "No employees found for this manager.".to_string(),
        ));
    }

    Ok(Json(employees))
}

/// PUT /api/employee/update/:id - Overwrite an employee's email, name and manager
pub async fn update_employee(
    State(state): State<SharedState>,
    id: Result<Path<EmployeeId>, PathRejection>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let id = path_param(id)?;
    let update = json_body(payload)?;

    let mut state = state.write().await;
    let employee = state
        .update_employee(&id, update)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Employee not found.".to_string()))?;

    info!(employee_id = %id, "Employee updated");
    Ok(EmployeeResponse::new("Employee updated successfully!", employee))
}

/// DELETE /api/employee/delete/:id - Delete an employee
pub async fn delete_employee(
    State(state): State<SharedState>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let id = path_param(id)?;
    let mut state = state.write().await;
    let employee = state
        .remove_employee(&id)
        .ok_or_else(|| AppError::NotFound("Employee not found.".to_string()))?;

    info!(employee_id = %id, "Employee deleted");
    Ok(EmployeeResponse::new("Employee deleted successfully!", employee))
}

/// GET /api/employee/search?name= - Case-insensitive name search
pub async fn search_employees(
    State(state): State<SharedState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let params = query_params(params)?;
    let query = require_query(params.name.as_deref())?;

    let state = state.read().await;
    let matches: Vec<Employee> = state
        .search_employees(query)
        .into_iter()
        .cloned()
        .collect();

    if matches.is_empty() {
        return Err(AppError::NotFound(
            "No employees found matching the search criteria.".to_string(),
        ));
    }

    Ok(Json(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CredentialsConfig;
    use crate::services::CredentialService;
    use crate::state::AppState;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    fn create_test_state() -> SharedState {
        let credentials = CredentialService::new(CredentialsConfig {
            memory_kib: 64,
            iterations: 1,
        })
        .unwrap();
        Arc::new(RwLock::new(AppState::seeded(credentials).unwrap()))
    }

    async fn first_manager(state: &SharedState) -> ManagerId {
        state.read().await.managers()[0].id
    }

    fn search(name: Option<&str>) -> Result<Query<SearchParams>, QueryRejection> {
        Ok(Query(SearchParams {
            name: name.map(str::to_string),
        }))
    }

    #[tokio::test]
    async fn test_list_employees_seeded() {
        let state = create_test_state();
        let Json(employees) = list_employees(State(state)).await;
        assert_eq!(employees.len(), 3);
    }

    #[tokio::test]
    async fn test_create_employee() {
        let state = create_test_state();
        let manager_id = first_manager(&state).await;
        let request = NewEmployee {
            email: "new@example.com".to_string(),
            password: "pw".to_string(),
            full_name: "New Hire".to_string(),
            manager_id,
        };

        let response = create_employee(State(state.clone()), Ok(Json(request)))
            .await
            .unwrap();
        assert_eq!(response.employee.full_name, "New Hire");
        assert_eq!(response.employee.manager_id, manager_id);
        assert_eq!(state.read().await.employees().len(), 4);
    }

    #[tokio::test]
    async fn test_create_employee_unknown_manager_leaves_store_unchanged() {
        let state = create_test_state();
        let request = NewEmployee {
            full_name: "Orphan".to_string(),
            manager_id: Uuid::new_v4(),
            ..Default::default()
        };

        let result = create_employee(State(state.clone()), Ok(Json(request))).await;
        assert!(matches!(result, Err(AppError::InvalidReference(_))));
        assert_eq!(state.read().await.employees().len(), 3);
    }

    #[tokio::test]
    async fn test_create_employee_requires_name() {
        let state = create_test_state();
        let manager_id = first_manager(&state).await;
        let request = NewEmployee {
            manager_id,
            ..Default::default()
        };

        let result = create_employee(State(state), Ok(Json(request))).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_by_manager_without_employees() {
        let state = create_test_state();
        let lonely = crate::state::Manager::new(
            "lonely@example.com".to_string(),
            String::new(),
            "Lonely".to_string(),
        );
        let lonely_id = lonely.id;
        state.write().await.add_manager(lonely);

        let result = list_employees_by_manager(State(state.clone()), Ok(Path(lonely_id))).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let result = list_employees_by_manager(State(state), Ok(Path(Uuid::new_v4()))).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_employee_not_found() {
        let state = create_test_state();
        let result = update_employee(
            State(state),
            Ok(Path(Uuid::new_v4())),
            Ok(Json(EmployeeUpdate::default())),
        )
        .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_employee_does_not_check_manager() {
        let state = create_test_state();
        let id = state.read().await.employees()[0].id;
        let dangling = Uuid::new_v4();
        let update = EmployeeUpdate {
            email: "moved@example.com".to_string(),
            full_name: "Moved".to_string(),
            manager_id: dangling,
        };

        let response = update_employee(State(state), Ok(Path(id)), Ok(Json(update)))
            .await
            .unwrap();
        assert_eq!(response.employee.manager_id, dangling);
        assert_eq!(response.message, "Employee updated successfully!");
    }

    #[tokio::test]
    async fn test_delete_employee_twice() {
        let state = create_test_state();
        let id = state.read().await.employees()[1].id;

        let response = delete_employee(State(state.clone()), Ok(Path(id))).await.unwrap();
        assert_eq!(response.employee.full_name, "Employee Two");

        let result = delete_employee(State(state), Ok(Path(id))).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_employees() {
        let state = create_test_state();
        let Json(found) = search_employees(State(state.clone()), search(Some("EMPLOYEE")))
            .await
            .unwrap();
        assert_eq!(found.len(), 3);

        let result = search_employees(State(state.clone()), search(Some("zzz"))).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let result = search_employees(State(state.clone()), search(Some(" "))).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = search_employees(State(state), search(None)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
