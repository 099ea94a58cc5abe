//! Manager API handlers
//!
//! Registration, login and listing of managers.

use super::utils::json_body;
use crate::error::AppError;
use crate::state::{LoginRequest, Manager, ManagerId, NewManager, SharedState};
use axum::{extract::rejection::JsonRejection, extract::State, response::Json};
use serde::Serialize;
use tracing::{info, warn};

/// Registration response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// Human-readable message
    pub message: String,
    /// Id assigned to the new manager
    pub manager_id: ManagerId,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Human-readable message
    pub message: String,
    /// The authenticated manager (password never included)
    pub manager: Manager,
}

/// GET /api/manager/all - List all managers
pub async fn list_managers(State(state): State<SharedState>) -> Json<Vec<Manager>> {
    let state = state.read().await;
    Json(state.managers().to_vec())
}

/// POST /api/manager/register - Register a new manager
pub async fn register_manager(
    State(state): State<SharedState>,
    payload: Result<Json<NewManager>, JsonRejection>,
) -> Result<Json<RegisterResponse>, AppError> {
    let request = json_body(payload)?;
    request.validate().map_err(AppError::Validation)?;

    let credentials = state.read().await.credentials().clone();
    let password_hash = credentials.hash_password(&request.password)?;
    let manager = Manager::new(request.email, password_hash, request.full_name);
    let manager_id = manager.id;

    state.write().await.add_manager(manager);
    info!(manager_id = %manager_id, "Manager registered");

    Ok(Json(RegisterResponse {
        message: "Manager registered successfully!".to_string(),
        manager_id,
    }))
}

/// POST /api/manager/login - Verify a manager's email and password
pub async fn login_manager(
    State(state): State<SharedState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let request = json_body(payload)?;
    request.validate().map_err(AppError::Validation)?;

    let state = state.read().await;
    let Some(manager) = state.find_manager_by_email(&request.email) else {
        warn!("Login failed: unknown email");
        return Err(AppError::Unauthorized("Manager not found.".to_string()));
    };

    if !state
        .credentials()
        .verify_password(&request.password, &manager.password_hash)
    {
        warn!(manager_id = %manager.id, "Login failed: incorrect password");
        return Err(AppError::Unauthorized("Incorrect password.".to_string()));
    }

    info!(manager_id = %manager.id, "Manager logged in");
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        manager: manager.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CredentialsConfig;
    use crate::services::CredentialService;
    use crate::state::AppState;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn create_test_state() -> SharedState {
        let credentials = CredentialService::new(CredentialsConfig {
            memory_kib: 64,
            iterations: 1,
        })
        .unwrap();
        Arc::new(RwLock::new(AppState::seeded(credentials).unwrap()))
    }

    fn registration(password: &str, email: &str) -> NewManager {
        NewManager {
            email: email.to_string(),
            password: password.to_string(),
            full_name: "New Manager".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_manager() {
        let state = create_test_state();
        let result =
            register_manager(State(state.clone()), Ok(Json(registration("Abcdef", "a@b.com"))))
                .await;
        let response = result.unwrap();
        assert_eq!(response.message, "Manager registered successfully!");

        let Json(managers) = list_managers(State(state)).await;
        assert_eq!(managers.len(), 3);
        assert_eq!(managers[2].id, response.manager_id);
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let state = create_test_state();
        let result =
            register_manager(State(state.clone()), Ok(Json(registration("abc12", "a@b.com"))))
                .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(state.read().await.managers().len(), 2);
    }

    #[tokio::test]
    async fn test_register_rejects_bad_email() {
        let state = create_test_state();
        let result = register_manager(
            State(state),
            Ok(Json(registration("Abcdef", "not-an-email"))),
        )
        .await;
        match result {
            Err(AppError::Validation(message)) => assert_eq!(message, "Invalid email format."),
            other => panic!("Expected Validation error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_ignores_email_case() {
        let state = create_test_state();
        let request = LoginRequest {
            email: "Manager1@Example.com".to_string(),
            password: "hashedpassword1".to_string(),
        };
        let response = login_manager(State(state), Ok(Json(request))).await.unwrap();
        assert_eq!(response.manager.full_name, "Manager One");
    }

    #[tokio::test]
    async fn test_login_failures() {
        let state = create_test_state();
        let wrong_password = LoginRequest {
            email: "manager1@example.com".to_string(),
            password: "wrong".to_string(),
        };
        match login_manager(State(state.clone()), Ok(Json(wrong_password))).await {
            Err(AppError::Unauthorized(message)) => assert_eq!(message, "Incorrect password."),
            other => panic!("Expected Unauthorized error, got: {:?}", other.map(|_| ())),
        }

        let unknown = LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "whatever".to_string(),
        };
        match login_manager(State(state.clone()), Ok(Json(unknown))).await {
            Err(AppError::Unauthorized(message)) => assert_eq!(message, "Manager not found."),
            other => panic!("Expected Unauthorized error, got: {:?}", other.map(|_| ())),
        }

        let blank = LoginRequest::default();
        let result = login_manager(State(state), Ok(Json(blank))).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
