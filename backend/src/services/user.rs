//! User service for registration and login
//!
//! # Performance Optimizations
//!
//! - Password hashing/verification runs on blocking thread pool
//! - JWT service is passed by reference (pre-computed keys)

use crate::auth::{JwtService, PasswordService};
use crate::error::{ApiError, ApiResult};
use crate::repositories::{StoreError, UserStore};
use job_board_shared::{messages, CastError, LoginRequest, NewUser, RegisterRequest, StatusResponse};
use tracing::{info, warn};

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// An email that is already taken is a body-level failure, whether it is
    /// caught by the lookup or by the store's uniqueness check.
    pub async fn register(users: &dyn UserStore, req: RegisterRequest) -> ApiResult<StatusResponse> {
        let email = req.email.clone().ok_or(CastError::Missing("email"))?;
        let mobile = req.mobile_number()?;

        if users.find_by_email(&email).await?.is_some() {
            info!(%email, "Registration rejected: email already registered");
            return Err(ApiError::Failed(messages::USER_EXISTS));
        }

        let password = req.password.ok_or(CastError::Missing("password"))?;
        let password_hash = PasswordService::hash_async(password)
            .await
            .map_err(ApiError::Internal)?;

        let new_user = NewUser {
            name: req.name.unwrap_or_default(),
            email,
            mobile,
            password_hash,
        };

        let user = match users.create(new_user).await {
            Ok(user) => user,
            Err(StoreError::Conflict(detail)) => {
                info!(%detail, "Registration lost a race on email uniqueness");
                return Err(ApiError::Failed(messages::USER_EXISTS));
            }
            Err(e) => return Err(e.into()),
        };

        info!(user_id = %user.id, "User registered");
        Ok(StatusResponse::success(messages::USER_CREATED).user_name(user.name))
    }

    /// Login with email and password
    ///
    /// An unknown email and a wrong password get the same response.
    pub async fn login(
        users: &dyn UserStore,
        jwt_service: &JwtService,
        req: LoginRequest,
    ) -> ApiResult<StatusResponse> {
        let email = req.email.ok_or(CastError::Missing("email"))?;
        let password = req.password.ok_or(CastError::Missing("password"))?;

        let user = users
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::Failed(messages::INCORRECT_CREDENTIALS))?;

        let valid = PasswordService::verify_async(password, user.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            warn!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(ApiError::Failed(messages::INCORRECT_CREDENTIALS));
        }

        let token = jwt_service.issue(&user.email).map_err(ApiError::Internal)?;

        info!(user_id = %user.id, "User logged in");
        Ok(StatusResponse::success(messages::LOGGED_IN)
            .user_name(user.name)
            .jwt_token(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryUserStore;
    use job_board_shared::NumberInput;

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: Some("Asha".to_string()),
            email: Some(email.to_string()),
            mobile: Some(NumberInput::Number(9876543210.0)),
            password: Some(password.to_string()),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_stores_hashed_password() {
        let store = InMemoryUserStore::new();
        let response = UserService::register(&store, register_request("a@example.com", "pw-123"))
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(response.user_name.as_deref(), Some("Asha"));

        let user = store.find_by_email("a@example.com").await.unwrap().unwrap();
        assert_ne!(user.password, "pw-123");
        assert!(PasswordService::verify("pw-123", &user.password).unwrap());
        assert_eq!(user.mobile, Some(9876543210));
    }

    #[tokio::test]
    async fn test_register_twice_keeps_one_record() {
        let store = InMemoryUserStore::new();
        UserService::register(&store, register_request("dup@example.com", "pw"))
            .await
            .unwrap();

        let err = UserService::register(&store, register_request("dup@example.com", "other"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Failed(m) if m == messages::USER_EXISTS));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_register_without_password_is_input_error() {
        let store = InMemoryUserStore::new();
        let mut req = register_request("nopw@example.com", "x");
        req.password = None;

        let err = UserService::register(&store, req).await.unwrap_err();
        assert!(matches!(err, ApiError::Input(CastError::Missing("password"))));
        assert_eq!(store.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let store = InMemoryUserStore::new();
        let jwt = JwtService::new("test-secret", 60);
        UserService::register(&store, register_request("login@example.com", "pw-123"))
            .await
            .unwrap();

        let response = UserService::login(&store, &jwt, login_request("login@example.com", "pw-123"))
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(response.message, messages::LOGGED_IN);
        let claims = jwt.verify(response.jwt_token.as_deref().unwrap()).unwrap();
        assert_eq!(claims.email, "login@example.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password_matches_unknown_user() {
        let store = InMemoryUserStore::new();
        let jwt = JwtService::new("test-secret", 60);
        UserService::register(&store, register_request("wp@example.com", "right"))
            .await
            .unwrap();

        let wrong = UserService::login(&store, &jwt, login_request("wp@example.com", "wrong"))
            .await
            .unwrap_err();
        let unknown = UserService::login(&store, &jwt, login_request("nobody@example.com", "right"))
            .await
            .unwrap_err();

        assert!(matches!(wrong, ApiError::Failed(m) if m == messages::INCORRECT_CREDENTIALS));
        assert!(matches!(unknown, ApiError::Failed(m) if m == messages::INCORRECT_CREDENTIALS));
    }
}
