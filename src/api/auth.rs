//! Auth Endpoints
//!
//! Login and customer registration. Both are called without a session.

use reqwest::{Method, StatusCode};

use super::{ApiClient, ApiError};
use crate::models::{Customer, CustomerRequest, LoginRequest, LoginResponse};

const LOGIN_REJECTED: &str = "E-mail ou senha incorretos!";
const LOGIN_FAILED: &str = "Ocorreu um erro durante o login.";
const REGISTER_FAILED: &str = "Ocorreu um erro durante o cadastro.";

/// Login failures never echo the server body: bad credentials and
/// everything else get fixed messages
pub(crate) fn login_error(status: StatusCode) -> ApiError {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => ApiError::Server(LOGIN_REJECTED.to_string()),
        _ => ApiError::Server(LOGIN_FAILED.to_string()),
    }
}

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .request(Method::POST, "/api/auth/login")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                web_sys::console::error_1(&format!("[API] Login request failed: {}", e).into());
                ApiError::Network(LOGIN_FAILED.to_string())
            })?;

        if !response.status().is_success() {
            return Err(login_error(response.status()));
        }
        Self::decode(response, LOGIN_FAILED).await
    }

    pub async fn register(&self, request: &CustomerRequest) -> Result<Customer, ApiError> {
        self.send_json(Method::POST, "/api/customer", request, REGISTER_FAILED).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_messages() {
        assert_eq!(login_error(StatusCode::UNAUTHORIZED).message(), LOGIN_REJECTED);
        assert_eq!(login_error(StatusCode::BAD_REQUEST).message(), LOGIN_REJECTED);
        assert_eq!(login_error(StatusCode::INTERNAL_SERVER_ERROR).message(), LOGIN_FAILED);
    }
}
