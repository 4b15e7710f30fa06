//! Form Validation
//!
//! Client-side schemas for the login, registration and property forms.
//! Inputs are trimmed before they are checked or sent.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{CustomerRequest, LoginRequest};

#[derive(Debug, Clone, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Formato de email inválido!"))]
    pub email: String,
    #[validate(length(min = 6, message = "Senha deve ter no mínimo 6 caracteres"))]
    pub password: String,
}

impl LoginForm {
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.trim().to_string(), password: password.trim().to_string() }
    }

    /// Validated request, or the joined violation messages
    pub fn into_request(self) -> Result<LoginRequest, String> {
        self.validate().map_err(|e| describe(&e))?;
        Ok(LoginRequest { email: self.email, password: self.password })
    }
}

#[derive(Debug, Clone, Validate)]
pub struct RegisterForm {
    #[validate(custom(function = "validate_customer_name"))]
    pub name: String,
    #[validate(email(message = "Formato de email inválido!"))]
    pub email: String,
    #[validate(length(min = 6, message = "Senha deve ter no mínimo 6 caracteres"))]
    pub password: String,
}

fn validate_customer_name(name: &str) -> Result<(), ValidationError> {
    let message = match name.chars().count() {
        0..=1 => "Nome deve ter no mínimo 2 caracteres",
        2..=100 => return Ok(()),
        _ => "Nome deve ter no máximo 100 caracteres",
    };
    Err(ValidationError::new("length").with_message(Cow::Borrowed(message)))
}

impl RegisterForm {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.trim().to_string(),
        }
    }

    pub fn into_request(self) -> Result<CustomerRequest, String> {
        self.validate().map_err(|e| describe(&e))?;
        Ok(CustomerRequest { name: self.name, email: self.email, password: self.password })
    }
}

/// One `field: message` line per violation, fields in name order
pub fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let message = err.message.as_deref().unwrap_or(err.code.as_ref());
                format!("{}: {}", field, message)
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Property name and type are both required on creation
pub fn check_new_property(name: &str, kind: &str) -> Result<(String, String), String> {
    let (name, kind) = (name.trim(), kind.trim());
    if name.is_empty() || kind.is_empty() {
        return Err("Nome e tipo da propriedade são obrigatórios".to_string());
    }
    Ok((name.to_string(), kind.to_string()))
}

pub fn check_property_name(name: &str) -> Result<String, String> {
    match name.trim() {
        "" => Err("O nome da propriedade é obrigatório".to_string()),
        trimmed => Ok(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVALID_EMAIL: &str = "Formato de email inválido!";
    const SHORT_PASSWORD: &str = "Senha deve ter no mínimo 6 caracteres";

    #[test]
    fn test_login_trims_and_accepts() {
        let request = LoginForm::new("  a@b.com ", " secret1 ").into_request().unwrap();
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.password, "secret1");
    }

    #[test]
    fn test_login_rejects_bad_email_and_short_password() {
        let err = LoginForm::new("not-an-email", "  12345  ").into_request().unwrap_err();
        assert_eq!(err, format!("email: {}\npassword: {}", INVALID_EMAIL, SHORT_PASSWORD));
    }

    #[test]
    fn test_register_name_bounds() {
        let err = RegisterForm::new(" J ", "a@b.com", "secret1").into_request().unwrap_err();
        assert_eq!(err, "name: Nome deve ter no mínimo 2 caracteres");

        let long = "x".repeat(101);
        let err = RegisterForm::new(&long, "a@b.com", "secret1").into_request().unwrap_err();
        assert_eq!(err, "name: Nome deve ter no máximo 100 caracteres");

        assert!(RegisterForm::new("Jo", "a@b.com", "secret1").into_request().is_ok());
    }

    #[test]
    fn test_property_checks() {
        assert!(check_new_property("Peso", "  ").is_err());
        assert_eq!(check_new_property(" Peso ", "Numérico").unwrap(), ("Peso".into(), "Numérico".into()));
        assert!(check_property_name("   ").is_err());
        assert_eq!(check_property_name(" Destino").unwrap(), "Destino");
    }
}
