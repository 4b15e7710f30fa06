//! Property Endpoints
//!
//! CRUD for the property definitions owned by a customer.

use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::{Property, PropertyRequest, PropertyUpdateRequest};

impl ApiClient {
    pub async fn create_property(&self, request: &PropertyRequest) -> Result<Property, ApiError> {
        self.send_json(Method::POST, "/api/property", request, "Falha ao criar propriedade.").await
    }

    pub async fn list_properties(&self, customer_id: i64) -> Result<Vec<Property>, ApiError> {
        self.get_json(&format!("/api/property/{}", customer_id), &[], "Falha ao buscar propriedades.")
            .await
    }

    /// Rename a property; the type is immutable after creation
    pub async fn update_property(&self, id: i64, name: &str) -> Result<Property, ApiError> {
        let body = PropertyUpdateRequest { name: name.to_string() };
        self.send_json(
            Method::PUT,
            &format!("/api/property/{}", id),
            &body,
            "Falha ao atualizar propriedade.",
        )
        .await
    }

    pub async fn delete_property(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit::<()>(
            Method::DELETE,
            &format!("/api/property/{}", id),
            None,
            "Erro ao excluir propriedade.",
        )
        .await
    }
}
