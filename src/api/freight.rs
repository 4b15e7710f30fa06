//! Freight Endpoints
//!
//! Freight CRUD plus the paged/searchable value sub-resource.

use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::config::DEFAULT_PAGE_SIZE;
use crate::models::{Freight, FreightNameUpdate, FreightRequest, PropertyValue, ValuePropertyFreight};

/// Page/size/search triple for `GET /api/freight/{id}/values`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuesQuery {
    pub page: u32,
    pub size: u32,
    pub search: String,
}

impl Default for ValuesQuery {
    fn default() -> Self {
        Self { page: 0, size: DEFAULT_PAGE_SIZE, search: String::new() }
    }
}

impl ValuesQuery {
    /// Query-string pairs; `search` is left out when empty
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        params
    }
}

impl ApiClient {
    pub async fn create_freight(&self, request: &FreightRequest) -> Result<Freight, ApiError> {
        self.send_json(Method::POST, "/api/freight", request, "Erro ao criar frete.").await
    }

    pub async fn list_freights(&self, customer_id: i64) -> Result<Vec<Freight>, ApiError> {
        self.get_json(&format!("/api/freight/customer/{}", customer_id), &[], "Erro ao buscar fretes.")
            .await
    }

    pub async fn list_freight_values(
        &self,
        freight_id: i64,
        query: &ValuesQuery,
    ) -> Result<Vec<ValuePropertyFreight>, ApiError> {
        self.get_json(
            &format!("/api/freight/{}/values", freight_id),
            &query.params(),
            "Erro ao buscar valores do frete.",
        )
        .await
    }

    pub async fn update_freight_values(&self, freight_id: i64, values: &[PropertyValue]) -> Result<(), ApiError> {
        self.send_unit(
            Method::PUT,
            &format!("/api/freight/{}/values", freight_id),
            Some(values),
            "Erro ao atualizar valores.",
        )
        .await
    }

    pub async fn update_freight_name(&self, freight_id: i64, name: &str) -> Result<(), ApiError> {
        let body = FreightNameUpdate { name: name.to_string() };
        self.send_unit(
            Method::PUT,
            &format!("/api/freight/{}/name", freight_id),
            Some(&body),
            "Erro ao atualizar nome do frete.",
        )
        .await
    }

    /// Unlink properties from a freight; the body is the list of property ids
    pub async fn delete_freight_values(&self, freight_id: i64, property_ids: &[i64]) -> Result<(), ApiError> {
        self.send_unit(
            Method::DELETE,
            &format!("/api/freight/{}/values", freight_id),
            Some(property_ids),
            "Erro ao excluir valores.",
        )
        .await
    }

    pub async fn delete_freight(&self, freight_id: i64) -> Result<(), ApiError> {
        self.send_unit::<()>(
            Method::DELETE,
            &format!("/api/freight/{}", freight_id),
            None,
            "Erro ao excluir frete.",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_is_first_page() {
        let query = ValuesQuery::default();
        assert_eq!(query.params(), vec![("page", "0".to_string()), ("size", "10".to_string())]);
    }

    #[test]
    fn test_search_included_when_present() {
        let query = ValuesQuery { page: 2, size: 5, search: "peso".into() };
        assert_eq!(
            query.params(),
            vec![("page", "2".to_string()), ("size", "5".to_string()), ("search", "peso".to_string())]
        );
    }
}
