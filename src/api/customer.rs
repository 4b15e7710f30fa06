//! Customer Endpoints

use super::{ApiClient, ApiError};
use crate::models::Customer;

impl ApiClient {
    pub async fn get_customer(&self, customer_id: i64) -> Result<Customer, ApiError> {
        self.get_json(
            &format!("/api/customer/{}", customer_id),
            &[],
            "Falha ao buscar os dados do cliente.",
        )
        .await
    }
}
