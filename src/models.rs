//! Frontend Models
//!
//! Data structures matching the remote API's JSON shapes (camelCase on the wire).

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ========================
// Auth / Customer
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Customer data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
}

// ========================
// Property
// ========================

/// Property definition owned by a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub customer_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRequest {
    pub customer_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyUpdateRequest {
    pub name: String,
}

// ========================
// Freight
// ========================

/// Freight (shipment) with its attached property values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Freight {
    pub id: i64,
    pub customer_id: i64,
    pub name: String,
    pub created_at: String,
    #[serde(default)]
    pub properties: Vec<ValuePropertyFreight>,
}

impl Freight {
    /// Creation date as `dd/MM/yyyy HH:mm`, or the raw value when it cannot be parsed
    pub fn created_at_display(&self) -> String {
        display_timestamp(&self.created_at)
    }
}

/// Join between a freight, a property definition and a string value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuePropertyFreight {
    pub id: i64,
    pub property_id: i64,
    pub property_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// One `{propertyId, value}` pair, used both for creation and for value updates
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValue {
    pub property_id: i64,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreightRequest {
    pub name: String,
    pub customer_id: i64,
    pub created_at: String,
    pub properties: Vec<PropertyValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreightNameUpdate {
    pub name: String,
}

// ========================
// Timestamps
// ========================

/// Wire format for `createdAt`: local time, no offset, whole seconds
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn format_created_at(timestamp: NaiveDateTime) -> String {
    timestamp.format(CREATED_AT_FORMAT).to_string()
}

/// Current local wall-clock time in the `createdAt` wire format
pub fn local_created_at() -> String {
    format_created_at(Local::now().naive_local())
}

fn display_timestamp(raw: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local).naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"));
    match parsed {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_property_uses_type_on_the_wire() {
        let json = r#"{"id":3,"customerId":1,"name":"Peso","type":"Numérico"}"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.kind, "Numérico");
        assert_eq!(property.customer_id, 1);

        let request = PropertyRequest { customer_id: 1, name: "Peso".into(), kind: "Numérico".into() };
        let out = serde_json::to_value(&request).unwrap();
        assert_eq!(out["customerId"], 1);
        assert_eq!(out["type"], "Numérico");
    }

    #[test]
    fn test_freight_without_properties_field() {
        let json = r#"{"id":1,"customerId":1,"name":"Frete Nacional","createdAt":"2025-01-15T10:30:00"}"#;
        let freight: Freight = serde_json::from_str(json).unwrap();
        assert!(freight.properties.is_empty());
        assert_eq!(freight.created_at_display(), "15/01/2025 10:30");
    }

    #[test]
    fn test_created_at_display_keeps_garbage() {
        assert_eq!(display_timestamp("ontem"), "ontem");
        assert_eq!(display_timestamp("2025-02-01T08:05:09.123"), "01/02/2025 08:05");
    }

    #[test]
    fn test_created_at_truncates_to_seconds() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_milli_opt(7, 4, 5, 987)
            .unwrap();
        assert_eq!(format_created_at(ts), "2025-03-09T07:04:05");
    }
}
