//! Freight Draft
//!
//! In-memory freight being assembled by the create form. Nothing is sent
//! until `to_request` accepts it.

use thiserror::Error;

use crate::models::{FreightRequest, Property, PropertyValue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Selecione uma propriedade e preencha o valor")]
    IncompleteAttachment,
    #[error("Esta propriedade já foi adicionada")]
    DuplicateProperty,
    #[error("O nome do frete é obrigatório")]
    MissingName,
    #[error("Adicione pelo menos uma propriedade ao frete")]
    NoAttachments,
}

/// Property picked for the draft, with the value typed for it
#[derive(Debug, Clone, PartialEq)]
pub struct DraftAttachment {
    pub property_id: i64,
    pub property_name: String,
    pub property_type: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FreightDraft {
    pub name: String,
    attachments: Vec<DraftAttachment>,
}

impl FreightDraft {
    pub fn attachments(&self) -> &[DraftAttachment] {
        &self.attachments
    }

    pub fn contains(&self, property_id: i64) -> bool {
        self.attachments.iter().any(|a| a.property_id == property_id)
    }

    /// Append `property` with `value`, keeping insertion order.
    ///
    /// The list is left untouched on error.
    pub fn attach(&mut self, property: Option<&Property>, value: &str) -> Result<(), DraftError> {
        let property = property.ok_or(DraftError::IncompleteAttachment)?;
        if value.trim().is_empty() {
            return Err(DraftError::IncompleteAttachment);
        }
        if self.contains(property.id) {
            return Err(DraftError::DuplicateProperty);
        }

        self.attachments.push(DraftAttachment {
            property_id: property.id,
            property_name: property.name.clone(),
            property_type: property.kind.clone(),
            value: value.to_string(),
        });
        Ok(())
    }

    pub fn detach(&mut self, property_id: i64) {
        self.attachments.retain(|a| a.property_id != property_id);
    }

    /// Build the create payload, stamping `created_at`
    pub fn to_request(&self, customer_id: i64, created_at: String) -> Result<FreightRequest, DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if self.attachments.is_empty() {
            return Err(DraftError::NoAttachments);
        }

        Ok(FreightRequest {
            name: self.name.clone(),
            customer_id,
            created_at,
            properties: self
                .attachments
                .iter()
                .map(|a| PropertyValue { property_id: a.property_id, value: a.value.clone() })
                .collect(),
        })
    }
}
