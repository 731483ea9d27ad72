use serde::{Deserialize, Serialize};

use crate::shared::validation::ValidationError;

/// A rental customer as returned by `GET /clienti`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "indirizzo_spedizione", default)]
    pub shipping_address: Option<String>,
}

/// Body of customer create/update calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "indirizzo_spedizione")]
    pub shipping_address: String,
}

/// Typed form state for the customer edit-or-create form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerDraft {
    pub name: String,
    pub phone: String,
    pub shipping_address: String,
}

impl CustomerDraft {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            phone: customer.phone.clone().unwrap_or_default(),
            shipping_address: customer.shipping_address.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<CustomerRequest, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("Il nome è obbligatorio"));
        }
        Ok(CustomerRequest {
            name: self.name.clone(),
            phone: self.phone.clone(),
            shipping_address: self.shipping_address.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let draft = CustomerDraft {
            name: "   ".into(),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let draft = CustomerDraft {
            name: "Mario Rossi".into(),
            ..Default::default()
        };
        let request = draft.validate().unwrap();
        assert_eq!(request.name, "Mario Rossi");
        assert_eq!(request.phone, "");
    }

    #[test]
    fn wire_names_are_italian() {
        let customer: Customer = serde_json::from_str(
            r#"{"id": 3, "nome": "Mario", "telefono": "333", "indirizzo_spedizione": "Via Roma 1"}"#,
        )
        .unwrap();
        assert_eq!(customer.name, "Mario");
        assert_eq!(customer.shipping_address.as_deref(), Some("Via Roma 1"));

        let draft = CustomerDraft::from_customer(&customer);
        let json = serde_json::to_value(draft.validate().unwrap()).unwrap();
        assert_eq!(json["nome"], "Mario");
        assert_eq!(json["telefono"], "333");
    }
}
