use serde::{Deserialize, Serialize};

use crate::shared::numeric::opt_flexible_f64;
use crate::shared::validation::ValidationError;

/// A rentable inventory item as returned by `GET /materiali`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "quantita_disponibile", default)]
    pub quantity_available: i64,
    /// Total stock, only used to compute the availability percentage.
    #[serde(rename = "quantita_totale", default)]
    pub quantity_total: i64,
    #[serde(rename = "prezzo_weekend", default, deserialize_with = "opt_flexible_f64")]
    pub price_weekend: Option<f64>,
}

impl Material {
    pub fn price_value(&self) -> f64 {
        self.price_weekend.unwrap_or(0.0)
    }

    /// Share of stock still available, in percent. Zero when the total is
    /// zero or unknown.
    pub fn availability_percent(&self) -> f64 {
        if self.quantity_total <= 0 {
            return 0.0;
        }
        self.quantity_available as f64 / self.quantity_total as f64 * 100.0
    }
}

/// Body of material create/update calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "quantita_disponibile")]
    pub quantity_available: i64,
    #[serde(rename = "prezzo_weekend")]
    pub price_weekend: f64,
}

/// Typed form state for the material edit-or-create form. Numeric fields
/// stay as the raw input text until validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialDraft {
    pub name: String,
    pub quantity_available: String,
    pub price_weekend: String,
}

impl MaterialDraft {
    pub fn from_material(material: &Material) -> Self {
        Self {
            name: material.name.clone(),
            quantity_available: material.quantity_available.to_string(),
            price_weekend: material.price_value().to_string(),
        }
    }

    pub fn validate(&self) -> Result<MaterialRequest, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("Il nome è obbligatorio"));
        }
        let quantity = self
            .quantity_available
            .trim()
            .parse::<i64>()
            .unwrap_or(0);
        if quantity <= 0 {
            return Err(ValidationError::new("Inserisci una quantità valida"));
        }
        Ok(MaterialRequest {
            name: self.name.clone(),
            quantity_available: quantity,
            price_weekend: self.price_weekend.trim().parse().unwrap_or(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_name_and_non_positive_quantity() {
        let mut draft = MaterialDraft {
            name: "".into(),
            quantity_available: "5".into(),
            price_weekend: "10".into(),
        };
        assert!(draft.validate().is_err());

        draft.name = "Sedia".into();
        draft.quantity_available = "0".into();
        assert!(draft.validate().is_err());

        draft.quantity_available = "not a number".into();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn valid_draft_parses_numerics() {
        let draft = MaterialDraft {
            name: "Tavolo".into(),
            quantity_available: "12".into(),
            price_weekend: "25.50".into(),
        };
        let request = draft.validate().unwrap();
        assert_eq!(request.quantity_available, 12);
        assert_eq!(request.price_weekend, 25.5);
    }

    #[test]
    fn availability_percent_handles_zero_total() {
        let mut material: Material = serde_json::from_str(
            r#"{"id": 1, "nome": "Sedia", "quantita_disponibile": 3, "quantita_totale": 10, "prezzo_weekend": "4.00"}"#,
        )
        .unwrap();
        assert_eq!(material.availability_percent(), 30.0);
        assert_eq!(material.price_value(), 4.0);

        material.quantity_total = 0;
        assert_eq!(material.availability_percent(), 0.0);
    }
}
