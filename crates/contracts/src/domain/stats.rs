use serde::{Deserialize, Serialize};

/// Per-material order count from `GET /statistiche/materiali`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialUsage {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "numero_ordini", default)]
    pub order_count: i64,
}
