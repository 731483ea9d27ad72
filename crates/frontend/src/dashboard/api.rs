use contracts::domain::stats::MaterialUsage;

use crate::shared::http::{self, ApiError};

/// Per-material order counts, computed server-side.
pub async fn material_stats() -> Result<Vec<MaterialUsage>, ApiError> {
    http::get_json("/statistiche/materiali").await
}
