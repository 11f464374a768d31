use crate::api::ApiClient;
use crate::billing::resumen::{self, ResumenDashboard};
use crate::models::Carga;
use tauri::State;

/// Indicadores del dashboard operativo: cargas activas, kilometros y
/// horas acumulados, y facturacion pendiente (montos persistidos de las
/// cargas finalizadas sin facturar).
#[tauri::command]
pub async fn resumen_dashboard(api: State<'_, ApiClient>) -> Result<ResumenDashboard, String> {
    let cargas: Vec<Carga> = api.get("/cargas").await.map_err(|e| e.to_string())?;
    Ok(resumen::resumen_dashboard(&cargas))
}
