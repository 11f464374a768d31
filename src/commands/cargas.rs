use crate::api::{ApiClient, ApiError};
use crate::billing::quincena::{self, GrupoMes};
use crate::billing::resumen;
use crate::models::{Carga, NuevaCarga};
use serde::Serialize;
use tauri::State;

#[tauri::command]
pub async fn listar_cargas(api: State<'_, ApiClient>) -> Result<Vec<Carga>, String> {
    api.get("/cargas").await.map_err(|e| e.to_string())
}

/// Cargas agrupadas por mes y quincena, como las muestra el listado.
#[tauri::command]
pub async fn cargas_por_quincena(api: State<'_, ApiClient>) -> Result<Vec<GrupoMes>, String> {
    let cargas: Vec<Carga> = api.get("/cargas").await.map_err(|e| e.to_string())?;
    Ok(quincena::agrupar_por_quincena(cargas))
}

#[tauri::command]
pub async fn obtener_carga(api: State<'_, ApiClient>, id: i64) -> Result<Carga, String> {
    api.get(&format!("/cargas/{}", id))
        .await
        .map_err(|e| e.to_string())
}

/// Totales de una carga para la vista de detalle (montos persistidos por
/// instruccion).
#[tauri::command]
pub async fn resumen_carga(
    api: State<'_, ApiClient>,
    id: i64,
) -> Result<resumen::ResumenCarga, String> {
    let carga: Carga = api
        .get(&format!("/cargas/{}", id))
        .await
        .map_err(|e| e.to_string())?;
    Ok(resumen::resumen_carga(&carga))
}

/// Error estructurado del alta de cargas: si el backend respondio 412,
/// `tarifas_faltantes` trae los nombres sin configurar para que la
/// interfaz los liste y derive a la pantalla de Tarifas.
#[derive(Debug, Serialize)]
pub struct ErrorCreacionCarga {
    pub mensaje: String,
    pub tarifas_faltantes: Vec<String>,
}

impl From<ApiError> for ErrorCreacionCarga {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::TarifasFaltantes(nombres) => ErrorCreacionCarga {
                mensaje: "Antes de crear la carga configure las tarifas faltantes en Tarifas."
                    .to_string(),
                tarifas_faltantes: nombres,
            },
            otro => ErrorCreacionCarga {
                mensaje: otro.to_string(),
                tarifas_faltantes: Vec::new(),
            },
        }
    }
}

#[tauri::command]
pub async fn crear_carga(
    api: State<'_, ApiClient>,
    carga: NuevaCarga,
) -> Result<Carga, ErrorCreacionCarga> {
    api.post("/cargas", &carga)
        .await
        .map_err(ErrorCreacionCarga::from)
}

/// Finaliza la carga: el backend la deja en solo lectura y calcula los
/// montos definitivos de sus instrucciones.
#[tauri::command]
pub async fn finalizar_carga(api: State<'_, ApiClient>, id: i64) -> Result<(), String> {
    api.patch_vacio(&format!("/cargas/{}/finalizar", id))
        .await
        .map_err(|e| e.to_string())
}
