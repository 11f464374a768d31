use crate::api::ApiClient;
use crate::models::{NuevaTarifa, Tarifa};
use serde::Serialize;
use tauri::State;

/// Tarifa con su valor ya formateado para el listado.
#[derive(Debug, Serialize)]
pub struct TarifaVista {
    #[serde(flatten)]
    pub tarifa: Tarifa,
    pub valor_legible: String,
}

#[tauri::command]
pub async fn listar_tarifas(api: State<'_, ApiClient>) -> Result<Vec<TarifaVista>, String> {
    let tarifas: Vec<Tarifa> = api.get("/rates").await.map_err(|e| e.to_string())?;

    Ok(tarifas
        .into_iter()
        .map(|tarifa| {
            let valor_legible = tarifa.valor_legible();
            TarifaVista {
                tarifa,
                valor_legible,
            }
        })
        .collect())
}

#[tauri::command]
pub async fn crear_tarifa(
    api: State<'_, ApiClient>,
    tarifa: NuevaTarifa,
) -> Result<Tarifa, String> {
    tarifa.validar()?;
    api.post("/rates", &tarifa).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn actualizar_tarifa(
    api: State<'_, ApiClient>,
    id: i64,
    tarifa: NuevaTarifa,
) -> Result<Tarifa, String> {
    tarifa.validar()?;
    api.patch(&format!("/rates/{}", id), &tarifa)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn eliminar_tarifa(api: State<'_, ApiClient>, id: i64) -> Result<(), String> {
    api.delete(&format!("/rates/{}", id))
        .await
        .map_err(|e| e.to_string())
}
