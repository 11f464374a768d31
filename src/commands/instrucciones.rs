use crate::api::ApiClient;
use crate::models::NuevaInstruccion;
use tauri::State;

#[tauri::command]
pub async fn crear_instruccion(
    api: State<'_, ApiClient>,
    instruccion: NuevaInstruccion,
) -> Result<(), String> {
    instruccion.validar()?;
    api.post_sin_respuesta("/instructions", &instruccion)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn actualizar_instruccion(
    api: State<'_, ApiClient>,
    id: i64,
    instruccion: NuevaInstruccion,
) -> Result<(), String> {
    instruccion.validar()?;
    api.patch_sin_respuesta(&format!("/instructions/{}", id), &instruccion)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn eliminar_instruccion(api: State<'_, ApiClient>, id: i64) -> Result<(), String> {
    api.delete(&format!("/instructions/{}", id))
        .await
        .map_err(|e| e.to_string())
}
