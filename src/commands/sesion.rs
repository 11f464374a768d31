use crate::api::{ApiClient, SesionState};
use crate::models::SesionActiva;
use serde::Deserialize;
use serde_json::json;
use tauri::State;

#[derive(Debug, Deserialize)]
struct RespuestaLogin {
    access_token: String,
}

/// Valida las credenciales contra el backend y guarda el token de la
/// sesion en el cliente HTTP.
#[tauri::command]
pub async fn iniciar_sesion(
    api: State<'_, ApiClient>,
    sesion: State<'_, SesionState>,
    mail: String,
    password: String,
) -> Result<SesionActiva, String> {
    let credenciales = json!({ "mail": mail, "password": password });

    let respuesta: RespuestaLogin = api
        .post("/auth/login", &credenciales)
        .await
        .map_err(|e| e.to_string())?;

    api.establecer_token(respuesta.access_token);

    let nueva_sesion = SesionActiva { mail };
    let mut sesion_guard = sesion.sesion.lock().map_err(|e| e.to_string())?;
    *sesion_guard = Some(nueva_sesion.clone());

    Ok(nueva_sesion)
}

/// Cierra la sesion activa y descarta el token
#[tauri::command]
pub fn cerrar_sesion(
    api: State<ApiClient>,
    sesion: State<SesionState>,
) -> Result<(), String> {
    api.limpiar_token();
    let mut sesion_guard = sesion.sesion.lock().map_err(|e| e.to_string())?;
    *sesion_guard = None;
    Ok(())
}

/// Retorna la sesion activa (o null si no hay, o si el token fue
/// descartado por un 401 del backend)
#[tauri::command]
pub fn obtener_sesion_actual(
    api: State<ApiClient>,
    sesion: State<SesionState>,
) -> Result<Option<SesionActiva>, String> {
    if !api.hay_sesion() {
        return Ok(None);
    }
    let sesion_guard = sesion.sesion.lock().map_err(|e| e.to_string())?;
    Ok(sesion_guard.clone())
}
