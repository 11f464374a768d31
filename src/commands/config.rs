use crate::api::ApiClient;
use crate::config::ConfigApp;
use tauri::State;

#[tauri::command]
pub fn obtener_config() -> Result<ConfigApp, String> {
    Ok(ConfigApp::cargar())
}

/// Persiste la configuracion y actualiza la URL base del cliente HTTP
/// para que rija desde el proximo pedido.
#[tauri::command]
pub fn guardar_config(api: State<ApiClient>, config: ConfigApp) -> Result<(), String> {
    config.guardar()?;
    api.establecer_base_url(config.api_url);
    Ok(())
}
