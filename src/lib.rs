mod api;
mod billing;
mod commands;
mod config;
mod models;

use api::{ApiClient, SesionState};
use config::ConfigApp;
use std::sync::Mutex;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = ConfigApp::cargar();
    let api = ApiClient::new(config.api_url.clone())
        .expect("Error al inicializar el cliente HTTP");
    let sesion_state = SesionState {
        sesion: Mutex::new(None),
    };

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .manage(api)
        .manage(sesion_state)
        .invoke_handler(tauri::generate_handler![
            // Sesion
            commands::sesion::iniciar_sesion,
            commands::sesion::cerrar_sesion,
            commands::sesion::obtener_sesion_actual,
            // Cargas
            commands::cargas::listar_cargas,
            commands::cargas::cargas_por_quincena,
            commands::cargas::obtener_carga,
            commands::cargas::resumen_carga,
            commands::cargas::crear_carga,
            commands::cargas::finalizar_carga,
            // Instrucciones
            commands::instrucciones::crear_instruccion,
            commands::instrucciones::actualizar_instruccion,
            commands::instrucciones::eliminar_instruccion,
            // Tarifas
            commands::tarifas::listar_tarifas,
            commands::tarifas::crear_tarifa,
            commands::tarifas::actualizar_tarifa,
            commands::tarifas::eliminar_tarifa,
            // Facturacion
            commands::facturas::facturar_quincena,
            commands::facturas::obtener_factura,
            commands::facturas::desglose_factura,
            commands::facturas::eliminar_factura,
            // Dashboard
            commands::reportes::resumen_dashboard,
            // Configuracion
            commands::config::obtener_config,
            commands::config::guardar_config,
            // Exportar CSV
            commands::exportar::exportar_cargas_csv,
            commands::exportar::exportar_factura_csv,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application")
}
