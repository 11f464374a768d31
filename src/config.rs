use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// URL por defecto del backend de CargaPay
const API_URL_DEFAULT: &str = "http://localhost:3000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigApp {
    #[serde(default = "api_url_default")]
    pub api_url: String,
}

fn api_url_default() -> String {
    API_URL_DEFAULT.to_string()
}

impl Default for ConfigApp {
    fn default() -> Self {
        ConfigApp {
            api_url: api_url_default(),
        }
    }
}

impl ConfigApp {
    /// Lee la configuracion del directorio de datos. Si el archivo no
    /// existe o no parsea, arranca con los valores por defecto.
    pub fn cargar() -> ConfigApp {
        let ruta = match ruta_config() {
            Some(ruta) => ruta,
            None => return ConfigApp::default(),
        };

        match std::fs::read_to_string(&ruta) {
            Ok(texto) => serde_json::from_str(&texto).unwrap_or_default(),
            Err(_) => ConfigApp::default(),
        }
    }

    pub fn guardar(&self) -> Result<(), String> {
        let ruta = ruta_config().ok_or("No se pudo resolver el directorio de datos")?;

        if let Some(padre) = ruta.parent() {
            std::fs::create_dir_all(padre).map_err(|e| e.to_string())?;
        }

        let texto = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(&ruta, texto).map_err(|e| e.to_string())
    }
}

/// Retorna la ruta del archivo de configuracion de la aplicacion
fn ruta_config() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("LOCALAPPDATA")
            .ok()
            .map(|p| PathBuf::from(p).join("CargaPay").join("config.json"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .ok()
            .map(|p| PathBuf::from(p).join(".cargapay").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_vacia_completa_defaults() {
        let config: ConfigApp = serde_json::from_str("{}").unwrap();
        assert_eq!(config.api_url, API_URL_DEFAULT);
    }

    #[test]
    fn test_config_conserva_url_guardada() {
        let config: ConfigApp =
            serde_json::from_str(r#"{ "api_url": "https://api.cargapay.com" }"#).unwrap();
        assert_eq!(config.api_url, "https://api.cargapay.com");
    }
}
