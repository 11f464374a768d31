use std::sync::Mutex;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::SesionActiva;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Sentinela: el frontend lo interpreta como sesion vencida y vuelve
    /// al login.
    #[error("SESION_EXPIRADA")]
    SesionExpirada,
    /// El backend rechazo la creacion de la carga por tarifas sin
    /// configurar (HTTP 412). Lleva los nombres faltantes.
    #[error("Faltan configurar tarifas: {}", .0.join(", "))]
    TarifasFaltantes(Vec<String>),
    #[error("{0}")]
    Backend(String),
    #[error("Sin conexion con el servidor: {0}")]
    Conexion(String),
}

/// Cliente HTTP contra el backend de CargaPay. Adjunta el bearer token de
/// la sesion a cada pedido y descarta el token ante un 401.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Mutex<String>,
    token: Mutex<Option<String>>,
}

pub struct SesionState {
    pub sesion: Mutex<Option<SesionActiva>>,
}

impl ApiClient {
    pub fn new(base_url: String) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| format!("Error creando cliente HTTP: {}", e))?;

        Ok(ApiClient {
            http,
            base_url: Mutex::new(base_url),
            token: Mutex::new(None),
        })
    }

    pub fn establecer_base_url(&self, url: String) {
        let mut base = self.base_url.lock().unwrap();
        *base = url;
    }

    pub fn establecer_token(&self, valor: String) {
        let mut token = self.token.lock().unwrap();
        *token = Some(valor);
    }

    pub fn limpiar_token(&self) {
        let mut token = self.token.lock().unwrap();
        *token = None;
    }

    pub fn hay_sesion(&self) -> bool {
        self.token.lock().unwrap().is_some()
    }

    fn url(&self, ruta: &str) -> String {
        let base = self.base_url.lock().unwrap();
        format!("{}{}", base.trim_end_matches('/'), ruta)
    }

    /// Envia el pedido con el token vigente y mapea los estados de error.
    /// Un 401 descarta el token antes de reportar la sesion vencida.
    async fn enviar(&self, pedido: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let token = self.token.lock().unwrap().clone();
        let pedido = match token {
            Some(valor) => pedido.header("Authorization", format!("Bearer {}", valor)),
            None => pedido,
        };

        let respuesta = pedido
            .send()
            .await
            .map_err(|e| ApiError::Conexion(e.to_string()))?;

        let estado = respuesta.status();
        if estado.is_success() {
            return Ok(respuesta);
        }

        if estado == StatusCode::UNAUTHORIZED {
            self.limpiar_token();
            return Err(ApiError::SesionExpirada);
        }

        let cuerpo = respuesta.text().await.unwrap_or_default();
        Err(interpretar_error(estado, &cuerpo))
    }

    async fn leer_json<T: DeserializeOwned>(respuesta: reqwest::Response) -> Result<T, ApiError> {
        respuesta
            .json()
            .await
            .map_err(|e| ApiError::Backend(format!("Error parseando respuesta del servidor: {}", e)))
    }

    pub async fn get<T: DeserializeOwned>(&self, ruta: &str) -> Result<T, ApiError> {
        let respuesta = self.enviar(self.http.get(self.url(ruta))).await?;
        Self::leer_json(respuesta).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        ruta: &str,
        cuerpo: &B,
    ) -> Result<T, ApiError> {
        let respuesta = self
            .enviar(self.http.post(self.url(ruta)).json(cuerpo))
            .await?;
        Self::leer_json(respuesta).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        ruta: &str,
        cuerpo: &B,
    ) -> Result<T, ApiError> {
        let respuesta = self
            .enviar(self.http.patch(self.url(ruta)).json(cuerpo))
            .await?;
        Self::leer_json(respuesta).await
    }

    /// POST cuyo cuerpo de respuesta no interesa.
    pub async fn post_sin_respuesta<B: Serialize + ?Sized>(
        &self,
        ruta: &str,
        cuerpo: &B,
    ) -> Result<(), ApiError> {
        self.enviar(self.http.post(self.url(ruta)).json(cuerpo))
            .await
            .map(|_| ())
    }

    pub async fn patch_sin_respuesta<B: Serialize + ?Sized>(
        &self,
        ruta: &str,
        cuerpo: &B,
    ) -> Result<(), ApiError> {
        self.enviar(self.http.patch(self.url(ruta)).json(cuerpo))
            .await
            .map(|_| ())
    }

    /// PATCH sin cuerpo (acciones como finalizar una carga).
    pub async fn patch_vacio(&self, ruta: &str) -> Result<(), ApiError> {
        self.enviar(self.http.patch(self.url(ruta)))
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, ruta: &str) -> Result<(), ApiError> {
        self.enviar(self.http.delete(self.url(ruta)))
            .await
            .map(|_| ())
    }
}

/// Interpreta el cuerpo de error del backend. `message` puede venir como
/// texto o como lista de textos; el 412 de creacion de cargas trae ademas
/// `tarifas_faltantes` con los nombres sin configurar.
fn interpretar_error(estado: StatusCode, cuerpo: &str) -> ApiError {
    let valor: Value = serde_json::from_str(cuerpo).unwrap_or(Value::Null);

    if estado == StatusCode::PRECONDITION_FAILED {
        let faltantes: Vec<String> = valor["tarifas_faltantes"]
            .as_array()
            .map(|nombres| {
                nombres
                    .iter()
                    .filter_map(|n| n.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        if !faltantes.is_empty() {
            return ApiError::TarifasFaltantes(faltantes);
        }
    }

    let mensaje = match &valor["message"] {
        Value::String(texto) => texto.clone(),
        Value::Array(textos) => textos
            .iter()
            .filter_map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(". "),
        _ => format!("Error del servidor (HTTP {})", estado.as_u16()),
    };

    ApiError::Backend(mensaje)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpretar_412_con_tarifas_faltantes() {
        let cuerpo = r#"{
            "statusCode": 412,
            "message": "Faltan tarifas por configurar",
            "tarifas_faltantes": ["Valor por km recorrido", "Costo por boca"]
        }"#;

        match interpretar_error(StatusCode::PRECONDITION_FAILED, cuerpo) {
            ApiError::TarifasFaltantes(nombres) => {
                assert_eq!(nombres.len(), 2);
                assert_eq!(nombres[0], "Valor por km recorrido");
            }
            otro => panic!("se esperaba TarifasFaltantes, llego {:?}", otro),
        }
    }

    #[test]
    fn test_interpretar_mensaje_como_texto() {
        let cuerpo = r#"{ "statusCode": 400, "message": "Codigo de carga duplicado" }"#;
        match interpretar_error(StatusCode::BAD_REQUEST, cuerpo) {
            ApiError::Backend(mensaje) => assert_eq!(mensaje, "Codigo de carga duplicado"),
            otro => panic!("se esperaba Backend, llego {:?}", otro),
        }
    }

    #[test]
    fn test_interpretar_mensaje_como_lista() {
        let cuerpo = r#"{ "message": ["mail invalido", "password muy corta"] }"#;
        match interpretar_error(StatusCode::BAD_REQUEST, cuerpo) {
            ApiError::Backend(mensaje) => {
                assert_eq!(mensaje, "mail invalido. password muy corta")
            }
            otro => panic!("se esperaba Backend, llego {:?}", otro),
        }
    }

    #[test]
    fn test_interpretar_cuerpo_no_json() {
        let error = interpretar_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>");
        match error {
            ApiError::Backend(mensaje) => assert!(mensaje.contains("500")),
            otro => panic!("se esperaba Backend, llego {:?}", otro),
        }
    }

    #[test]
    fn test_412_sin_lista_cae_al_mensaje() {
        let cuerpo = r#"{ "message": "precondicion fallida" }"#;
        match interpretar_error(StatusCode::PRECONDITION_FAILED, cuerpo) {
            ApiError::Backend(mensaje) => assert_eq!(mensaje, "precondicion fallida"),
            otro => panic!("se esperaba Backend, llego {:?}", otro),
        }
    }
}
