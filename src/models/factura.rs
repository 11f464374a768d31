use serde::{Deserialize, Serialize};

use super::carga::Carga;
use super::numero;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoFactura {
    Pendiente,
    Pagada,
}

/// Factura de una quincena. `monto_total` lo calcula y guarda el backend;
/// los desgloses locales son solo para mostrar.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Factura {
    pub id: i64,
    pub periodo: String,
    pub fecha_emision: String,
    #[serde(deserialize_with = "numero::flotante")]
    pub monto_total: f64,
    pub estado: EstadoFactura,
    #[serde(default)]
    pub cargas: Vec<Carga>,
}
