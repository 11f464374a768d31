use serde::{Deserialize, Serialize};

use super::numero;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoInstruccion {
    Viaje,
    Estadia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoEntrega {
    Caja,
    Colgado,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Viaje {
    pub id: i64,
    pub localidad_destino: String,
    #[serde(deserialize_with = "numero::flotante")]
    pub cant_km: f64,
    pub tipo: TipoEntrega,
    pub changarin: bool,
    #[serde(default, deserialize_with = "numero::flotante_o_cero")]
    pub amount: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Estadia {
    pub id: i64,
    #[serde(deserialize_with = "numero::flotante")]
    pub horas_estadia: f64,
    #[serde(default, deserialize_with = "numero::flotante_o_cero")]
    pub amount: f64,
}

/// Actividad facturable registrada sobre una carga. El backend envia el
/// payload que corresponde al tipo; el otro campo llega vacio.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Instruccion {
    pub id: i64,
    pub tipo: TipoInstruccion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viaje: Option<Viaje>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estadia: Option<Estadia>,
}

impl Instruccion {
    /// Payload de viaje, solo cuando el tipo declarado coincide.
    pub fn detalle_viaje(&self) -> Option<&Viaje> {
        match self.tipo {
            TipoInstruccion::Viaje => self.viaje.as_ref(),
            TipoInstruccion::Estadia => None,
        }
    }

    /// Payload de estadia, solo cuando el tipo declarado coincide.
    pub fn detalle_estadia(&self) -> Option<&Estadia> {
        match self.tipo {
            TipoInstruccion::Estadia => self.estadia.as_ref(),
            TipoInstruccion::Viaje => None,
        }
    }
}

/// Cuerpo de alta/edicion de instrucciones. Lleva `cargaId` y exactamente
/// el payload del tipo declarado.
#[derive(Debug, Serialize, Deserialize)]
pub struct NuevaInstruccion {
    #[serde(rename = "cargaId")]
    pub carga_id: i64,
    pub tipo: TipoInstruccion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viaje: Option<NuevoViajeDatos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estadia: Option<NuevaEstadiaDatos>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NuevoViajeDatos {
    pub localidad_destino: String,
    pub cant_km: f64,
    pub changarin: bool,
    pub tipo: TipoEntrega,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NuevaEstadiaDatos {
    pub horas_estadia: f64,
}

impl NuevaInstruccion {
    /// El payload enviado debe coincidir con el tipo declarado.
    pub fn validar(&self) -> Result<(), String> {
        match self.tipo {
            TipoInstruccion::Viaje if self.viaje.is_some() && self.estadia.is_none() => Ok(()),
            TipoInstruccion::Estadia if self.estadia.is_some() && self.viaje.is_none() => Ok(()),
            TipoInstruccion::Viaje => {
                Err("Una instruccion de viaje requiere los datos del viaje".to_string())
            }
            TipoInstruccion::Estadia => {
                Err("Una instruccion de estadia requiere los datos de la estadia".to_string())
            }
        }
    }
}
