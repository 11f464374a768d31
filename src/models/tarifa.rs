use serde::{Deserialize, Serialize};

use super::numero;

/// Nombres de tarifa que reconoce el sistema. El backend exige los tres
/// configurados antes de permitir crear cargas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NombreTarifa {
    #[serde(rename = "Valor por km recorrido")]
    ValorKm,
    #[serde(rename = "Valor por hora de estadia")]
    ValorHoraEstadia,
    #[serde(rename = "Costo por boca")]
    CostoBoca,
}

/// Rango escalonado: aplica `monto` cuando la cantidad de bocas cae en
/// [desde, hasta] (ambos inclusive).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Nivel {
    #[serde(deserialize_with = "numero::entero")]
    pub desde: i64,
    #[serde(deserialize_with = "numero::entero")]
    pub hasta: i64,
    #[serde(deserialize_with = "numero::flotante")]
    pub monto: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConfiguracionEscalonada {
    pub niveles: Vec<Nivel>,
}

/// Tarifa vigente: valor plano o configuracion escalonada, nunca ambas.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Tarifa {
    pub id: i64,
    pub name: NombreTarifa,
    #[serde(default, deserialize_with = "numero::flotante_opcional")]
    pub value: Option<f64>,
    #[serde(default)]
    pub configuracion_escalonada: Option<ConfiguracionEscalonada>,
}

impl Tarifa {
    /// Texto de valor para listados: monto plano, rangos escalonados o
    /// "No establecido" si no hay nada cargado.
    pub fn valor_legible(&self) -> String {
        if let Some(config) = &self.configuracion_escalonada {
            if !config.niveles.is_empty() {
                return config
                    .niveles
                    .iter()
                    .map(|n| format!("De {} a {} bocas: ${:.2}", n.desde, n.hasta, n.monto))
                    .collect::<Vec<_>>()
                    .join("; ");
            }
        }
        match self.value {
            Some(valor) => format!("${:.2}", valor),
            None => "No establecido".to_string(),
        }
    }
}

/// Cuerpo de alta/edicion de tarifas. El backend espera `value` nulo para
/// la tarifa escalonada y `configuracion_escalonada` nula para las planas.
#[derive(Debug, Serialize, Deserialize)]
pub struct NuevaTarifa {
    pub name: NombreTarifa,
    pub value: Option<f64>,
    pub configuracion_escalonada: Option<ConfiguracionEscalonada>,
}

impl NuevaTarifa {
    pub fn validar(&self) -> Result<(), String> {
        match self.name {
            NombreTarifa::CostoBoca => {
                let con_niveles = self
                    .configuracion_escalonada
                    .as_ref()
                    .is_some_and(|c| !c.niveles.is_empty());
                if !con_niveles {
                    return Err(
                        "El costo por boca requiere al menos un rango escalonado".to_string()
                    );
                }
                if self.value.is_some() {
                    return Err("El costo por boca no lleva valor plano".to_string());
                }
                Ok(())
            }
            _ => {
                if self.value.is_none() {
                    return Err("La tarifa requiere un valor".to_string());
                }
                if self.configuracion_escalonada.is_some() {
                    return Err("Solo el costo por boca lleva rangos escalonados".to_string());
                }
                Ok(())
            }
        }
    }
}
