use serde::{Deserialize, Serialize};

use super::instruccion::Instruccion;
use super::numero;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoCarga {
    Activa,
    Finalizada,
}

/// Referencia a la factura que incluyo la carga (solo el id).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FacturaRef {
    pub id: i64,
}

/// Carga tal como la entrega el backend. El listado puede venir sin
/// instrucciones ni valores de tarifa; los campos tienen defaults.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Carga {
    pub id: i64,
    #[serde(default, deserialize_with = "numero::entero_o_cero")]
    pub code: i64,
    pub estado: EstadoCarga,
    pub fecha_creacion: String,
    #[serde(default)]
    pub instructions: Vec<Instruccion>,
    #[serde(default, deserialize_with = "numero::entero_o_cero")]
    pub cantidad_bocas: i64,
    #[serde(default)]
    pub factura: Option<FacturaRef>,
    #[serde(default, deserialize_with = "numero::flotante_o_cero")]
    pub valor_km_recorrido: f64,
    #[serde(default, deserialize_with = "numero::flotante_o_cero")]
    pub valor_hora_estadia: f64,
}

/// Cuerpo de alta de cargas.
#[derive(Debug, Serialize, Deserialize)]
pub struct NuevaCarga {
    pub code: i64,
    pub valor_km_recorrido: f64,
    pub valor_hora_estadia: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsea_carga_con_decimales_como_texto() {
        // El backend serializa las columnas decimales como texto
        let carga: Carga = serde_json::from_str(
            r#"{
                "id": 12,
                "code": 101,
                "estado": "finalizada",
                "fecha_creacion": "2025-08-07T14:23:11.000Z",
                "cantidad_bocas": "8",
                "valor_km_recorrido": "150.50",
                "valor_hora_estadia": 2500,
                "factura": { "id": 4 },
                "instructions": [
                    {
                        "id": 1,
                        "tipo": "viaje",
                        "viaje": {
                            "id": 1,
                            "localidad_destino": "Rosario",
                            "cant_km": "300.5",
                            "tipo": "caja",
                            "changarin": true,
                            "amount": "45225.25"
                        }
                    },
                    {
                        "id": 2,
                        "tipo": "estadia",
                        "estadia": { "id": 1, "horas_estadia": 4, "amount": 10000 }
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(carga.code, 101);
        assert_eq!(carga.estado, EstadoCarga::Finalizada);
        assert_eq!(carga.cantidad_bocas, 8);
        assert_eq!(carga.valor_km_recorrido, 150.50);
        assert_eq!(carga.factura.as_ref().map(|f| f.id), Some(4));
        assert_eq!(carga.instructions.len(), 2);
        let viaje = carga.instructions[0].detalle_viaje().unwrap();
        assert_eq!(viaje.cant_km, 300.5);
        assert_eq!(viaje.amount, 45225.25);
    }

    #[test]
    fn test_parsea_item_de_listado_sin_detalle() {
        // El listado de cargas viene sin instrucciones ni valores
        let carga: Carga = serde_json::from_str(
            r#"{
                "id": 3,
                "code": 55,
                "estado": "activa",
                "fecha_creacion": "2025-07-15T09:00:00.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(carga.estado, EstadoCarga::Activa);
        assert!(carga.instructions.is_empty());
        assert_eq!(carga.cantidad_bocas, 0);
        assert!(carga.factura.is_none());
    }
}
