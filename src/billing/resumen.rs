use serde::Serialize;

use super::escalonada::resolver_nivel;
use crate::models::{Carga, EstadoCarga, Factura, Nivel};

/// Totales de una carga. Los montos salen de los `amount` persistidos por
/// instruccion; nunca se recalculan contra la tarifa vigente, que puede
/// haber cambiado despues de registrada la instruccion.
#[derive(Debug, Default, Serialize)]
pub struct ResumenCarga {
    pub total_km: f64,
    pub total_horas: f64,
    pub monto_viajes: f64,
    pub monto_estadias: f64,
    pub monto_total: f64,
}

pub fn resumen_carga(carga: &Carga) -> ResumenCarga {
    let mut resumen = ResumenCarga::default();

    for instruccion in &carga.instructions {
        if let Some(viaje) = instruccion.detalle_viaje() {
            resumen.total_km += viaje.cant_km;
            resumen.monto_viajes += viaje.amount;
        }
        if let Some(estadia) = instruccion.detalle_estadia() {
            resumen.total_horas += estadia.horas_estadia;
            resumen.monto_estadias += estadia.amount;
        }
    }

    resumen.monto_total = resumen.monto_viajes + resumen.monto_estadias;
    resumen
}

/// Indicadores del dashboard sobre el listado completo de cargas.
#[derive(Debug, Default, Serialize)]
pub struct ResumenDashboard {
    pub cargas_activas: i64,
    pub total_km: f64,
    pub total_horas: f64,
    pub facturacion_pendiente: f64,
}

pub fn resumen_dashboard(cargas: &[Carga]) -> ResumenDashboard {
    let mut indicadores = ResumenDashboard::default();

    for carga in cargas {
        if carga.estado == EstadoCarga::Activa {
            indicadores.cargas_activas += 1;
        }

        let parcial = resumen_carga(carga);
        indicadores.total_km += parcial.total_km;
        indicadores.total_horas += parcial.total_horas;

        if carga.estado == EstadoCarga::Finalizada {
            indicadores.facturacion_pendiente += parcial.monto_total;
        }
    }

    indicadores
}

/// Rango de bocas aplicado a una carga de la factura (solo anotacion; el
/// monto autoritativo ya esta dentro de `monto_total`).
#[derive(Debug, Serialize)]
pub struct BocasCarga {
    pub carga_id: i64,
    pub code: i64,
    pub cantidad_bocas: i64,
    pub monto_nivel: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct DesgloseFactura {
    pub total_km: f64,
    pub total_horas: f64,
    pub total_bocas: i64,
    pub subtotal_viajes: f64,
    pub subtotal_estadias: f64,
    pub subtotal_bocas: f64,
    pub valor_km_promedio: f64,
    pub valor_hora_promedio: f64,
    pub bocas_por_carga: Vec<BocasCarga>,
}

/// Desglose de una factura para la vista de detalle. Los subtotales de
/// viajes y estadias suman los montos persistidos; el de bocas se deriva
/// del `monto_total` emitido por el backend. `niveles` es la configuracion
/// escalonada vigente de "Costo por boca", usada solo para anotar el rango
/// aplicado por carga.
pub fn desglose_factura(factura: &Factura, niveles: &[Nivel]) -> DesgloseFactura {
    let mut total_km = 0.0;
    let mut total_horas = 0.0;
    let mut total_bocas = 0i64;
    let mut subtotal_viajes = 0.0;
    let mut subtotal_estadias = 0.0;
    let mut bocas_por_carga = Vec::with_capacity(factura.cargas.len());

    for carga in &factura.cargas {
        total_bocas += carga.cantidad_bocas;
        bocas_por_carga.push(BocasCarga {
            carga_id: carga.id,
            code: carga.code,
            cantidad_bocas: carga.cantidad_bocas,
            monto_nivel: resolver_nivel(niveles, carga.cantidad_bocas).map(|n| n.monto),
        });

        let parcial = resumen_carga(carga);
        total_km += parcial.total_km;
        total_horas += parcial.total_horas;
        subtotal_viajes += parcial.monto_viajes;
        subtotal_estadias += parcial.monto_estadias;
    }

    let subtotal_bocas = factura.monto_total - (subtotal_viajes + subtotal_estadias);
    let valor_km_promedio = if total_km > 0.0 {
        subtotal_viajes / total_km
    } else {
        0.0
    };
    let valor_hora_promedio = if total_horas > 0.0 {
        subtotal_estadias / total_horas
    } else {
        0.0
    };

    DesgloseFactura {
        total_km,
        total_horas,
        total_bocas,
        subtotal_viajes,
        subtotal_estadias,
        subtotal_bocas,
        valor_km_promedio,
        valor_hora_promedio,
        bocas_por_carga,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Estadia, Instruccion, TipoEntrega, TipoInstruccion, Viaje};

    fn viaje(km: f64, amount: f64) -> Instruccion {
        Instruccion {
            id: 0,
            tipo: TipoInstruccion::Viaje,
            viaje: Some(Viaje {
                id: 0,
                localidad_destino: "Rosario".to_string(),
                cant_km: km,
                tipo: TipoEntrega::Caja,
                changarin: false,
                amount,
            }),
            estadia: None,
        }
    }

    fn estadia(horas: f64, amount: f64) -> Instruccion {
        Instruccion {
            id: 0,
            tipo: TipoInstruccion::Estadia,
            viaje: None,
            estadia: Some(Estadia {
                id: 0,
                horas_estadia: horas,
                amount,
            }),
        }
    }

    fn carga_con(instrucciones: Vec<Instruccion>, estado: EstadoCarga) -> Carga {
        Carga {
            id: 1,
            code: 101,
            estado,
            fecha_creacion: "2025-08-07T10:00:00.000Z".to_string(),
            instructions: instrucciones,
            cantidad_bocas: 0,
            factura: None,
            valor_km_recorrido: 150.5,
            valor_hora_estadia: 2500.0,
        }
    }

    #[test]
    fn test_resumen_suma_montos_persistidos() {
        // La tarifa vigente de la carga (150.5/km) daria otro numero: el
        // resumen debe respetar el amount guardado por el backend.
        let carga = carga_con(
            vec![viaje(100.0, 9000.0), estadia(4.0, 10000.0), viaje(50.0, 4500.0)],
            EstadoCarga::Finalizada,
        );
        let resumen = resumen_carga(&carga);

        assert_eq!(resumen.total_km, 150.0);
        assert_eq!(resumen.total_horas, 4.0);
        assert_eq!(resumen.monto_viajes, 13500.0);
        assert_eq!(resumen.monto_estadias, 10000.0);
        assert_eq!(resumen.monto_total, 23500.0);
    }

    #[test]
    fn test_resumen_es_independiente_del_orden() {
        let directa = carga_con(
            vec![viaje(100.0, 9000.0), estadia(4.0, 10000.0), viaje(50.0, 4500.0)],
            EstadoCarga::Activa,
        );
        let invertida = carga_con(
            vec![viaje(50.0, 4500.0), estadia(4.0, 10000.0), viaje(100.0, 9000.0)],
            EstadoCarga::Activa,
        );

        let a = resumen_carga(&directa);
        let b = resumen_carga(&invertida);
        assert_eq!(a.total_km, b.total_km);
        assert_eq!(a.monto_total, b.monto_total);
    }

    #[test]
    fn test_resumen_ignora_payload_que_no_coincide() {
        let mut inconsistente = viaje(100.0, 9000.0);
        inconsistente.tipo = TipoInstruccion::Estadia;
        let carga = carga_con(vec![inconsistente], EstadoCarga::Activa);

        let resumen = resumen_carga(&carga);
        assert_eq!(resumen.total_km, 0.0);
        assert_eq!(resumen.monto_total, 0.0);
    }

    #[test]
    fn test_dashboard_pendiente_solo_cuenta_finalizadas() {
        let activa = carga_con(vec![viaje(100.0, 9000.0)], EstadoCarga::Activa);
        let finalizada = carga_con(vec![viaje(200.0, 18000.0)], EstadoCarga::Finalizada);

        let indicadores = resumen_dashboard(&[activa, finalizada]);
        assert_eq!(indicadores.cargas_activas, 1);
        assert_eq!(indicadores.total_km, 300.0);
        assert_eq!(indicadores.facturacion_pendiente, 18000.0);
    }

    #[test]
    fn test_desglose_deriva_bocas_del_monto_total() {
        let mut carga_a = carga_con(vec![viaje(100.0, 9000.0)], EstadoCarga::Finalizada);
        carga_a.cantidad_bocas = 4;
        let mut carga_b = carga_con(vec![estadia(2.0, 5000.0)], EstadoCarga::Finalizada);
        carga_b.id = 2;
        carga_b.code = 102;
        carga_b.cantidad_bocas = 7;

        let factura = Factura {
            id: 4,
            periodo: "Primera Quincena de agosto 2025".to_string(),
            fecha_emision: "2025-08-16T10:00:00.000Z".to_string(),
            monto_total: 16300.0,
            estado: crate::models::EstadoFactura::Pendiente,
            cargas: vec![carga_a, carga_b],
        };
        let niveles: Vec<Nivel> = serde_json::from_str(
            r#"[
                { "desde": 1, "hasta": 5, "monto": 500.0 },
                { "desde": 6, "hasta": 10, "monto": 800.0 }
            ]"#,
        )
        .unwrap();

        let desglose = desglose_factura(&factura, &niveles);

        assert_eq!(desglose.subtotal_viajes, 9000.0);
        assert_eq!(desglose.subtotal_estadias, 5000.0);
        // 16300 - (9000 + 5000) = 2300 derivado del total autoritativo
        assert_eq!(desglose.subtotal_bocas, 2300.0);
        assert_eq!(desglose.total_bocas, 11);
        assert_eq!(desglose.valor_km_promedio, 90.0);
        assert_eq!(desglose.valor_hora_promedio, 2500.0);
        assert_eq!(desglose.bocas_por_carga[0].monto_nivel, Some(500.0));
        assert_eq!(desglose.bocas_por_carga[1].monto_nivel, Some(800.0));
    }

    #[test]
    fn test_desglose_sin_instrucciones() {
        let factura = Factura {
            id: 9,
            periodo: "Segunda Quincena de julio 2025".to_string(),
            fecha_emision: "2025-08-01T10:00:00.000Z".to_string(),
            monto_total: 0.0,
            estado: crate::models::EstadoFactura::Pendiente,
            cargas: vec![],
        };

        let desglose = desglose_factura(&factura, &[]);
        assert_eq!(desglose.valor_km_promedio, 0.0);
        assert_eq!(desglose.valor_hora_promedio, 0.0);
        assert!(desglose.bocas_por_carga.is_empty());
    }
}
