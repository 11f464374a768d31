use crate::api::ApiClient;
use crate::billing::quincena;
use crate::billing::resumen;
use crate::models::{Carga, EstadoCarga, Factura};
use chrono::Datelike;
use std::io::Write;
use tauri::State;

/// BOM UTF-8 para que Excel abra correctamente caracteres especiales
const BOM: &[u8] = b"\xEF\xBB\xBF";
/// Separador de columnas (punto y coma para Excel en español)
const SEP: &str = ";";

fn escapar_csv(valor: &str) -> String {
    if valor.contains(';') || valor.contains('"') || valor.contains('\n') {
        format!("\"{}\"", valor.replace('"', "\"\""))
    } else {
        valor.to_string()
    }
}

fn escribir_csv(ruta: &str, headers: &[&str], filas: &[Vec<String>]) -> Result<(), String> {
    let mut file = std::fs::File::create(ruta).map_err(|e| e.to_string())?;
    file.write_all(BOM).map_err(|e| e.to_string())?;

    writeln!(file, "{}", headers.join(SEP)).map_err(|e| e.to_string())?;

    for fila in filas {
        let linea: Vec<String> = fila.iter().map(|v| escapar_csv(v)).collect();
        writeln!(file, "{}", linea.join(SEP)).map_err(|e| e.to_string())?;
    }

    Ok(())
}

/// Exporta el listado de cargas con su mes, quincena y totales.
#[tauri::command]
pub async fn exportar_cargas_csv(api: State<'_, ApiClient>, ruta: String) -> Result<String, String> {
    let cargas: Vec<Carga> = api.get("/cargas").await.map_err(|e| e.to_string())?;

    let filas: Vec<Vec<String>> = cargas
        .iter()
        .map(|carga| {
            let (mes, quincena) = match quincena::fecha_local(&carga.fecha_creacion) {
                Some(fecha) => (
                    quincena::etiqueta_mes(fecha),
                    quincena::quincena_del_dia(fecha.day()).etiqueta().to_string(),
                ),
                None => (String::new(), String::new()),
            };
            let totales = resumen::resumen_carga(carga);
            let estado = match carga.estado {
                EstadoCarga::Activa => "activa",
                EstadoCarga::Finalizada => "finalizada",
            };

            vec![
                carga.code.to_string(),
                carga.fecha_creacion.clone(),
                estado.to_string(),
                mes,
                quincena,
                format!("{:.1}", totales.total_km),
                format!("{:.1}", totales.total_horas),
                format!("{:.2}", totales.monto_total),
            ]
        })
        .collect();

    let headers = [
        "Codigo", "Fecha", "Estado", "Mes", "Quincena",
        "Total KM", "Total Horas", "Monto",
    ];
    escribir_csv(&ruta, &headers, &filas)?;

    Ok(format!("{} cargas exportadas", filas.len()))
}

/// Exporta el detalle de una factura: una fila por instruccion y el pie
/// con los subtotales y el monto total emitido por el backend.
#[tauri::command]
pub async fn exportar_factura_csv(
    api: State<'_, ApiClient>,
    id: i64,
    ruta: String,
) -> Result<String, String> {
    let factura: Factura = api
        .get(&format!("/facturacion/{}", id))
        .await
        .map_err(|e| e.to_string())?;

    let mut filas: Vec<Vec<String>> = Vec::new();
    for carga in &factura.cargas {
        for instruccion in &carga.instructions {
            if let Some(viaje) = instruccion.detalle_viaje() {
                filas.push(vec![
                    carga.code.to_string(),
                    "Viaje".to_string(),
                    viaje.localidad_destino.clone(),
                    format!("{:.1} km", viaje.cant_km),
                    format!("{:.2}", viaje.amount),
                ]);
            }
            if let Some(estadia) = instruccion.detalle_estadia() {
                filas.push(vec![
                    carga.code.to_string(),
                    "Estadia".to_string(),
                    String::new(),
                    format!("{:.1} hs", estadia.horas_estadia),
                    format!("{:.2}", estadia.amount),
                ]);
            }
        }
    }

    let desglose = resumen::desglose_factura(&factura, &[]);
    filas.push(vec![
        String::new(),
        "Subtotal Viajes".to_string(),
        String::new(),
        format!("{:.1} km", desglose.total_km),
        format!("{:.2}", desglose.subtotal_viajes),
    ]);
    filas.push(vec![
        String::new(),
        "Subtotal Estadias".to_string(),
        String::new(),
        format!("{:.1} hs", desglose.total_horas),
        format!("{:.2}", desglose.subtotal_estadias),
    ]);
    filas.push(vec![
        String::new(),
        "Subtotal Bocas".to_string(),
        String::new(),
        desglose.total_bocas.to_string(),
        format!("{:.2}", desglose.subtotal_bocas),
    ]);
    filas.push(vec![
        String::new(),
        "Monto Total".to_string(),
        factura.periodo.clone(),
        String::new(),
        format!("{:.2}", factura.monto_total),
    ]);

    let headers = ["Carga", "Concepto", "Detalle", "Cantidad", "Monto"];
    escribir_csv(&ruta, &headers, &filas)?;

    Ok(format!("Factura {} exportada", factura.periodo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapar_csv() {
        assert_eq!(escapar_csv("Rosario"), "Rosario");
        assert_eq!(escapar_csv("a;b"), "\"a;b\"");
        assert_eq!(escapar_csv("di\"jo"), "\"di\"\"jo\"");
    }
}
