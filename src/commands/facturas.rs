use crate::api::ApiClient;
use crate::billing::quincena::Quincena;
use crate::billing::resumen::{self, DesgloseFactura};
use crate::models::{Factura, NombreTarifa, Tarifa};
use serde::Serialize;
use tauri::State;

#[derive(Debug, Serialize)]
struct PedidoFacturacion {
    #[serde(rename = "monthYear")]
    mes: String,
    quincena: Quincena,
}

/// Finaliza las cargas activas de la quincena indicada y genera su
/// factura. El backend calcula el monto total; la respuesta es la factura
/// nueva para navegar a su detalle.
#[tauri::command]
pub async fn facturar_quincena(
    api: State<'_, ApiClient>,
    mes: String,
    quincena: Quincena,
) -> Result<Factura, String> {
    let pedido = PedidoFacturacion { mes, quincena };
    api.post("/facturacion/quincena", &pedido)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn obtener_factura(api: State<'_, ApiClient>, id: i64) -> Result<Factura, String> {
    api.get(&format!("/facturacion/{}", id))
        .await
        .map_err(|e| e.to_string())
}

/// Al eliminarla, el backend devuelve sus cargas al estado activo; el
/// proximo listado ya las trae asi.
#[tauri::command]
pub async fn eliminar_factura(api: State<'_, ApiClient>, id: i64) -> Result<(), String> {
    api.delete(&format!("/facturacion/{}", id))
        .await
        .map_err(|e| e.to_string())
}

#[derive(Debug, Serialize)]
pub struct VistaFactura {
    pub factura: Factura,
    pub desglose: DesgloseFactura,
}

/// Trae la factura y las tarifas vigentes en paralelo y arma el desglose
/// para la vista de detalle. La configuracion escalonada de "Costo por
/// boca" solo anota el rango aplicado por carga; el monto autoritativo es
/// el `monto_total` de la factura.
#[tauri::command]
pub async fn desglose_factura(api: State<'_, ApiClient>, id: i64) -> Result<VistaFactura, String> {
    let ruta = format!("/facturacion/{}", id);
    let (factura, tarifas) = tokio::try_join!(
        api.get::<Factura>(&ruta),
        api.get::<Vec<Tarifa>>("/rates"),
    )
    .map_err(|e| e.to_string())?;

    let niveles = tarifas
        .iter()
        .find(|t| t.name == NombreTarifa::CostoBoca)
        .and_then(|t| t.configuracion_escalonada.as_ref())
        .map(|c| c.niveles.as_slice())
        .unwrap_or(&[]);

    let desglose = resumen::desglose_factura(&factura, niveles);
    Ok(VistaFactura { factura, desglose })
}
