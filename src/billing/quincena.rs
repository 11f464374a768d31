use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Carga, EstadoCarga};

/// Nombres de mes en castellano, como los muestra la interfaz.
const MESES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Mitad de mes a la que pertenece una carga. El corte es el dia 15
/// inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quincena {
    #[serde(rename = "Primera Quincena")]
    Primera,
    #[serde(rename = "Segunda Quincena")]
    Segunda,
}

impl Quincena {
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Quincena::Primera => "Primera Quincena",
            Quincena::Segunda => "Segunda Quincena",
        }
    }
}

pub fn quincena_del_dia(dia: u32) -> Quincena {
    if dia <= 15 {
        Quincena::Primera
    } else {
        Quincena::Segunda
    }
}

/// Fecha local almacenada por el backend: la porcion YYYY-MM-DD de la
/// marca de tiempo, sin conversion de zona horaria.
pub fn fecha_local(marca: &str) -> Option<NaiveDate> {
    let prefijo = marca.get(..10)?;
    NaiveDate::parse_from_str(prefijo, "%Y-%m-%d").ok()
}

/// Etiqueta "mes año" tal como la renderiza la interfaz ("agosto 2025").
pub fn etiqueta_mes(fecha: NaiveDate) -> String {
    format!("{} {}", MESES[fecha.month0() as usize], fecha.year())
}

#[derive(Debug, Serialize)]
pub struct GrupoQuincena {
    pub quincena: Quincena,
    /// Cargas aun activas: las que entrarian en una factura del grupo.
    pub activas: usize,
    pub cargas: Vec<Carga>,
}

fn contar_activas(cargas: &[Carga]) -> usize {
    cargas
        .iter()
        .filter(|c| c.estado == EstadoCarga::Activa)
        .count()
}

#[derive(Debug, Serialize)]
pub struct GrupoMes {
    pub etiqueta: String,
    pub quincenas: Vec<GrupoQuincena>,
}

struct Acumulador {
    anio: i32,
    mes: u32,
    etiqueta: String,
    primera: Vec<Carga>,
    segunda: Vec<Carga>,
}

/// Agrupa las cargas por mes y quincena preservando el orden recibido.
/// Los meses quedan en orden de primera aparicion; dentro de cada mes la
/// primera quincena precede a la segunda. Cada carga cae en exactamente un
/// grupo segun el dia de su fecha de creacion. Cargas con fecha no
/// parseable no se agrupan.
pub fn agrupar_por_quincena(cargas: Vec<Carga>) -> Vec<GrupoMes> {
    let mut meses: Vec<Acumulador> = Vec::new();

    for carga in cargas {
        let fecha = match fecha_local(&carga.fecha_creacion) {
            Some(fecha) => fecha,
            None => continue,
        };

        let posicion = meses
            .iter()
            .position(|m| m.anio == fecha.year() && m.mes == fecha.month());
        let acumulador = match posicion {
            Some(indice) => &mut meses[indice],
            None => {
                meses.push(Acumulador {
                    anio: fecha.year(),
                    mes: fecha.month(),
                    etiqueta: etiqueta_mes(fecha),
                    primera: Vec::new(),
                    segunda: Vec::new(),
                });
                meses.last_mut().unwrap()
            }
        };

        match quincena_del_dia(fecha.day()) {
            Quincena::Primera => acumulador.primera.push(carga),
            Quincena::Segunda => acumulador.segunda.push(carga),
        }
    }

    meses
        .into_iter()
        .map(|m| {
            let mut quincenas = Vec::new();
            if !m.primera.is_empty() {
                quincenas.push(GrupoQuincena {
                    quincena: Quincena::Primera,
                    activas: contar_activas(&m.primera),
                    cargas: m.primera,
                });
            }
            if !m.segunda.is_empty() {
                quincenas.push(GrupoQuincena {
                    quincena: Quincena::Segunda,
                    activas: contar_activas(&m.segunda),
                    cargas: m.segunda,
                });
            }
            GrupoMes {
                etiqueta: m.etiqueta,
                quincenas,
            }
        })
        .collect()
}
