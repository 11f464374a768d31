use serde::{Deserialize, Deserializer};

/// El backend serializa las columnas decimales a veces como numero y a
/// veces como texto ("150.50"). Estos helpers aceptan ambas formas.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumeroOTexto {
    Numero(f64),
    Texto(String),
}

fn convertir<E: serde::de::Error>(valor: NumeroOTexto) -> Result<f64, E> {
    match valor {
        NumeroOTexto::Numero(n) => Ok(n),
        NumeroOTexto::Texto(t) => t
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("valor numerico invalido: '{}'", t))),
    }
}

pub fn flotante<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    convertir(NumeroOTexto::deserialize(deserializer)?)
}

/// Como `flotante`, pero tolera null o campo vacio (queda en 0.0).
pub fn flotante_o_cero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumeroOTexto>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(NumeroOTexto::Texto(t)) if t.trim().is_empty() => Ok(0.0),
        Some(valor) => convertir(valor),
    }
}

pub fn flotante_opcional<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumeroOTexto>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumeroOTexto::Texto(t)) if t.trim().is_empty() => Ok(None),
        Some(valor) => convertir(valor).map(Some),
    }
}

pub fn entero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    convertir(NumeroOTexto::deserialize(deserializer)?).map(|n| n as i64)
}

/// Como `entero`, pero tolera null (queda en 0).
pub fn entero_o_cero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumeroOTexto>::deserialize(deserializer)? {
        None => Ok(0),
        Some(NumeroOTexto::Texto(t)) if t.trim().is_empty() => Ok(0),
        Some(valor) => convertir(valor).map(|n| n as i64),
    }
}
