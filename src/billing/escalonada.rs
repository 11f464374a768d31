use crate::models::Nivel;

/// Primer nivel cuyo rango inclusivo contiene la cantidad. Los niveles no
/// se superponen, asi que el primero que matchea es el unico.
pub fn resolver_nivel(niveles: &[Nivel], cantidad: i64) -> Option<&Nivel> {
    niveles
        .iter()
        .find(|n| n.desde <= cantidad && cantidad <= n.hasta)
}
