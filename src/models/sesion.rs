use serde::{Deserialize, Serialize};

/// Sesion en curso contra el backend. El token vive en el cliente HTTP;
/// aca solo queda la identidad para mostrar en la interfaz.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SesionActiva {
    pub mail: String,
}
