pub mod carga;
pub mod factura;
pub mod instruccion;
pub mod numero;
pub mod sesion;
pub mod tarifa;

pub use carga::*;
pub use factura::*;
pub use instruccion::*;
pub use sesion::*;
pub use tarifa::*;
