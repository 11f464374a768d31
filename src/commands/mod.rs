pub mod cargas;
pub mod config;
pub mod exportar;
pub mod facturas;
pub mod instrucciones;
pub mod reportes;
pub mod sesion;
pub mod tarifas;
