mod stroke;
pub use stroke::*;

mod scoring;
pub use scoring::*;

mod aggregate;
pub use aggregate::*;
