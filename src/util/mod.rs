pub mod assertions;
pub mod io;
pub mod svg_exporter;
