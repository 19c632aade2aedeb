pub mod dot;
pub mod graph_loader;
pub mod tables;
