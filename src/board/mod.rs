pub mod interactions;
pub mod motion;
pub mod plugin;
pub mod shapes;
pub mod spawn;
pub mod tunables;
