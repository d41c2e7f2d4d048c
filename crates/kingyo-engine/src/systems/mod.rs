pub mod focus;
pub mod movement;
pub mod render;
pub mod simulation;
pub mod spawn;
