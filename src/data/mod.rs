pub mod canvas;
pub mod input;
pub mod overlap;
pub mod point;
pub mod scene;
pub mod surface;
