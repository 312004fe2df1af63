//! UI module: screen controllers driven through a view surface.

pub mod screens;

pub use screens::Screen;
