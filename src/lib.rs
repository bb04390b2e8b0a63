#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod compliance;
pub mod design;
pub mod drag;
pub mod element;
pub mod error;
pub mod export;
pub mod history;
pub mod id_generator;
pub mod panels;
pub mod renderer;
pub mod session;
pub mod upload;
pub mod util;

pub use app::StudioApp;
pub use canvas::{CanvasSize, Zoom};
pub use design::Design;
pub use drag::{DragController, DragState};
pub use element::{Element, ShapeKind};
pub use error::ValidationError;
pub use history::SnapshotHistory;
pub use renderer::Renderer;
