mod field;
mod model;
mod target;

pub use field::Field;
pub use model::{Model, ModelItem};
pub use target::{GoField, GoItem, GoModel};
