mod command;
mod render;

pub use self::{command::*, render::*};
