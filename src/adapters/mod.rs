mod remote;
mod terminal;
mod timer;

pub use self::{remote::*, terminal::*, timer::*};
