mod counter;
mod iupac;
mod locator;
mod matrix;
mod pattern;

pub use counter::*;
pub use iupac::*;
pub use locator::*;
pub use matrix::*;
pub use pattern::*;
