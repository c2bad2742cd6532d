mod into_iter;
mod walk;

pub use into_iter::*;
pub use walk::*;
