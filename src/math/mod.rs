pub mod line;
pub mod point;
pub mod vec;

pub use line::*;
pub use point::*;
pub use vec::*;
