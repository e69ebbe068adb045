pub mod browse;

pub use browse::*;
