/// Group of useful computations
pub mod computations;
pub mod keyed_vec;

pub use computations::*;
pub use keyed_vec::KeyedVec;
