pub mod generics;
pub mod shape;
