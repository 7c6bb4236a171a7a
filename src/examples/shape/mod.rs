pub mod fp;
pub mod oop;
