// Math utilities and helper functions

pub mod math;
