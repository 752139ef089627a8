#![doc = include_str!("../README.md")]
#![no_std]

pub use sx_reflect as reflect;
pub use sx_sexpr as sexpr;
