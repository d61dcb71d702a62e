//! Text layout of the generated header: the fixed template around the array
//! and the hex rows inside it.

pub mod rows;
pub mod template;
