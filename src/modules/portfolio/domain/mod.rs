pub mod assemble;
pub mod entities;
