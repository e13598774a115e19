pub mod assemble;
pub mod entities;
pub mod slug;
