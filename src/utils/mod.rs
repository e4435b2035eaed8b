mod arena;
pub(crate) use arena::Arena;
