//! CLI command implementations.

pub(crate) mod assemble;
pub(crate) mod expand;

pub(crate) use assemble::AssembleArgs;
pub(crate) use expand::ExpandArgs;
