//! Drawing primitives sink and the creature render pipeline.

pub mod cpu;
pub mod pipeline;
pub mod sink;
