//! Creature assembly: appendages, features and the trait-derived palette.

pub mod eyes;
pub mod head;
pub mod limbs;
pub mod palette;
pub mod spikes;
pub mod tail;
