//! Genotype handling: the bit-layout table and the gene codec.

pub mod codec;
