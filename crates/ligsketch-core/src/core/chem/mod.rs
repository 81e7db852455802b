//! Chemistry heuristics that work on text rather than geometry: element tables, the formula
//! tokenizer, the descriptor calculator, and protein-sequence normalization.

pub mod descriptors;
pub mod elements;
pub mod formula;
pub mod sequence;
