pub mod apply;
pub mod noise;

pub use apply::passes_filters;
pub use noise::{DefaultNoiseClassifier, NoNoise, NoiseClassifier};
