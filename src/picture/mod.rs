/// The picture handle and its content variants.
pub mod model;
