// scalargrad-core/src/nn/losses/mod.rs

pub mod mse;

pub use mse::{MseLoss, Reduction};
