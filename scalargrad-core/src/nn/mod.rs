// scalargrad-core/src/nn/mod.rs
// Neural-network building blocks on top of the engine: module trait,
// layers, initialization schemes and losses.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;

// Re-export common items
pub use init::Init;
pub use layers::{Activation, Layer, Mlp, Neuron};
pub use losses::{MseLoss, Reduction};
pub use module::Module;
