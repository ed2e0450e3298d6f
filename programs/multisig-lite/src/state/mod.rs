pub mod multisig;
pub mod transfer;

pub use multisig::*;
pub use transfer::*;
