pub mod approve;
pub mod close;
pub mod create;
pub mod create_transfer;
pub mod fund;

// Every module names its entry point `handler`, so the globs overlap there.
#[allow(ambiguous_glob_reexports)]
pub use {approve::*, close::*, create::*, create_transfer::*, fund::*};
