//! Client-side glue for the `multisig-lite` program.
//!
//! The program does the heavy lifting on chain; this crate covers the
//! app side of it: deriving and caching the per-wallet PDAs, tracking
//! wallet connect/disconnect state, building instructions, and
//! fetching account data for display.

pub mod error;
pub mod ix;
pub mod page;
pub mod pda;
pub mod session;

pub use error::ClientError;
pub use page::{load, AccountFetcher, PageData};
pub use pda::{PdaCache, VaultAddresses};
pub use session::{Session, WalletState};
