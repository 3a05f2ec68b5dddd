//! Access checker adapters.

mod passphrase_checker;

pub use passphrase_checker::{OpenAccessChecker, PassphraseAccessChecker};
