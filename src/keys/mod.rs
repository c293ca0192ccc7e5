//! DSA-style key containers, split across two files the way `dsa`'s
//! `privatekey.rs`/`publickey.rs` are, since a [`PublicKey`] is reachable
//! from a [`PrivateKey`] but not vice versa.

mod private_key;
mod public_key;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
