use std::str::FromStr;

use alloy::{primitives::Address, signers::local::PrivateKeySigner};

/// A claimer account. The key only ever yields the address used to label log lines.
#[derive(Clone)]
pub struct Account {
    signer: PrivateKeySigner,
}

impl Account {
    pub fn from_private_key(private_key: &str) -> eyre::Result<Self> {
        let signer = PrivateKeySigner::from_str(private_key.trim())?;
        Ok(Self { signer })
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }
}
