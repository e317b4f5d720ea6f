use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

/// Sender of simulated calls. Backed by a freshly generated key that is
/// dropped right away: nothing is ever signed or broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationIdentity {
    pub from: Address,
}

impl SimulationIdentity {
    pub fn random() -> Self {
        let signer = PrivateKeySigner::random();

        Self {
            from: signer.address(),
        }
    }
}
