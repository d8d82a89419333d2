use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

pub type HmacSha256 = Hmac<Sha256>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GameResult {
    pub player_name: String,
    pub player_uuid: String,
    pub score: u32,
    pub ticks_per_sec: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SignedGameResult {
    pub game_result: GameResult,
    /// Raw digest bytes, serialized as a JSON array of integers.
    /// The name is wrong but the server expects it, so it stays.
    pub hex_digest: Vec<u8>,
}

impl GameResult {
    fn mac(&self, secret: &[u8]) -> HmacSha256 {
        // Hmac accepts keys of any length, so new_from_slice cannot fail
        let mut mac = HmacSha256::new_from_slice(secret).expect("hmac key");
        mac.update(self.player_name.as_bytes());
        mac.update(self.player_uuid.as_bytes());
        mac.update(&self.score.to_be_bytes());
        mac.update(&self.ticks_per_sec.to_be_bytes());
        mac
    }

    /// The 32-byte HMAC-SHA256 over name || uuid || be32(score) || be32(ticks).
    /// The concatenation order is part of the wire contract.
    pub fn digest(&self, secret: &[u8]) -> Vec<u8> {
        self.mac(secret).finalize().into_bytes().to_vec()
    }

    pub fn sign(self, secret: &[u8]) -> SignedGameResult {
        let hex_digest = self.digest(secret);
        SignedGameResult {
            game_result: self,
            hex_digest,
        }
    }
}

impl SignedGameResult {
    pub fn verify(&self, secret: &[u8]) -> bool {
        self.game_result.mac(secret).verify_slice(&self.hex_digest).is_ok()
    }
}
