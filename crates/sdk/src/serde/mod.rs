/// Pubkey serialization.
pub mod string_pubkey;

pub use string_pubkey::StringPubkey;
