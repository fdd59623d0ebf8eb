use base64::{engine::general_purpose::STANDARD, Engine};
use pact_decode::RawAccount;
use pact_solana_utils::{
    solana_account_decoder_client_types::{UiAccount, UiAccountData, UiAccountEncoding},
    solana_rpc_client_api::response::RpcKeyedAccount,
};
use solana_sdk::pubkey::Pubkey;

/// Convert an account in its RPC wire form into a [`RawAccount`].
///
/// Only encodings that carry the raw bytes are accepted: base64, and base58
/// (including the legacy bare-string form). Compressed and parsed
/// encodings are rejected with [`Error::UnsupportedEncoding`](crate::Error::UnsupportedEncoding).
pub fn decode_ui_account(address: Pubkey, account: &UiAccount) -> crate::Result<RawAccount> {
    let data = match &account.data {
        UiAccountData::Binary(data, UiAccountEncoding::Base64) => STANDARD.decode(data)?,
        UiAccountData::Binary(data, UiAccountEncoding::Base58 | UiAccountEncoding::Binary)
        | UiAccountData::LegacyBinary(data) => bs58::decode(data).into_vec()?,
        UiAccountData::Binary(_, encoding) => {
            return Err(crate::Error::UnsupportedEncoding(*encoding));
        }
        UiAccountData::Json(_) => {
            return Err(crate::Error::UnsupportedEncoding(
                UiAccountEncoding::JsonParsed,
            ));
        }
    };
    let owner = account.owner.parse()?;
    Ok(RawAccount::new(address, owner, account.lamports, data))
}

/// Convert a keyed account returned by `getProgramAccounts` into a [`RawAccount`].
pub fn decode_keyed_account(keyed: &RpcKeyedAccount) -> crate::Result<RawAccount> {
    decode_ui_account(keyed.pubkey.parse()?, &keyed.account)
}
