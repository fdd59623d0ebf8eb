use solana_sdk::pubkey::Pubkey;

use crate::Error;

/// Length of a public key field.
pub const PUBKEY_LEN: usize = 32;

/// Length of a `u32` length prefix.
pub const LENGTH_PREFIX_LEN: usize = 4;

/// A sequential reader over account bytes.
///
/// Every read advances the offset. A read that would run past the end of the
/// buffer fails with [`Error::BufferTooShort`] and leaves the offset untouched.
/// Offsets reported in errors are relative to the start of the wrapped buffer,
/// so a cursor over a full account reports account offsets.
#[derive(Debug, Clone)]
pub struct AccountCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> AccountCursor<'a> {
    /// Create a cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Create a cursor positioned at `offset`.
    pub fn with_offset(data: &'a [u8], offset: usize) -> crate::Result<Self> {
        if offset > data.len() {
            return Err(Error::buffer_too_short("offset", 0, offset, data.len()));
        }
        Ok(Self { data, offset })
    }

    /// Current offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Returns whether all bytes have been read.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read the next `len` bytes.
    pub fn read_bytes(&mut self, len: usize, field: &'static str) -> crate::Result<&'a [u8]> {
        let available = self.remaining();
        if len > available {
            return Err(Error::buffer_too_short(field, self.offset, len, available));
        }
        let start = self.offset;
        self.offset += len;
        Ok(&self.data[start..self.offset])
    }

    /// Read the next `N` bytes into an array.
    pub fn read_fixed_bytes<const N: usize>(
        &mut self,
        field: &'static str,
    ) -> crate::Result<[u8; N]> {
        let bytes = self.read_bytes(N, field)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read a `u8`.
    pub fn read_u8(&mut self, field: &'static str) -> crate::Result<u8> {
        let [value] = self.read_fixed_bytes::<1>(field)?;
        Ok(value)
    }

    /// Read a little-endian `u16`.
    pub fn read_u16_le(&mut self, field: &'static str) -> crate::Result<u16> {
        self.read_fixed_bytes(field).map(u16::from_le_bytes)
    }

    /// Read a little-endian `u32`.
    pub fn read_u32_le(&mut self, field: &'static str) -> crate::Result<u32> {
        self.read_fixed_bytes(field).map(u32::from_le_bytes)
    }

    /// Read a little-endian `u64`.
    pub fn read_u64_le(&mut self, field: &'static str) -> crate::Result<u64> {
        self.read_fixed_bytes(field).map(u64::from_le_bytes)
    }

    /// Read a little-endian `i64`.
    pub fn read_i64_le(&mut self, field: &'static str) -> crate::Result<i64> {
        self.read_fixed_bytes(field).map(i64::from_le_bytes)
    }

    /// Read a 32-byte address.
    pub fn read_pubkey(&mut self, field: &'static str) -> crate::Result<Pubkey> {
        self.read_fixed_bytes::<PUBKEY_LEN>(field)
            .map(Pubkey::new_from_array)
    }

    /// Read a `u32` length prefix followed by that many bytes.
    ///
    /// The prefix is only consumed if the whole payload is present.
    pub fn read_length_prefixed_bytes(&mut self, field: &'static str) -> crate::Result<&'a [u8]> {
        let start = self.offset;
        let len = self.read_u32_le(field)? as usize;
        match self.read_bytes(len, field) {
            Ok(bytes) => Ok(bytes),
            Err(err) => {
                self.offset = start;
                Err(err)
            }
        }
    }

    /// Read a length-prefixed UTF-8 string.
    pub fn read_length_prefixed_string(&mut self, field: &'static str) -> crate::Result<String> {
        let start = self.offset;
        let bytes = self.read_length_prefixed_bytes(field)?;
        match std::str::from_utf8(bytes) {
            Ok(s) => Ok(s.to_owned()),
            Err(_) => {
                let offset = start + LENGTH_PREFIX_LEN;
                self.offset = start;
                Err(Error::InvalidUtf8 { field, offset })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_fixed_width_integers_little_endian() {
        let mut data = vec![0xab];
        data.extend_from_slice(&0x1234u16.to_le_bytes());
        data.extend_from_slice(&0xdead_beefu32.to_le_bytes());
        data.extend_from_slice(&u64::MAX.to_le_bytes());
        data.extend_from_slice(&(-42i64).to_le_bytes());

        let mut cursor = AccountCursor::new(&data);
        assert_eq!(cursor.read_u8("a").unwrap(), 0xab);
        assert_eq!(cursor.read_u16_le("b").unwrap(), 0x1234);
        assert_eq!(cursor.read_u32_le("c").unwrap(), 0xdead_beef);
        assert_eq!(cursor.read_u64_le("d").unwrap(), u64::MAX);
        assert_eq!(cursor.read_i64_le("e").unwrap(), -42);
        assert!(cursor.is_empty());
    }

    #[test]
    fn short_read_reports_field_and_offset() {
        let data = [0u8; 10];
        let mut cursor = AccountCursor::with_offset(&data, 8).unwrap();
        let err = cursor.read_u32_le("fee").unwrap_err();
        assert_eq!(
            err,
            Error::BufferTooShort {
                field: "fee",
                offset: 8,
                needed: 4,
                available: 2,
            }
        );
        assert_eq!(cursor.offset(), 8);
    }

    #[test]
    fn reads_pubkey() {
        let key = Pubkey::new_unique();
        let mut cursor = AccountCursor::new(key.as_ref());
        assert_eq!(cursor.read_pubkey("key").unwrap(), key);
    }

    #[test]
    fn length_prefix_beyond_buffer_fails() {
        let mut data = 100u32.to_le_bytes().to_vec();
        data.extend_from_slice(b"short");
        let mut cursor = AccountCursor::new(&data);
        let err = cursor.read_length_prefixed_string("name").unwrap_err();
        assert_eq!(
            err,
            Error::BufferTooShort {
                field: "name",
                offset: 4,
                needed: 100,
                available: 5,
            }
        );
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let mut data = 2u32.to_le_bytes().to_vec();
        data.extend_from_slice(&[0xff, 0xfe]);
        let mut cursor = AccountCursor::new(&data);
        assert_eq!(
            cursor.read_length_prefixed_string("name").unwrap_err(),
            Error::InvalidUtf8 {
                field: "name",
                offset: 4
            }
        );
    }

    #[test]
    fn length_prefixed_bytes_skip_utf8_validation() {
        let mut data = 2u32.to_le_bytes().to_vec();
        data.extend_from_slice(&[0xff, 0xfe]);
        data.push(7);
        let mut cursor = AccountCursor::new(&data);
        assert_eq!(
            cursor.read_length_prefixed_bytes("uri").unwrap(),
            &[0xff, 0xfe]
        );
        assert_eq!(cursor.read_u8("bump").unwrap(), 7);
    }

    #[test]
    fn empty_string() {
        let data = 0u32.to_le_bytes();
        let mut cursor = AccountCursor::new(&data);
        assert_eq!(cursor.read_length_prefixed_string("name").unwrap(), "");
        assert!(cursor.is_empty());
    }
}
