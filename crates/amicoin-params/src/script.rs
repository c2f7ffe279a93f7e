//! Minimal script support
//!
//! Only what the parameter set needs: the founders-reward pay-to-script-hash
//! output and the genesis coinbase scripts.

use std::fmt;

/// Push the next byte as data.
pub const OP_PUSHDATA1: u8 = 0x4c;
/// Push the next two bytes (little-endian length) as data.
pub const OP_PUSHDATA2: u8 = 0x4d;
/// Push the next four bytes (little-endian length) as data.
pub const OP_PUSHDATA4: u8 = 0x4e;
/// Compare the top two stack items.
pub const OP_EQUAL: u8 = 0x87;
/// RIPEMD-160 of SHA-256 of the top stack item.
pub const OP_HASH160: u8 = 0xa9;
/// Verify a signature against a public key.
pub const OP_CHECKSIG: u8 = 0xac;

/// Serialized script bytes.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Script(Vec<u8>);

impl Script {
    /// Empty script.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// `OP_HASH160 <script hash> OP_EQUAL`
    pub fn p2sh(script_hash: &[u8; 20]) -> Self {
        Self::new()
            .push_opcode(OP_HASH160)
            .push_slice(script_hash)
            .push_opcode(OP_EQUAL)
    }

    /// Append a bare opcode.
    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    /// Append a data push using the shortest push form.
    ///
    /// Panics if `data` is longer than `u32::MAX` bytes.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        match data.len() {
            len if len < OP_PUSHDATA1 as usize => self.0.push(len as u8),
            len if len <= 0xff => {
                self.0.push(OP_PUSHDATA1);
                self.0.push(len as u8);
            }
            len if len <= 0xffff => {
                self.0.push(OP_PUSHDATA2);
                self.0.extend_from_slice(&(len as u16).to_le_bytes());
            }
            len => {
                let len = u32::try_from(len).expect("push larger than 4 GiB");
                self.0.push(OP_PUSHDATA4);
                self.0.extend_from_slice(&len.to_le_bytes());
            }
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Append a number as a minimally encoded script integer data push.
    pub fn push_scriptnum(self, value: i64) -> Self {
        let encoded = encode_scriptnum(value);
        self.push_slice(&encoded)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the script has the exact pay-to-script-hash shape.
    pub fn is_p2sh(&self) -> bool {
        self.0.len() == 23 && self.0[0] == OP_HASH160 && self.0[1] == 0x14 && self.0[22] == OP_EQUAL
    }

    /// Script hash of a pay-to-script-hash script.
    pub fn p2sh_hash(&self) -> Option<[u8; 20]> {
        if !self.is_p2sh() {
            return None;
        }
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&self.0[2..22]);
        Some(hash)
    }
}

fn encode_scriptnum(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut magnitude = value.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while magnitude > 0 {
        out.push((magnitude & 0xff) as u8);
        magnitude >>= 8;
    }

    // The top bit of the last byte carries the sign.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", hex::encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_p2sh_shape() {
        let script = Script::p2sh(&[0x11; 20]);
        assert!(script.is_p2sh());
        assert_eq!(script.len(), 23);
        assert_eq!(script.as_bytes()[0], OP_HASH160);
        assert_eq!(script.as_bytes()[1], 20);
        assert_eq!(script.as_bytes()[22], OP_EQUAL);
        assert_eq!(script.p2sh_hash(), Some([0x11; 20]));
    }

    #[test]
    fn test_scriptnum_encoding() {
        assert_eq!(encode_scriptnum(0), Vec::<u8>::new());
        assert_eq!(encode_scriptnum(4), vec![0x04]);
        assert_eq!(encode_scriptnum(-1), vec![0x81]);
        assert_eq!(encode_scriptnum(0x80), vec![0x80, 0x00]);
        assert_eq!(encode_scriptnum(520617983), vec![0xff, 0xff, 0x07, 0x1f]);
    }

    #[test]
    fn test_push_forms() {
        let short = Script::new().push_slice(&[0u8; 75]);
        assert_eq!(short.as_bytes()[0], 75);

        let medium = Script::new().push_slice(&[0u8; 76]);
        assert_eq!(&medium.as_bytes()[..2], &[OP_PUSHDATA1, 76]);

        let long = Script::new().push_slice(&[0u8; 300]);
        assert_eq!(&long.as_bytes()[..3], &[OP_PUSHDATA2, 0x2c, 0x01]);

        let widest_two_byte = Script::new().push_slice(&vec![0u8; 0xffff]);
        assert_eq!(&widest_two_byte.as_bytes()[..3], &[OP_PUSHDATA2, 0xff, 0xff]);
    }

    #[test]
    fn test_four_byte_push() {
        let data = vec![0u8; 70_000];
        let script = Script::new().push_slice(&data);
        assert_eq!(
            &script.as_bytes()[..5],
            &[OP_PUSHDATA4, 0x70, 0x11, 0x01, 0x00]
        );
        assert_eq!(script.len(), 5 + data.len());
    }
}
