// SPDX-FileCopyrightText: [2023] Serokell <hi@serokell.io>
// SPDX-FileCopyrightText: [2022-2023] TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Append-only byte buffer used by the encoders.
//!
//! All multi-byte integers are written big-endian. Values are written at
//! exactly their target width, so anything wider has to be truncated by the
//! caller (see [Writer::put_len]).

/// Length of some container, stored as a fixed-width number.
pub type Len = u32;

/// Growable output buffer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current length of the written data, in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Snapshot of the accumulated bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v)
    }

    pub fn write_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_be_bytes())
    }

    pub fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_be_bytes())
    }

    /// Signed values share the unsigned layout (two's complement).
    pub fn write_i8(&mut self, v: i8) {
        self.write_u8(v as u8)
    }

    pub fn write_i16(&mut self, v: i16) {
        self.write_u16(v as u16)
    }

    pub fn write_i32(&mut self, v: i32) {
        self.write_u32(v as u32)
    }

    /// Append raw bytes, no length prefix.
    pub fn write_bytes(&mut self, bs: &[u8]) {
        self.buf.extend_from_slice(bs)
    }

    /// Put the length of something. Lengths over `u32::MAX` wrap.
    pub fn put_len(&mut self, len: usize) {
        self.write_u32(len as Len)
    }

    /// Put a length-prefixed block whose content is produced by `f`.
    ///
    /// The length is unknown until `f` has run, so a zero placeholder is
    /// written first and patched afterwards. If `f` fails, the writer is left
    /// with partial data and must be discarded by the caller.
    pub fn with_patchback_len<E>(
        &mut self,
        f: impl FnOnce(&mut Writer) -> Result<(), E>,
    ) -> Result<(), E> {
        self.put_len(0);
        let start = self.buf.len();
        let len_place = (start - std::mem::size_of::<Len>())..start;
        f(self)?;
        let len_of_written = (self.buf.len() - start) as Len;
        self.buf[len_place].copy_from_slice(&len_of_written.to_be_bytes());
        Ok(())
    }

    /// Put bytes prefixed with their length.
    pub fn put_len_prefixed(&mut self, bs: &[u8]) {
        self.put_len(bs.len());
        self.write_bytes(bs)
    }
}

impl From<Writer> for Vec<u8> {
    fn from(w: Writer) -> Self {
        w.into_bytes()
    }
}

impl AsRef<[u8]> for Writer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_width_big_endian() {
        let mut w = Writer::new();
        w.write_u8(0xab);
        w.write_u16(0x0102);
        w.write_u32(0x0304_0506);
        assert_eq!(w.as_bytes(), &[0xab, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        assert_eq!(w.len(), 7);
    }

    #[test]
    fn signed_values_wrap() {
        let mut w = Writer::new();
        w.write_i8(-1);
        w.write_i16(-2);
        w.write_i32(-3);
        assert_eq!(
            w.into_bytes(),
            vec![0xff, 0xff, 0xfe, 0xff, 0xff, 0xff, 0xfd]
        );
    }

    #[test]
    fn patchback_len_matches_content() {
        let mut w = Writer::new();
        w.write_u8(0x02);
        w.with_patchback_len(|w| {
            w.write_bytes(b"abc");
            Ok::<_, ()>(())
        })
        .unwrap();
        assert_eq!(w.as_bytes(), b"\x02\x00\x00\x00\x03abc");
    }

    #[test]
    fn patchback_len_empty_block() {
        let mut w = Writer::new();
        w.with_patchback_len(|_| Ok::<_, ()>(())).unwrap();
        assert_eq!(w.as_bytes(), &[0, 0, 0, 0]);
    }

    #[test]
    fn patchback_len_propagates_error() {
        let mut w = Writer::new();
        let res = w.with_patchback_len(|w| {
            w.write_u8(1);
            Err("boom")
        });
        assert_eq!(res, Err("boom"));
    }
}
