//! Fixed 24-byte container header

use super::{BPLX_MAGIC, BPLX_VERSION};

/// Reserved-word bit a future version will set when a material section
/// follows the clip section. Version 1 never sets it.
pub const RESERVED_MATERIALS_FLAG: u32 = 1 << 0;

/// BPLX header (24 bytes, magic included)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct BplxHeader {
    pub version: u32,
    pub vertex_count: u32,
    pub face_count: u32,
    pub material_count: u32,
    /// Section flags for future versions (must be 0)
    pub reserved: u32,
}

impl BplxHeader {
    pub const SIZE: usize = 24;

    pub fn new(vertex_count: u32, face_count: u32, material_count: u32) -> Self {
        Self {
            version: BPLX_VERSION,
            vertex_count,
            face_count,
            material_count,
            reserved: 0,
        }
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&BPLX_MAGIC);
        bytes[4..8].copy_from_slice(&self.version.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.vertex_count.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.face_count.to_le_bytes());
        bytes[16..20].copy_from_slice(&self.material_count.to_le_bytes());
        bytes[20..24].copy_from_slice(&self.reserved.to_le_bytes());
        bytes
    }

    /// Read header fields from bytes. Magic is not checked here.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        let word = |at: usize| u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
        Some(Self {
            version: word(4),
            vertex_count: word(8),
            face_count: word(12),
            material_count: word(16),
            reserved: word(20),
        })
    }

    /// Size of the vertex attribute and face index blocks that follow
    pub fn geometry_size(&self) -> usize {
        (self.vertex_count as usize)
            .saturating_mul(super::VERTEX_SIZE)
            .saturating_add((self.face_count as usize).saturating_mul(super::FACE_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip() {
        let header = BplxHeader::new(8, 12, 1);
        assert_eq!(header.version, 1);
        assert_eq!(header.reserved, 0);

        let bytes = header.to_bytes();
        assert_eq!(&bytes[0..4], b"BPLX");
        assert_eq!(&bytes[4..8], &[1, 0, 0, 0]);
        assert_eq!(&bytes[20..24], &[0, 0, 0, 0]);

        let parsed = BplxHeader::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_header_from_short_bytes() {
        assert!(BplxHeader::from_bytes(&[0u8; 23]).is_none());
    }

    #[test]
    fn test_geometry_size() {
        // 8 × 32 + 12 × 12
        assert_eq!(BplxHeader::new(8, 12, 1).geometry_size(), 400);
    }

    #[test]
    fn test_geometry_size_of_hostile_counts() {
        // Saturates on 32-bit targets instead of overflowing
        let size = BplxHeader::new(u32::MAX, u32::MAX, 0).geometry_size();
        let per_record = (crate::formats::VERTEX_SIZE + crate::formats::FACE_SIZE) as u64;
        let expected = (u32::MAX as u64 * per_record).min(usize::MAX as u64);
        assert_eq!(size as u64, expected);
    }
}
