//! Shared constants for toy curve encodings

/// Size of a toy field element or scalar in bytes (one big-endian `u64`)
pub const TOY_FIELD_ELEMENT_SIZE: usize = 8;

/// Size of an uncompressed toy point in bytes:
/// format byte (0x04) + x-coordinate + y-coordinate
pub const TOY_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * TOY_FIELD_ELEMENT_SIZE; // 17 bytes
