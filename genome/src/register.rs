//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Bit register primitives
//!
//! A register is a fixed-width word addressed by `(offset, width)` ranges, where the
//! offset counts from the least significant bit. Writes are truncating: only the low
//! `width` bits of a value are stored.

/// Read and write bit ranges of a fixed-width word by value.
pub trait BitRegister: Copy {
    /// Extract `width` bits starting at `offset`.
    fn read_bits(self, offset: u32, width: u32) -> u64;

    /// Return a copy of the register with `width` bits at `offset` replaced by the low
    /// bits of `value`.
    fn write_bits(self, offset: u32, width: u32, value: u64) -> Self;
}

/// Mask covering the low `width` bits.
pub const fn mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

impl BitRegister for u64 {
    fn read_bits(self, offset: u32, width: u32) -> u64 {
        debug_assert!(offset + width <= u64::BITS, "bit range out of register");
        (self >> offset) & mask(width)
    }

    fn write_bits(self, offset: u32, width: u32, value: u64) -> Self {
        debug_assert!(offset + width <= u64::BITS, "bit range out of register");
        let field_mask = mask(width);
        if value & !field_mask != 0 {
            tracing::trace!(
                offset,
                width,
                value,
                stored = value & field_mask,
                "Truncating value to register field width"
            );
        }
        (self & !(field_mask << offset)) | ((value & field_mask) << offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_mask() {
        assert_eq!(mask(1), 0b1);
        assert_eq!(mask(4), 0b1111);
        assert_eq!(mask(63), u64::MAX >> 1);
        assert_eq!(mask(64), u64::MAX);
    }

    #[test]
    fn test_read_bits() {
        let word: u64 = 0xF0F0_0000_0000_00AB;
        assert_eq!(word.read_bits(60, 4), 0xF);
        assert_eq!(word.read_bits(56, 4), 0x0);
        assert_eq!(word.read_bits(0, 8), 0xAB);
        assert_eq!(word.read_bits(0, 64), word);
    }

    #[test]
    fn test_write_bits_preserves_neighbours() {
        let word = u64::MAX.write_bits(8, 4, 0);
        assert_eq!(word, 0xFFFF_FFFF_FFFF_F0FF);

        let word = 0u64.write_bits(62, 2, 0b11);
        assert_eq!(word, 0xC000_0000_0000_0000);
    }

    #[test]
    fn test_write_bits_truncates() {
        // 0b1_0110 keeps only its low three bits.
        let word = 0u64.write_bits(4, 3, 0b1_0110);
        assert_eq!(word.read_bits(4, 3), 0b110);
        assert_eq!(word, 0b110_0000);
    }

    #[test]
    #[traced_test]
    fn test_truncation_is_traced() {
        let _ = 0u64.write_bits(0, 2, 0b111);
        assert!(logs_contain("Truncating value to register field width"));
    }

    #[test]
    fn test_write_bits_is_by_value() {
        let original: u64 = 0x1234;
        let updated = original.write_bits(0, 4, 0xF);
        assert_eq!(original, 0x1234);
        assert_eq!(updated, 0x123F);
    }
}
