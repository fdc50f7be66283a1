//! Portable routines for targets without native half-precision kernels.
//!
//! The argument is widened to `f32`, passed through the leaf kernel and
//! rounded to nearest-even back to `f16`. Double rounding makes a handful of
//! inputs land one unit off the correctly rounded result, which is also what
//! the native kernels return; those are listed per routine and nudged after
//! the conversion.

use ::half::f16;

use super::kernels;

/// Adjustment applied to the result for one input bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixup {
    pub input: u16,
    pub delta: i16,
}

const fn fixup(input: u16, delta: i16) -> Fixup {
    Fixup { input, delta }
}

pub const SIN_FIXUPS: &[Fixup] = &[fixup(12979, 1), fixup(45747, 1), fixup(23728, -1), fixup(56496, -1)];
pub const COS_FIXUPS: &[Fixup] = &[fixup(11132, 1), fixup(43900, 1)];
pub const EXP_FIXUPS: &[Fixup] = &[fixup(8057, -1), fixup(9679, -1)];
pub const LOG_FIXUPS: &[Fixup] = &[fixup(7544, -1)];

/// Round `wide` to `f16`, then apply the entry of `table` matching `x`.
pub fn corrected(x: f16, wide: f32, table: &[Fixup]) -> f16 {
    let bits = f16::from_f32(wide).to_bits();
    let input = x.to_bits();
    match table.iter().find(|f| f.input == input) {
        Some(f) => f16::from_bits(bits.wrapping_add_signed(f.delta)),
        None => f16::from_bits(bits),
    }
}

pub fn sin(x: f16) -> f16 {
    corrected(x, kernels::sinf(x.to_f32()), SIN_FIXUPS)
}

pub fn cos(x: f16) -> f16 {
    corrected(x, kernels::cosf(x.to_f32()), COS_FIXUPS)
}

pub fn exp(x: f16) -> f16 {
    corrected(x, kernels::expf(x.to_f32()), EXP_FIXUPS)
}

pub fn log(x: f16) -> f16 {
    corrected(x, kernels::logf(x.to_f32()), LOG_FIXUPS)
}

pub fn sqrt(x: f16) -> f16 {
    f16::from_f32(kernels::sqrtf(x.to_f32()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrected_only_touches_listed_inputs() {
        let table = &[fixup(0x3c00, -1)];
        let one = f16::from_f32(1.0);
        assert_eq!(corrected(one, 2.0, table).to_bits(), f16::from_f32(2.0).to_bits() - 1);
        assert_eq!(corrected(f16::from_f32(3.0), 2.0, table), f16::from_f32(2.0));
        assert_eq!(corrected(one, 2.0, &[]), f16::from_f32(2.0));
    }

    #[test]
    fn test_tables_have_no_duplicate_inputs() {
        for table in [SIN_FIXUPS, COS_FIXUPS, EXP_FIXUPS, LOG_FIXUPS] {
            for (i, a) in table.iter().enumerate() {
                assert!(table[i + 1..].iter().all(|b| b.input != a.input));
            }
        }
    }
}
