//! # Half-Precision Math
//!
//! Transcendental routines over [`f16`], dispatched per target:
//!
//! | routine | native path | portable path |
//! |---------|-------------|---------------|
//! | `sin` `cos` `exp` `log` | `provides_sm_53` | widened to `f32`, corrected |
//! | `sqrt` | `is_device` | widened to `f32` |
//! | `sinh` `cosh` `hypot` `atan2` | - | widened to `f32` |
//!
//! The portable path is [`fallback`] and stays callable on every target.
//! Device passes without a revision (`amdgpu`, `--cfg tola_device`) still
//! take the native `sqrt`, so their runtime must provide `hsqrt`.
//!
//! ```
//! use tola_target::half::{self, f16};
//!
//! let x = f16::from_f32(0.5);
//! assert_eq!(half::sqrt(f16::from_f32(4.0)), f16::from_f32(2.0));
//! assert!((half::sin(x).to_f32() - 0.479).abs() < 1e-3);
//! ```

pub mod fallback;
mod kernels;

pub use ::half::f16;

use crate::target::{target_cfg, target_if};

/// Native half-precision kernels of the device runtime.
#[target_cfg(is_device)]
mod native {
    use ::half::f16;

    macro_rules! native_kernels {
        ($($name:ident => $kernel:ident;)*) => {
            unsafe extern "C" {
                $(safe fn $kernel(x: u16) -> u16;)*
            }

            $(
                #[inline]
                pub(super) fn $name(x: f16) -> f16 {
                    f16::from_bits($kernel(x.to_bits()))
                }
            )*
        };
    }

    native_kernels! {
        sin => hsin;
        cos => hcos;
        exp => hexp;
        log => hlog;
        sqrt => hsqrt;
    }
}

pub fn sin(x: f16) -> f16 {
    target_if! {
        provides_sm_53 => { native::sin(x) },
        else => { fallback::sin(x) },
    }
}

pub fn cos(x: f16) -> f16 {
    target_if! {
        provides_sm_53 => { native::cos(x) },
        else => { fallback::cos(x) },
    }
}

pub fn exp(x: f16) -> f16 {
    target_if! {
        provides_sm_53 => { native::exp(x) },
        else => { fallback::exp(x) },
    }
}

/// Natural logarithm.
pub fn log(x: f16) -> f16 {
    target_if! {
        provides_sm_53 => { native::log(x) },
        else => { fallback::log(x) },
    }
}

pub fn sqrt(x: f16) -> f16 {
    target_if! {
        is_device => { native::sqrt(x) },
        else => { fallback::sqrt(x) },
    }
}

macro_rules! widened {
    ($($(#[$meta:meta])* $name:ident($($arg:ident),+);)*) => {
        paste::paste! {
            $(
                $(#[$meta])*
                pub fn $name($($arg: f16),+) -> f16 {
                    f16::from_f32(kernels::[<$name f>]($($arg.to_f32()),+))
                }
            )*
        }
    };
}

widened! {
    sinh(x);
    cosh(x);
    hypot(x, y);
    /// Angle of the point `(x, y)`, with `y` first.
    atan2(y, x);
}

// Helpers

pub const fn signbit(x: f16) -> bool {
    x.to_bits() & SIGN != 0
}

pub const fn isnan(x: f16) -> bool {
    x.to_bits() & !SIGN > EXP_MASK
}

pub const fn isinf(x: f16) -> bool {
    x.to_bits() & !SIGN == EXP_MASK
}

pub const fn isfinite(x: f16) -> bool {
    x.to_bits() & EXP_MASK != EXP_MASK
}

/// Magnitude of `x` with the sign of `y`.
pub const fn copysign(x: f16, y: f16) -> f16 {
    f16::from_bits((x.to_bits() & !SIGN) | (y.to_bits() & SIGN))
}

pub const fn fabs(x: f16) -> f16 {
    f16::from_bits(x.to_bits() & !SIGN)
}

pub const fn abs(x: f16) -> f16 {
    fabs(x)
}

/// The larger argument. A NaN argument yields the other one; two NaNs yield NaN.
pub fn fmax(x: f16, y: f16) -> f16 {
    match (isnan(x), isnan(y)) {
        (true, true) => nan(),
        (true, false) => y,
        (false, true) => x,
        (false, false) => {
            if y > x {
                y
            } else {
                x
            }
        }
    }
}

pub const fn nan() -> f16 {
    f16::NAN
}

pub const fn infinity() -> f16 {
    f16::INFINITY
}

const SIGN: u16 = 0x8000;
const EXP_MASK: u16 = 0x7c00;

#[cfg(test)]
mod tests {
    use super::*;

    fn h(bits: u16) -> f16 {
        f16::from_bits(bits)
    }

    // Every listed input must come out correctly rounded.
    #[test]
    fn test_fixup_inputs_are_correctly_rounded() {
        let cases: &[(fn(f16) -> f16, u16, u16)] = &[
            (sin, 12979, 12967),
            (sin, 45747, 45735),
            (sin, 23728, 48127),
            (sin, 56496, 15359),
            (cos, 11132, 15357),
            (cos, 43900, 15357),
            (exp, 8057, 15367),
            (exp, 9679, 15383),
            (log, 7544, 50491),
        ];
        for &(routine, input, expected) in cases {
            assert_eq!(routine(h(input)).to_bits(), expected, "input {input}");
        }
    }

    #[test]
    fn test_sqrt_and_widened_routines() {
        assert_eq!(sqrt(f16::from_f32(9.0)), f16::from_f32(3.0));
        assert_eq!(hypot(f16::from_f32(3.0), f16::from_f32(4.0)), f16::from_f32(5.0));
        assert_eq!(cosh(f16::ZERO), f16::ONE);
        assert_eq!(sinh(f16::ZERO), f16::ZERO);
        assert!(atan2(f16::ONE, f16::ZERO).to_f32() > 1.57);
        assert!(isnan(sqrt(f16::NEG_ONE)));
    }

    #[test]
    fn test_classification() {
        assert!(signbit(f16::NEG_ZERO));
        assert!(!signbit(f16::ZERO));
        assert!(isnan(nan()));
        assert!(!isnan(infinity()));
        assert!(isinf(infinity()) && isinf(f16::NEG_INFINITY));
        assert!(!isinf(f16::MAX));
        assert!(isfinite(f16::MAX) && !isfinite(nan()) && !isfinite(infinity()));
    }

    #[test]
    fn test_sign_helpers() {
        let two = f16::from_f32(2.0);
        assert_eq!(copysign(two, f16::NEG_ONE), f16::from_f32(-2.0));
        assert_eq!(copysign(-two, f16::ONE), two);
        assert_eq!(fabs(-two), two);
        assert_eq!(abs(f16::NEG_INFINITY), infinity());
    }

    #[test]
    fn test_fmax() {
        let one = f16::ONE;
        let two = f16::from_f32(2.0);
        assert_eq!(fmax(one, two), two);
        assert_eq!(fmax(two, one), two);
        assert_eq!(fmax(nan(), one), one);
        assert_eq!(fmax(one, nan()), one);
        assert!(isnan(fmax(nan(), nan())));
    }
}
