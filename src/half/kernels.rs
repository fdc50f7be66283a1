//! Single-precision leaf kernels.
//!
//! With `std` these are the `f32` methods. Without it they are the C math
//! library entry points the platform links in.

macro_rules! leaf_kernels {
    ($($name:ident($first:ident $(, $rest:ident)*) => $method:ident;)*) => {
        $(
            #[cfg(feature = "std")]
            #[inline]
            pub(crate) fn $name($first: f32 $(, $rest: f32)*) -> f32 {
                $first.$method($($rest),*)
            }
        )*

        #[cfg(not(feature = "std"))]
        mod libm {
            unsafe extern "C" {
                $(pub(crate) safe fn $name($first: f32 $(, $rest: f32)*) -> f32;)*
            }
        }

        #[cfg(not(feature = "std"))]
        pub(crate) use libm::{$($name),*};
    };
}

leaf_kernels! {
    sinf(x) => sin;
    cosf(x) => cos;
    expf(x) => exp;
    logf(x) => ln;
    sqrtf(x) => sqrt;
    sinhf(x) => sinh;
    coshf(x) => cosh;
    hypotf(x, y) => hypot;
    atan2f(y, x) => atan2;
}
