//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;
    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True: the capability or fact holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;

    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Present;
}

impl SelectBool<false> for () {
    type Out = Absent;
}

/// Type-level Bool for a const bool.
pub type Flag<const C: bool> = <() as SelectBool<C>>::Out;

/// Conditional Type Alias
pub type If<const C: bool, T, E> = <Flag<C> as Bool>::If<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logic_tables() {
        assert!(<<Present as Bool>::And<Present> as Bool>::VALUE);
        assert!(!<<Present as Bool>::And<Absent> as Bool>::VALUE);
        assert!(<<Absent as Bool>::Or<Present> as Bool>::VALUE);
        assert!(!<<Absent as Bool>::Or<Absent> as Bool>::VALUE);
        assert!(<<Absent as Bool>::Not as Bool>::VALUE);
    }

    #[test]
    fn test_const_to_type() {
        let _: If<true, u8, u16> = 1u8;
        let _: If<false, u8, u16> = 1u16;
        assert!(<Flag<true> as Bool>::VALUE);
        assert!(!<Flag<false> as Bool>::VALUE);
    }
}
