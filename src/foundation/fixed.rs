//! Fixed-point numbers stored as their integer "epsilon" count.
//!
//! The wire format never stores these as floats: an 8.8 value is a 16-bit integer scaled by 256,
//! a 16.16 value is a 32-bit integer scaled by 65536. Serde reads and writes the raw epsilons.

macro_rules! fixed_point {
    ($(#[$meta:meta])* $name:ident, $repr:ty, $shift:expr) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name {
            /// Raw scaled integer.
            pub epsilons: $repr,
        }

        impl $name {
            /// The value `1.0`.
            pub const ONE: Self = Self { epsilons: 1 << $shift };
            /// The value `0.0`.
            pub const ZERO: Self = Self { epsilons: 0 };

            pub const fn from_epsilons(epsilons: $repr) -> Self {
                Self { epsilons }
            }

            /// Nearest representable value, saturating at the type bounds.
            pub fn from_value(value: f64) -> Self {
                let scaled = (value * f64::from(1u32 << $shift)).round();
                Self {
                    epsilons: scaled as $repr,
                }
            }

            pub fn value(self) -> f64 {
                f64::from(self.epsilons) / f64::from(1u32 << $shift)
            }
        }
    };
}

fixed_point!(
    /// Signed 8.8 fixed point.
    Sfixed8P8,
    i16,
    8
);
fixed_point!(
    /// Unsigned 8.8 fixed point.
    Ufixed8P8,
    u16,
    8
);
fixed_point!(
    /// Signed 16.16 fixed point.
    Sfixed16P16,
    i32,
    16
);
fixed_point!(
    /// Unsigned 16.16 fixed point.
    Ufixed16P16,
    u32,
    16
);

#[cfg(test)]
#[path = "../../tests/unit/foundation/fixed.rs"]
mod tests;
