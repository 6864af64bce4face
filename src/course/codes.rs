//! Typed views over the raw one-byte codes stored in course files.
//!
//! Entities always keep the raw byte; these enums are conveniences for
//! callers. Codes with no known meaning map to `Other` and convert back
//! to the same byte.

macro_rules! raw_code {
    {
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    } => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Code with no known meaning, kept verbatim
            Other(u8),
        }

        impl From<u8> for $name {
            fn from(code: u8) -> Self {
                match code {
                    $( $code => $name::$variant, )+
                    other => $name::Other(other),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                match value {
                    $( $name::$variant => $code, )+
                    $name::Other(code) => code,
                }
            }
        }
    };
}

raw_code! {
    /// Wind strength of a course (plot byte 2)
    WindSpeed {
        None = 0,
        Gentle = 1,
        Medium = 2,
        Strong = 3,
    }
}

raw_code! {
    /// Prevailing wind direction of a course (plot byte 1)
    WindDirection {
        NotApplicable = 0,
        North = 1,
        Northeast = 2,
        East = 3,
        Southeast = 4,
        South = 5,
        Southwest = 6,
        West = 7,
        Northwest = 8,
    }
}

raw_code! {
    /// Wall decoration along a hole's boundary (hole byte 9)
    WallStyle {
        NoWalls = 0,
        RailroadTies = 1,
        StoneWalls = 2,
    }
}

raw_code! {
    /// How the course treats ground outside the holes (course byte 527).
    ///
    /// The on-disk meaning of this byte is not fully established; this is
    /// the reading used by the editor's course settings.
    BoundsStyle {
        OutOfBounds = 0,
        HeavyRough = 1,
    }
}
