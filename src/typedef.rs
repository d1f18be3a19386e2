//! The `strong_typedef!` definition macro.

/// Declare one or more strong typedefs.
///
/// Each declaration names the typedef, its underlying type, and the
/// capabilities it opts into (by path, comma-separated after a colon). The
/// macro expands to a hidden uninhabited tag type, a `Strong` alias, and one
/// marker impl per selected capability.
///
/// # Example
///
/// ```
/// use nominal::strong_typedef;
/// use nominal::ops::{Adds, Equals, Orders, Subtracts};
///
/// strong_typedef! {
///     /// Counts processor cycles.
///     pub CycleCount(u64): Equals, Orders, Adds, Subtracts;
///
///     /// Counts retired instructions. Same representation as a cycle
///     /// count, deliberately incompatible with it.
///     pub InstructionCount(u64): Equals, Orders;
///
///     /// A clock rate in hertz. No capabilities at all: values can only
///     /// be constructed and explicitly read.
///     pub Frequency(f64);
/// }
///
/// let cycles = CycleCount::new(50);
/// assert!(cycles < CycleCount::new(60));
/// ```
///
/// The generated tag is the typedef name with a `Tag` suffix
/// (`CycleCountTag` above). It shares the declaration's visibility and is
/// `#[doc(hidden)]`; reaching for it directly is only needed when attaching
/// a capability after the fact:
///
/// ```
/// # use nominal::strong_typedef;
/// # strong_typedef! { pub Frequency(f64); }
/// impl nominal::ops::Displays for FrequencyTag {}
/// ```
#[macro_export]
macro_rules! strong_typedef {
    ($(
        $(#[$meta:meta])*
        $vis:vis $name:ident($underlying:ty) $(: $($cap:path),+)? ;
    )+) => {
        $crate::paste::paste! { $(
            #[doc(hidden)]
            $vis enum [<$name Tag>] {}

            $(#[$meta])*
            $vis type $name = $crate::Strong<[<$name Tag>], $underlying>;

            $($(
                impl $cap for [<$name Tag>] {}
            )+)?
        )+ }
    };
}
