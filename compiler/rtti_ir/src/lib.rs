//! Shared leaf types for the runtime type-descriptor crates.
//!
//! - [`Span`]: compact source range used to locate descriptor requests
//! - [`Name`]: 32-bit interned identifier (aggregate names, aliases)
//! - [`StringInterner`]: sharded interner that owns every [`Name`]

mod interner;
mod name;
mod span;

pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;

/// Compile-time size assertion.
///
/// Fails the build if `$ty` does not have exactly `$size` bytes.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}
