//! Fails the build with a readable message when neither `std` nor `alloc` is
//! selected, since the digit buffer of `BigInt` needs a heap.

#[allow(unused_macros)]
macro_rules! without_rustfmt {
    ($mod:item) => {
        $mod
    };
}

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
without_rustfmt! {
    mod error;
}
