/// Asserts that a block panics. Used for conditions this crate treats as defects, which surface as
/// panics rather than errors.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block was expected to panic")
    };
    ($run:block, $msg:literal) => {
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(caught.is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
