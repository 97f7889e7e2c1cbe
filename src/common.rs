/// Statically checks that an error type can travel across threads and be boxed.
macro_rules! assert_error_traits {
    ($to_test:path) => {
        const _: () = {
            const fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
            assert_error::<$to_test>();
        };
    };
}

pub(crate) use assert_error_traits;
