/// Verbose-only diagnostic on stderr, expecting the message arguments in braces
#[macro_export]
macro_rules! vlog {
    ($cli:expr, { $($arg:tt)* }) => {
        if $cli.verbose {
            eprintln!($($arg)*);
        }
    };
}
