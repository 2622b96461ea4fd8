//! Environment and configuration utilities.

use std::env;
use std::ffi::OsString;

/// Returns an appropriate vector of environment variables to pass to the pager.
///
/// By default, this is `FSRX`, unless the user has defined `$LESS` in the
/// environment. Because the hot listing prints one post title per line, and
/// titles can run long, `S` is appended to `$LESS` if not already present so
/// that long lines scroll sideways instead of wrapping into an unreadable
/// mess.
///
/// # Examples
///
/// `pager_env` will return a default value if `$LESS` is not set:
///
/// ```
/// use whatshot::conf::pager_env;
/// # use temp_env::with_var_unset;
/// # with_var_unset("LESS", || {
/// let less = pager_env().into_iter().nth(0).unwrap().into();
/// assert_eq!(less, "LESS=FSRX");
/// # });
/// ```
///
/// In this example, `$LESS` was set to `FRX`, so `S` is appended:
///
/// ```
/// use whatshot::conf::pager_env;
/// # use temp_env::with_var;
/// # with_var("LESS", Some("FRX"), || {
/// let less = pager_env().into_iter().nth(0).unwrap().into();
/// assert_eq!(less, "LESS=FRXS");
/// # });
/// ```
///
/// In this example, `$LESS` was set to `SR`. Because `S` is already
/// present, the value of `$LESS` does not change:
///
/// ```
/// use whatshot::conf::pager_env;
/// # use temp_env::with_var;
/// # with_var("LESS", Some("SR"), || {
/// let less = pager_env().into_iter().nth(0).unwrap().into();
/// assert_eq!(less, "LESS=SR");
/// # });
/// ```
pub fn pager_env() -> impl IntoIterator<Item = impl Into<OsString>> {
    // Get the value of $LESS, defaulting to "FSRX" if $LESS is unset.
    let less = env::var_os("LESS").unwrap_or(
        "FSRX"
            .parse()
            .expect("could not parse 'FSRX' into OsString"),
    );
    let less = less.to_string_lossy();

    // One post title per line; force sideways scrolling for long ones.
    let less = if !less.contains("S") {
        less + "S"
    } else {
        less
    };

    vec![format!("LESS={less}")]
}
