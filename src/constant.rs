// Help is reserved: both spellings intercept the scan unconditionally and
// cannot be registered by the caller.
pub(crate) const HELP_SHORT: &str = "-h";
pub(crate) const HELP_LONG: &str = "--help";
