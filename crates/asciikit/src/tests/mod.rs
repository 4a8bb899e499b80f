mod edit;
#[cfg(feature = "locale")]
mod locale;
mod radix;
