//! Book counter shown while building an index
//!
//! Without the `progress` feature the bar is a silent stand-in.

#[cfg(feature = "progress")]
pub use indicatif::ProgressBar;

#[cfg(not(feature = "progress"))]
#[derive(Clone, Default)]
pub struct ProgressBar;

#[cfg(not(feature = "progress"))]
impl ProgressBar {
    pub fn set_message(&self, _msg: impl Into<std::borrow::Cow<'static, str>>) {}
    pub fn inc(&self, _delta: u64) {}
    pub fn finish_and_clear(&self) {}
}

/// Bar counting books up to `total`
#[cfg(feature = "progress")]
pub fn book_progress(total: u64) -> ProgressBar {
    const BOOK_TEMPLATE: &str = "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} books {msg}";
    let pb = ProgressBar::new(total);
    // A template that fails to parse leaves indicatif's default style
    if let Ok(style) = indicatif::ProgressStyle::default_bar().template(BOOK_TEMPLATE) {
        pb.set_style(style.progress_chars("=> "));
    }
    pb
}

#[cfg(not(feature = "progress"))]
pub fn book_progress(_total: u64) -> ProgressBar {
    ProgressBar
}
