//! Existence checks for remote images.

use std::future::Future;

/// Answers whether an image URL is currently published.
///
/// Any failure (network, decode, HTTP status) counts as "absent". A single
/// negative answer is conclusive; implementations do not retry.
pub trait RunProber {
    fn exists(&self, url: &str) -> impl Future<Output = bool>;
}
