//! Outbound Ports (Driven Ports / SPI)

/// Wall clock used to suffix generated permlinks.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch
    fn unix_timestamp(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn unix_timestamp(&self) -> u64 {
        (**self).unix_timestamp()
    }
}
