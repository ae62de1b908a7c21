use chrono::Utc;

/// Clock seam. The domain never reads the clock itself; "now" is taken
/// here and handed down, which lets tests pin time to a fixed instant.
pub trait ISys: Send + Sync {
    fn get_timestamp_millis(&self) -> i64;
}

pub struct RealSys {}

impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Fixed clock for tests
pub struct FixedSys(pub i64);

impl ISys for FixedSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.0
    }
}
