use chrono::{DateTime, Duration, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn seconds_from_now(seconds: i64) -> DateTime<Utc> {
    now() + Duration::seconds(seconds)
}
