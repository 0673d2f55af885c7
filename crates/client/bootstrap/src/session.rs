//! Session identifiers.
//!
//! A session id is the local wall-clock time the session was created,
//! down to the millisecond, so lexical order is creation order.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

const ID_FORMAT: &str = "%Y%m%d%H%M%S%3f";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Id for a session created now.
pub fn new_session_id() -> String {
    session_id_at(&Local::now())
}

pub fn session_id_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(ID_FORMAT).to_string()
}

/// Human-readable creation time of a session, or the raw id when it does
/// not follow the timestamp layout.
pub fn describe_session(id: &str) -> String {
    match NaiveDateTime::parse_from_str(id, ID_FORMAT) {
        Ok(created) => created.format(DISPLAY_FORMAT).to_string(),
        Err(_) => id.to_owned(),
    }
}
