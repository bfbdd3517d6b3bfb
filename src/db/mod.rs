//! Query/command layer. Free async functions over the pool; handlers never
//! build SQL themselves. Ids are UUID v7 bound as TEXT, timestamps are unix
//! seconds.

pub mod comments;
pub mod friends;
pub mod likes;
pub mod posts;
pub mod users;

use time::OffsetDateTime;

pub(crate) fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
