//! Diesel models for the post log table.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// One published-post record.
///
/// Created when a publish is confirmed; never mutated; removed only by
/// retention eviction.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::post_log)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PostRecord {
    pub id: i32,
    pub schema: String,
    pub name: String,
    pub posted_at: NaiveDateTime,
    pub text: String,
}

/// Insertable form of [`PostRecord`]; the store stamps `posted_at` itself.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::post_log)]
pub struct NewPostRecord<'a> {
    pub schema: &'a str,
    pub name: &'a str,
    pub posted_at: NaiveDateTime,
    pub text: &'a str,
}
