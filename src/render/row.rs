//! Table row markup for a single user/event record.

use crate::api::UserRecord;
use crate::format::{escape_html, with_thousands_separators};

/// Which columns a row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowVariant {
    /// Contact report row: image, name, friends, followers, posts, lists.
    Report,
    /// Day event row: adds the follow/unfollow relation column.
    Event,
}

/// Build the markup for one table row.
///
/// Every interpolated field is HTML-escaped; the backend returns raw user
/// content (usernames, descriptions) and must not be able to inject markup.
pub fn render_row(record: &UserRecord, variant: RowVariant) -> String {
    let username = escape_html(&record.username);
    let title = format!(
        "{} - (updated: {})",
        escape_html(&record.description),
        escape_html(&record.updated_at)
    );

    let mut row = String::with_capacity(512);

    row.push_str(&format!(
        r#"<tr class="user-data-row" data-user="{username}">"#
    ));
    row.push_str(&format!(
        r##"<td class="user-img"><a href="#" class="no-link" title="{title}"><img src="{}" class="profile-image" /></a></td>"##,
        escape_html(&record.profile_image)
    ));
    row.push_str(&format!(
        r##"<td class="user-name"><a href="#" class="no-link" title="{title}">@{username}</a><div>{}<br />{}</div></td>"##,
        escape_html(&record.name),
        escape_html(&record.location)
    ));

    if variant == RowVariant::Event {
        row.push_str(&data_cell(&escape_html(
            record.has_relation.as_deref().unwrap_or(""),
        )));
    }

    row.push_str(&data_cell(&with_thousands_separators(record.friend_count)));
    row.push_str(&data_cell(&with_thousands_separators(
        record.followers_count,
    )));
    row.push_str(&data_cell(&with_thousands_separators(record.post_count)));
    row.push_str(&data_cell(&with_thousands_separators(record.listed_count)));
    row.push_str("</tr>");

    row
}

fn data_cell(content: &str) -> String {
    format!(r#"<td class="user-data"><div>{content}</div></td>"#)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
