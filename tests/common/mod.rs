//! Common test utilities: HTML fixtures shaped like Letterboxd diary pages

#![allow(dead_code)]

/// Public-view row: rating as a `rated-N` class, optional `like` marker
pub fn public_row(title: &str, year: &str, date: &str, rated: Option<u32>, liked: bool) -> String {
    let date_path = date.replace('-', "/");
    let rating = rated
        .map(|raw| format!(r#"<span class="rating rated-{raw}">★</span>"#))
        .unwrap_or_default();
    let like = if liked {
        r#"<span class="like liked-micro has-icon icon-liked"></span>"#
    } else {
        ""
    };

    format!(
        r#"<tr class="diary-entry-row">
            <td class="td-day diary-day"><a href="/dave/film/{slug}/{date_path}/">{day}</a></td>
            <td class="td-film-details"><h3 class="headline-3 prettify"><a href="/film/{slug}/">{title}</a></h3></td>
            <td class="td-released center"><span>{year}</span></td>
            <td class="td-rating">{rating}</td>
            <td class="td-like center">{like}</td>
            <td class="td-rewatch center icon-status-off"><span class="icon"></span></td>
        </tr>"#,
        slug = title.to_lowercase().replace(' ', "-"),
        day = date.rsplit('-').next().unwrap_or_default(),
    )
}

/// Owner-view row: star widget with `aria-valuenow`, heart icon, rewatch cell
pub fn owner_row(title: &str, year: &str, date: &str, value: u32, liked: bool, rewatch: bool) -> String {
    let date_path = date.replace('-', "/");
    let heart = if liked {
        r#"<span class="has-icon icon-liked"></span>"#
    } else {
        r#"<span class="has-icon icon-like"></span>"#
    };
    let rewatch_class = if rewatch { "" } else { " icon-status-off" };

    format!(
        r#"<tr class="diary-entry-row editable-row">
            <td class="td-day diary-day"><a href="/dave/film/x/{date_path}/">{day}</a></td>
            <td class="td-film-details"><h3 class="headline-3"><a href="/film/x/">{title}</a></h3></td>
            <td class="td-released"><span>{year}</span></td>
            <td class="td-rating"><div class="rateit"><input class="rateit-range" type="range" aria-valuenow="{value}"></div></td>
            <td class="td-like">{heart}</td>
            <td class="td-rewatch{rewatch_class}"><span class="icon"></span></td>
        </tr>"#,
        day = date.rsplit('-').next().unwrap_or_default(),
    )
}

/// Wrap rows in a full listing page, with or without an "older" link
pub fn diary_page(rows: &[String], has_next: bool) -> String {
    let pagination = if has_next {
        r#"<div class="pagination"><div class="paginate-nextprev"><a class="next" href="/dave/films/diary/page/2/">Older</a></div></div>"#
    } else {
        r#"<div class="pagination"><div class="paginate-nextprev"><span class="next paginate-disabled">Older</span></div></div>"#
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Dave’s film diary • Letterboxd</title></head>
<body>
<table id="diary-table" class="table film-table">
<tbody>
{rows}
</tbody>
</table>
{pagination}
</body>
</html>"#,
        rows = rows.join("\n"),
    )
}

/// `count` public-view rows on consecutive January days
pub fn numbered_rows(count: usize, offset: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let n = offset + i;
            public_row(
                &format!("Film {n}"),
                "2000",
                &format!("2023-01-{:02}", n % 28 + 1),
                Some((n % 10 + 1) as u32),
                n % 3 == 0,
            )
        })
        .collect()
}
