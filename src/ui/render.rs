use pawmap_core::{
    entities::Place,
    panel::{BookmarkStatus, LoadState, PanelView, ReviewRow, RowMode},
};
use std::fmt::{self, Write as _};

const NOT_PROVIDED: &str = "not provided";

/// Renders the whole panel as plain text.
pub fn render(view: &PanelView) -> String {
    let mut out = String::new();
    // Writing into a String never fails.
    let _ = write_panel(&mut out, view);
    out
}

fn write_panel(out: &mut String, view: &PanelView) -> fmt::Result {
    if !view.is_open() {
        return writeln!(out, "No place opened. Try 'open <place-id>'.");
    }
    match &view.load {
        LoadState::Idle => return Ok(()),
        LoadState::Loading => return writeln!(out, "Loading ..."),
        LoadState::Failed(message) => return writeln!(out, "{message} Type 'retry'."),
        LoadState::Ready => {}
    }
    let Some(place) = &view.place else {
        return Ok(());
    };
    write_place(out, place)?;
    let bookmark = match (view.bookmark.bookmarked, view.bookmark.status) {
        (true, BookmarkStatus::Confirmed) => "★ bookmarked",
        (false, BookmarkStatus::Confirmed) => "☆ not bookmarked",
        (true, BookmarkStatus::Pending) => "★ bookmarked (saving)",
        (false, BookmarkStatus::Pending) => "☆ not bookmarked (saving)",
    };
    writeln!(out, "  {bookmark}")?;
    writeln!(out)?;

    let total = view.page_info.map_or(0, |p| p.total_elements);
    writeln!(out, "Reviews ({total})")?;
    if view.rows.is_empty() {
        writeln!(out, "  No reviews yet. Be the first to write one!")?;
    }
    for row in &view.rows {
        write_row(out, row, &view.edit_draft)?;
    }
    if let Some(info) = view.page_info.filter(|p| p.total_pages > 1) {
        writeln!(out, "  page {}/{}", info.page, info.total_pages)?;
    }
    writeln!(out)?;
    match &view.viewer {
        Some(viewer) => writeln!(
            out,
            "Writing as {}",
            viewer.display_name().unwrap_or("anonymous pet")
        ),
        None => writeln!(out, "Log in to bookmark places and write reviews."),
    }
}

fn write_place(out: &mut String, place: &Place) -> fmt::Result {
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| NOT_PROVIDED.into());
    writeln!(out, "{} [{}]", place.name, place.category)?;
    writeln!(out, "  address:  {}", place.address)?;
    writeln!(out, "  hours:    {}", optional(&place.opening_hours))?;
    writeln!(out, "  phone:    {}", optional(&place.phone))?;
    writeln!(out, "  homepage: {}", optional(&place.homepage))
}

fn write_row(out: &mut String, row: &ReviewRow, edit_draft: &str) -> fmt::Result {
    let review = &row.review;
    let controls = if row.can_modify { "  [edit] [delete]" } else { "" };
    writeln!(
        out,
        "  #{} {} ({}){controls}",
        review.id,
        review.author_name,
        review.created_at.format_date()
    )?;
    match row.mode {
        RowMode::Viewing => writeln!(out, "    {}", review.text),
        RowMode::Editing => writeln!(out, "    > {edit_draft}  (save | cancel)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawmap_core::{
        entities::*,
        panel::{BookmarkView, Generation},
    };
    use pawmap_entities::builders::*;

    fn ready_view() -> PanelView {
        let place = Place::build()
            .id(1)
            .name("Hundewiese")
            .category("park")
            .address("Parkweg 1")
            .opening_hours(Some("always"))
            .finish();
        let review = Review::build()
            .id(5)
            .author(2, "Bello")
            .text("Lots of sticks")
            .created_at(1_668_947_400)
            .finish();
        PanelView {
            place_id: Some(place.id),
            place: Some(place),
            rows: vec![ReviewRow {
                review,
                mode: RowMode::Viewing,
                can_modify: false,
            }],
            page_info: Some(PageInfo {
                page: 1,
                size: 15,
                total_elements: 1,
                total_pages: 1,
            }),
            load: LoadState::Ready,
            bookmark: BookmarkView {
                bookmarked: false,
                status: BookmarkStatus::Confirmed,
            },
            draft: String::new(),
            edit_draft: String::new(),
            viewer: None,
            generation: Generation::default().next(),
        }
    }

    #[test]
    fn render_closed_panel() {
        let mut view = ready_view();
        view.place_id = None;
        assert!(render(&view).starts_with("No place opened"));
    }

    #[test]
    fn render_missing_fields_as_not_provided() {
        let text = render(&ready_view());
        assert!(text.contains("hours:    always"));
        assert!(text.contains("phone:    not provided"));
        assert!(text.contains("homepage: not provided"));
        assert!(text.contains("#5 Bello (2022-11-20)"));
        assert!(!text.contains("[edit]"));
        assert!(text.contains("Log in"));
    }

    #[test]
    fn render_empty_review_list() {
        let mut view = ready_view();
        view.rows.clear();
        assert!(render(&view).contains("No reviews yet"));
    }

    #[test]
    fn render_loading_and_failure() {
        let mut view = ready_view();
        view.load = LoadState::Loading;
        assert_eq!(render(&view), "Loading ...\n");
        view.load = LoadState::Failed("Boom.".into());
        assert!(render(&view).contains("Boom. Type 'retry'."));
    }

    #[test]
    fn render_controls_for_the_author() {
        let mut view = ready_view();
        view.viewer = Some(Viewer::new(UserId::new(2)));
        view.rows[0].can_modify = true;
        view.rows[0].mode = RowMode::Editing;
        view.edit_draft = "Even more sticks".into();
        view.bookmark = BookmarkView {
            bookmarked: true,
            status: BookmarkStatus::Pending,
        };
        let text = render(&view);
        assert!(text.contains("[edit] [delete]"));
        assert!(text.contains("> Even more sticks"));
        assert!(!text.contains("Lots of sticks"));
        assert!(text.contains("bookmarked (saving)"));
        assert!(text.contains("Writing as anonymous pet"));
    }
}
