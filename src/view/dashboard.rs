// file: src/view/dashboard.rs
// description: comments dashboard view: state transitions, persistence and table rendering

use crate::api::LoadState;
use crate::config::DashboardConfig;
use crate::models::Comment;
use crate::state::{ViewAction, ViewState, ViewStateStore};
use crate::table::{PageSize, SortColumn, SortDirection, SortSpec, TablePage, TableViewPipeline};
use crate::utils::Validator;
use crate::view::{error_card, loading_card};
use colored::Colorize;
use tracing::debug;

const TABLE_COLUMNS: [(&str, Option<SortColumn>); 4] = [
    ("Post ID", Some(SortColumn::PostId)),
    ("Name", Some(SortColumn::Name)),
    ("Email", Some(SortColumn::Email)),
    ("Body", None),
];

const POST_ID_WIDTH: usize = 10;
const NAME_WIDTH: usize = 36;
const EMAIL_WIDTH: usize = 30;

pub struct DashboardView {
    comments: LoadState<Vec<Comment>>,
    state: ViewState,
    store: ViewStateStore,
    body_preview_chars: usize,
}

impl DashboardView {
    /// Loads the saved view state and starts in the loading state.
    pub fn mount(mut store: ViewStateStore, config: &DashboardConfig) -> Self {
        let state = store.load();
        store.persist(&state);
        debug!("Dashboard mounted with {:?}", state);

        Self {
            comments: LoadState::Loading,
            state,
            store,
            body_preview_chars: config.body_preview_chars,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn comments(&self) -> &LoadState<Vec<Comment>> {
        &self.comments
    }

    pub fn comments_mut(&mut self) -> &mut LoadState<Vec<Comment>> {
        &mut self.comments
    }

    /// The current page of the table, once records have arrived.
    pub fn table(&self) -> Option<TablePage<'_>> {
        let comments = self.comments.loaded()?;
        Some(TableViewPipeline::run(
            comments,
            &self.state.filter(),
            &self.state.sort(),
            &self.state.page(),
        ))
    }

    /// Applies one interaction and persists the resulting state.
    pub fn apply(&mut self, action: ViewAction) {
        let total_pages = self.table().map(|t| t.total_pages).unwrap_or(1);
        debug!("Applying {:?} (total pages {})", action, total_pages);
        self.state.apply(action, total_pages);
        self.store.persist(&self.state);
    }

    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = ViewAction>) {
        for action in actions {
            self.apply(action);
        }
    }

    pub fn render(&self) -> String {
        match &self.comments {
            LoadState::Loading => loading_card("comments"),
            LoadState::Failed(message) => error_card(message),
            LoadState::Loaded(_) => match self.table() {
                Some(page) => self.render_table(&page),
                None => loading_card("comments"),
            },
        }
    }

    fn render_table(&self, page: &TablePage<'_>) -> String {
        let sort = self.state.sort();
        let rule_width = POST_ID_WIDTH + NAME_WIDTH + EMAIL_WIDTH + 3 + self.body_width();

        let mut lines = vec![
            format!(
                "{}  {}",
                "Comments Dashboard".bold(),
                format!("[{} records]", page.total_records).cyan()
            ),
            self.render_toolbar(),
            String::new(),
            render_header(&sort).bold().to_string(),
            "─".repeat(rule_width),
        ];

        if page.visible.is_empty() {
            lines.push("No results".dimmed().to_string());
        }
        lines.extend(page.visible.iter().map(|comment| self.render_row(comment)));

        lines.push(String::new());
        lines.push(render_pager(page));
        lines.join("\n")
    }

    fn render_toolbar(&self) -> String {
        let sizes = PageSize::options()
            .map(|size| {
                if size == self.state.rows_per_page {
                    format!("[{}]", size)
                } else {
                    size.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "Search name: {:?}  email: {:?}  phone (not in API): {:?}  Rows per page: {}",
            self.state.filter_name, self.state.filter_email, self.state.filter_phone, sizes
        )
    }

    fn body_width(&self) -> usize {
        if self.body_preview_chars == 0 {
            40
        } else {
            self.body_preview_chars + 3
        }
    }

    fn render_row(&self, comment: &Comment) -> String {
        format!(
            "{:<pw$} {:<nw$} {:<ew$} {}",
            format!("#{}", comment.post_id),
            fit(&comment.name, NAME_WIDTH),
            fit(&comment.email, EMAIL_WIDTH),
            Validator::truncate_text(&Validator::single_line(&comment.body), self.body_preview_chars),
            pw = POST_ID_WIDTH,
            nw = NAME_WIDTH,
            ew = EMAIL_WIDTH,
        )
    }
}

fn fit(text: &str, width: usize) -> String {
    Validator::truncate_text(&Validator::single_line(text), width.saturating_sub(3))
}

pub fn sort_icon(sort: &SortSpec, column: SortColumn) -> &'static str {
    match sort.direction_for(column) {
        Some(SortDirection::Asc) => "↑",
        Some(SortDirection::Desc) => "↓",
        None => "↕",
    }
}

fn render_header(sort: &SortSpec) -> String {
    let cells: Vec<String> = TABLE_COLUMNS
        .iter()
        .map(|(label, column)| match column {
            Some(column) => format!("{} {}", label, sort_icon(sort, *column)),
            None => label.to_string(),
        })
        .collect();

    format!(
        "{:<pw$} {:<nw$} {:<ew$} {}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        pw = POST_ID_WIDTH,
        nw = NAME_WIDTH,
        ew = EMAIL_WIDTH,
    )
}

fn render_pager(page: &TablePage<'_>) -> String {
    let button = |label: &str, disabled: bool| {
        if disabled {
            label.dimmed().to_string()
        } else {
            label.to_string()
        }
    };

    let numbers = page
        .page_buttons()
        .into_iter()
        .map(|n| {
            if n == page.current_page {
                format!("[{}]", n).bold().to_string()
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{} {} {} {} {}    Page {} of {}",
        button("⏮ First", page.is_first()),
        button("◀ Prev", page.is_first()),
        numbers,
        button("Next ▶", page.is_last()),
        button("Last ⏭", page.is_last()),
        page.current_page,
        page.total_pages
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::STORAGE_KEY;
    use pretty_assertions::assert_eq;
    use tempfile::{TempDir, tempdir};

    fn comments(n: u64) -> Vec<Comment> {
        (1..=n)
            .map(|i| {
                Comment::new(
                    i,
                    (n - i) / 10 + 1,
                    format!("commenter {}", i),
                    format!("c{}@mail.io", i),
                    "line one\nline two",
                )
            })
            .collect()
    }

    fn mounted(dir: &TempDir, records: Vec<Comment>) -> DashboardView {
        colored::control::set_override(false);
        let store = ViewStateStore::open(dir.path().join("storage.json"), STORAGE_KEY);
        let config = DashboardConfig {
            body_preview_chars: 20,
        };
        let mut view = DashboardView::mount(store, &config);
        *view.comments_mut() = LoadState::Loaded(records);
        view
    }

    #[test]
    fn test_loading_and_error_cards() {
        colored::control::set_override(false);
        let dir = tempdir().unwrap();
        let store = ViewStateStore::open(dir.path().join("storage.json"), STORAGE_KEY);
        let mut view = DashboardView::mount(
            store,
            &DashboardConfig {
                body_preview_chars: 0,
            },
        );

        assert_eq!(view.render(), "Loading comments…");
        assert!(view.table().is_none());

        *view.comments_mut() = LoadState::Failed("Failed to fetch comments".to_string());
        assert_eq!(view.render(), "Error: Failed to fetch comments");
    }

    #[test]
    fn test_interactions_are_persisted() {
        let dir = tempdir().unwrap();
        {
            let mut view = mounted(&dir, comments(120));
            view.apply_all([
                ViewAction::ToggleSort(SortColumn::Email),
                ViewAction::NextPage,
                ViewAction::NextPage,
            ]);
            assert_eq!(view.state().current_page, 3);
        }

        let view = mounted(&dir, comments(120));
        assert_eq!(view.state().current_page, 3);
        assert_eq!(view.state().sort(), SortSpec::ascending(SortColumn::Email));
    }

    #[test]
    fn test_filter_resets_page_and_narrows_table() {
        let dir = tempdir().unwrap();
        let mut view = mounted(&dir, comments(120));

        view.apply(ViewAction::LastPage);
        assert_eq!(view.state().current_page, 12);

        view.apply(ViewAction::FilterName("commenter 11".to_string()));
        let page = view.table().unwrap();

        assert_eq!(view.state().current_page, 1);
        // 11, 110..=119
        assert_eq!(page.total_records, 11);
    }

    #[test]
    fn test_stale_page_is_clamped_when_rendering() {
        let dir = tempdir().unwrap();
        {
            let mut view = mounted(&dir, comments(120));
            view.apply(ViewAction::GoToPage(12));
        }

        let view = mounted(&dir, comments(15));
        let page = view.table().unwrap();
        assert_eq!(view.state().current_page, 12);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.visible.len(), 5);
    }

    #[test]
    fn test_phone_filter_hides_everything() {
        let dir = tempdir().unwrap();
        let mut view = mounted(&dir, comments(30));

        view.apply(ViewAction::FilterPhone("555".to_string()));
        let rendered = view.render();

        assert!(rendered.contains("[0 records]"));
        assert!(rendered.contains("No results"));
        assert!(rendered.contains("Page 1 of 1"));
    }

    #[test]
    fn test_render_table() {
        let dir = tempdir().unwrap();
        let mut view = mounted(&dir, comments(25));
        view.apply(ViewAction::ToggleSort(SortColumn::PostId));
        view.apply(ViewAction::ToggleSort(SortColumn::PostId));

        let rendered = view.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("Comments Dashboard  [25 records]"));
        assert!(lines[1].contains("Rows per page: [10] 50 100"));
        assert!(lines[3].starts_with("Post ID ↓"));
        assert!(lines[3].contains("Name ↕"));
        assert!(lines[5].starts_with("#3"));
        assert!(lines[5].contains("line one line two"));
        assert!(rendered.ends_with("Page 1 of 3"));
        assert!(rendered.contains("[1] 2 3"));
    }

    #[test]
    fn test_sort_icons() {
        let spec = SortSpec::ascending(SortColumn::Name);
        assert_eq!(sort_icon(&spec, SortColumn::Name), "↑");
        assert_eq!(sort_icon(&spec, SortColumn::Email), "↕");
        assert_eq!(sort_icon(&SortSpec::descending(SortColumn::Email), SortColumn::Email), "↓");
    }
}
