use chrono::NaiveDate;

use crate::card::{to_card, CardDescriptor};
use crate::facts;
use crate::logging::{log, obj, v_num, v_str, Domain, Level};
use crate::select::{select, WINDOW_SIZE};
use crate::source::{window_end, FetchSpec, RecordSource};
use crate::state::AppState;
use crate::view::GalleryView;

pub const NO_ENTRIES_MSG: &str =
    "No entries found for the selected date. Try an earlier date.";

/// Controller wiring source, state, selector, mapper and view together.
///
/// Every failure is recovered here and routed through the view; nothing
/// panics past this boundary. A failed fetch leaves the previously held
/// collection untouched, so whatever was on screen stays valid.
pub struct App<V> {
    source: Box<dyn RecordSource + Send + Sync>,
    state: AppState,
    cards: Vec<CardDescriptor>,
    view: V,
}

impl<V: GalleryView> App<V> {
    pub fn new(source: Box<dyn RecordSource + Send + Sync>, view: V) -> Self {
        Self { source, state: AppState::new(), cards: Vec::new(), view }
    }

    /// Fetch a collection and render its window.
    ///
    /// With a start date the source is asked for the 9-day range and the
    /// selection anchors at the window end, so the whole range qualifies.
    /// Without one the source falls back to recent items and the newest
    /// record becomes the anchor.
    pub async fn load(&mut self, start: Option<NaiveDate>) {
        self.view.show_loading(true);
        self.view.show_fact(facts::random_fact());

        let spec = match start {
            Some(s) => FetchSpec::Range { start: s },
            None => FetchSpec::Bulk,
        };
        match self.source.fetch(spec).await {
            Ok(records) => {
                log(
                    Level::Info,
                    Domain::Gallery,
                    "collection_replaced",
                    obj(&[("records", v_num(records.len() as f64))]),
                );
                self.state.replace(records);
                let reference = match start {
                    Some(s) => window_end(s),
                    None => self.state.newest_date().unwrap_or_else(today),
                };
                self.render(reference);
            }
            Err(err) => {
                log(
                    Level::Error,
                    Domain::Source,
                    "fetch_failed",
                    obj(&[("cause", v_str(&err.to_string()))]),
                );
                self.view.show_error(&format!("Failed to load entries: {err}"));
            }
        }
        self.view.show_loading(false);
    }

    /// Recompute the window from the held collection; no refetch.
    pub fn reselect(&mut self, reference: NaiveDate) {
        self.render(reference);
    }

    /// Show the detail view for a card from the current selection.
    /// Returns false when the index points outside it.
    pub fn open_detail(&mut self, index: usize) -> bool {
        match self.cards.get(index) {
            Some(card) => {
                self.view.show_detail(card);
                true
            }
            None => {
                self.view.show_error("No such card in the current gallery.");
                false
            }
        }
    }

    fn render(&mut self, reference: NaiveDate) {
        let picked = select(self.state.records(), reference, WINDOW_SIZE);
        log(
            Level::Debug,
            Domain::Gallery,
            "selection",
            obj(&[
                ("reference", v_str(&reference.to_string())),
                ("selected", v_num(picked.len() as f64)),
                ("collection", v_num(self.state.len() as f64)),
            ]),
        );
        if picked.is_empty() {
            self.cards.clear();
            self.view.show_error(NO_ENTRIES_MSG);
            return;
        }
        self.cards = picked.iter().map(to_card).collect();
        self.view.render_cards(&self.cards);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn cards(&self) -> &[CardDescriptor] {
        &self.cards
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
