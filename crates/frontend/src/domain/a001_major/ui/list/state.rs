use contracts::domain::a001_major::{ListingFilter, MajorId, MajorSummary, MajorsPage};
use leptos::prelude::*;
use std::collections::HashSet;
use std::ops::RangeInclusive;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchKind {
    /// Page 1 of a (new) filter; replaces the accumulated items.
    Reset,
    /// Following page(s) of the current filter; appended.
    Append,
}

/// A fetch the listing has agreed to. Carries everything the request needs
/// and the sequence number used to recognise stale responses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub kind: FetchKind,
    pub pages: RangeInclusive<u32>,
    pub page_size: u32,
    pub filter: ListingFilter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Response applied; `added` new unique items.
    Applied { added: usize },
    /// A newer request was issued after this one; response ignored.
    Stale,
}

/// Accumulated listing of the major wall.
///
/// Items keep arrival order and are unique by `major_id`. `current_page`
/// only moves when a page actually arrived, and `loading` is set as soon as
/// a ticket is handed out, before any request goes on the wire.
#[derive(Clone, Debug)]
pub struct ListingState {
    pub items: Vec<MajorSummary>,
    seen: HashSet<MajorId>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub has_more: bool,
    pub phase: LoadPhase,
    pub filter: ListingFilter,
    pub page_size: u32,
    seq: u64,
    /// Set while the items on screen still belong to the previous filter.
    reset_pending: bool,
    /// Bumped by every applied success; failures leave it alone.
    pub generation: u64,
}

impl ListingState {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            current_page: 0,
            total_pages: 0,
            total_count: 0,
            has_more: true,
            phase: LoadPhase::Idle,
            filter: ListingFilter::default(),
            page_size: page_size.max(1),
            seq: 0,
            reset_pending: false,
            generation: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Nothing loaded yet, or the last reset came back empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn issue(&mut self, kind: FetchKind, pages: RangeInclusive<u32>) -> FetchTicket {
        self.seq += 1;
        self.phase = LoadPhase::Loading;
        FetchTicket {
            seq: self.seq,
            kind,
            pages,
            page_size: self.page_size,
            filter: self.filter.clone(),
        }
    }

    /// Start over with `filter` from page 1.
    ///
    /// Always allowed: a reset supersedes whatever is in flight. The old
    /// items stay visible until page 1 of the new filter arrives.
    pub fn begin_reset(&mut self, filter: ListingFilter) -> FetchTicket {
        self.filter = filter;
        self.reset_pending = true;
        self.issue(FetchKind::Reset, 1..=1)
    }

    /// Next page, unless a request is in flight or the end was reached.
    pub fn begin_load_more(&mut self) -> Option<FetchTicket> {
        let next = self.current_page + 1;
        self.begin_load_through(next)
    }

    /// Every page from `current_page + 1` up to `target`, so a catch-up
    /// never leaves a hole in the list.
    pub fn begin_load_through(&mut self, target: u32) -> Option<FetchTicket> {
        if self.is_loading() {
            log::debug!("load more ignored: request in flight");
            return None;
        }
        if self.current_page == 0 || self.reset_pending {
            // Nothing accumulated for this filter yet; page 1 comes first.
            let filter = self.filter.clone();
            return Some(self.begin_reset(filter));
        }
        if !self.has_more {
            log::debug!("load more ignored: no more pages");
            return None;
        }

        let first = self.current_page + 1;
        let last = target.max(first);
        let last = if self.total_pages > 0 {
            last.min(self.total_pages)
        } else {
            last
        };
        Some(self.issue(FetchKind::Append, first..=last))
    }

    pub fn apply_success(&mut self, ticket: &FetchTicket, page: MajorsPage) -> ApplyOutcome {
        if ticket.seq != self.seq {
            log::debug!(
                "discarding stale response #{} (latest #{})",
                ticket.seq,
                self.seq
            );
            return ApplyOutcome::Stale;
        }

        if ticket.kind == FetchKind::Reset {
            self.items.clear();
            self.seen.clear();
            self.reset_pending = false;
        }

        let mut added = 0;
        for item in page.data {
            if self.seen.insert(item.major_id.clone()) {
                self.items.push(item);
                added += 1;
            }
        }

        let meta = page.pagination;
        self.current_page = meta.page.max(*ticket.pages.start());
        self.total_pages = meta.total_pages;
        self.total_count = meta.total_count;
        self.has_more = self.current_page < self.total_pages;
        self.phase = LoadPhase::Idle;
        self.generation += 1;

        ApplyOutcome::Applied { added }
    }

    pub fn apply_failure(&mut self, ticket: &FetchTicket, message: impl Into<String>) -> ApplyOutcome {
        if ticket.seq != self.seq {
            return ApplyOutcome::Stale;
        }
        self.phase = LoadPhase::Error(message.into());
        ApplyOutcome::Applied { added: 0 }
    }

    /// Whether the near-end trigger should look again after a state change.
    ///
    /// Only a freshly applied page counts (`generation` moved past
    /// `seen_generation`), and only while idle with pages left. An error
    /// never re-arms, so a failing page is not requested again until the
    /// user scrolls back or presses Load More.
    pub fn should_rearm_near_end(&self, seen_generation: u64) -> bool {
        self.generation != seen_generation && self.phase == LoadPhase::Idle && self.has_more
    }

    /// Whether a new keyword needs a fresh page 1.
    ///
    /// No when it resolves to the request already shown or in flight (e.g.
    /// only trailing whitespace changed). After an error the same request
    /// is sent again since the user asked for it explicitly.
    pub fn keyword_needs_reset(&self, next: &ListingFilter) -> bool {
        if self.error().is_some() || !self.filter.same_request_as(next) {
            return true;
        }
        !(self.is_loading() || self.current_page > 0)
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(18)
    }
}

pub fn create_state(page_size: u32) -> RwSignal<ListingState> {
    RwSignal::new(ListingState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::PageMetadata;

    fn major(id: &str, category: &str) -> MajorSummary {
        MajorSummary {
            major_id: MajorId::new(id),
            major_name: format!("专业{}", id),
            category_name: category.to_string(),
            subject_id: id.chars().take(4).collect(),
            subject_name: "学科".to_string(),
        }
    }

    fn page_of(ids: impl IntoIterator<Item = u32>, page: u32, total_pages: u32) -> MajorsPage {
        let data: Vec<_> = ids
            .into_iter()
            .map(|n| major(&format!("08{:04}", n), "工学"))
            .collect();
        MajorsPage {
            pagination: PageMetadata {
                page,
                page_size: 18,
                total_count: total_pages as u64 * 18,
                total_pages,
            },
            data,
        }
    }

    fn loaded_first_page(filter: ListingFilter, total_pages: u32) -> ListingState {
        let mut state = ListingState::new(18);
        let ticket = state.begin_reset(filter);
        state.apply_success(&ticket, page_of(0..18, 1, total_pages));
        state
    }

    #[test]
    fn test_engineering_load_more_scenario() {
        let mut state = loaded_first_page(ListingFilter::by_category("08"), 26);
        assert_eq!(state.items.len(), 18);
        assert!(state.has_more);

        let ticket = state.begin_load_more().unwrap();
        assert_eq!(ticket.pages, 2..=2);
        assert_eq!(ticket.kind, FetchKind::Append);
        assert_eq!(ticket.filter.effective_category(), Some("08"));
        assert!(state.is_loading());

        let outcome = state.apply_success(&ticket, page_of(18..36, 2, 26));
        assert_eq!(outcome, ApplyOutcome::Applied { added: 18 });
        assert_eq!(state.items.len(), 36);
        assert_eq!(state.current_page, 2);
        assert!(state.has_more);
        assert_eq!(state.phase, LoadPhase::Idle);
    }

    #[test]
    fn test_search_replaces_unfiltered_items() {
        let mut state = loaded_first_page(ListingFilter::default(), 40);
        assert_eq!(state.items.len(), 18);

        let ticket = state.begin_reset(ListingFilter::by_keyword("计算"));
        assert_eq!(ticket.pages, 1..=1);
        assert_eq!(ticket.kind, FetchKind::Reset);

        let results = MajorsPage {
            data: vec![major("080901", "工学"), major("080902", "工学")],
            pagination: PageMetadata {
                page: 1,
                page_size: 18,
                total_count: 2,
                total_pages: 1,
            },
        };
        state.apply_success(&ticket, results);

        let ids: Vec<_> = state.items.iter().map(|m| m.major_id.as_str()).collect();
        assert_eq!(ids, vec!["080901", "080902"]);
        assert_eq!(state.current_page, 1);
        assert!(!state.has_more);
    }

    #[test]
    fn test_category_change_resets_to_first_page() {
        let mut state = loaded_first_page(ListingFilter::by_category("08"), 26);
        let ticket = state.begin_load_more().unwrap();
        state.apply_success(&ticket, page_of(18..36, 2, 26));
        assert_eq!(state.current_page, 2);

        let ticket = state.begin_reset(ListingFilter::by_category("02"));
        state.apply_success(&ticket, page_of(100..105, 1, 1));
        assert_eq!(state.current_page, 1);
        assert_eq!(state.items.len(), 5);
        assert_eq!(state.items[0].major_id.as_str(), "080100");
    }

    #[test]
    fn test_duplicates_across_pages_are_dropped() {
        let mut state = loaded_first_page(ListingFilter::default(), 3);
        let ticket = state.begin_load_more().unwrap();
        // backend shifted by two rows between requests
        let outcome = state.apply_success(&ticket, page_of(16..34, 2, 3));
        assert_eq!(outcome, ApplyOutcome::Applied { added: 16 });
        assert_eq!(state.items.len(), 34);

        let unique: HashSet<_> = state.items.iter().map(|m| &m.major_id).collect();
        assert_eq!(unique.len(), state.items.len());
    }

    #[test]
    fn test_duplicates_within_first_page_are_dropped() {
        let mut state = ListingState::new(18);
        let ticket = state.begin_reset(ListingFilter::default());
        let mut page = page_of(0..3, 1, 1);
        page.data.push(major("080001", "工学"));
        state.apply_success(&ticket, page);
        assert_eq!(state.items.len(), 3);
    }

    #[test]
    fn test_has_more_tracks_last_response() {
        let mut state = loaded_first_page(ListingFilter::default(), 2);
        assert!(state.has_more);

        let ticket = state.begin_load_more().unwrap();
        state.apply_success(&ticket, page_of(18..30, 2, 2));
        assert!(!state.has_more);
        assert_eq!(state.begin_load_more(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_single_page_result_has_no_more() {
        let state = loaded_first_page(ListingFilter::default(), 1);
        assert!(!state.has_more);
    }

    #[test]
    fn test_load_more_refused_while_loading() {
        let mut state = loaded_first_page(ListingFilter::default(), 5);
        let first = state.begin_load_more();
        assert!(first.is_some());
        assert_eq!(state.begin_load_more(), None);
    }

    #[test]
    fn test_failure_leaves_state_unchanged() {
        let mut state = loaded_first_page(ListingFilter::default(), 5);
        let ticket = state.begin_load_more().unwrap();
        state.apply_failure(&ticket, "HTTP 500");

        assert_eq!(state.items.len(), 18);
        assert_eq!(state.current_page, 1);
        assert!(state.has_more);
        assert_eq!(state.error(), Some("HTTP 500"));
        assert!(!state.is_loading());

        // the same page can be retried
        let retry = state.begin_load_more().unwrap();
        assert_eq!(retry.pages, 2..=2);
    }

    #[test]
    fn test_failed_reset_keeps_previous_items() {
        let mut state = loaded_first_page(ListingFilter::default(), 5);
        let ticket = state.begin_reset(ListingFilter::by_category("01"));
        state.apply_failure(&ticket, "offline");
        assert_eq!(state.items.len(), 18);
        assert_eq!(state.current_page, 1);
        assert!(state.has_more);
        assert!(state.error().is_some());

        // retrying starts the new filter from page 1 instead of appending to the old items
        let retry = state.begin_load_more().unwrap();
        assert_eq!(retry.kind, FetchKind::Reset);
        assert_eq!(retry.pages, 1..=1);
        assert_eq!(retry.filter.effective_category(), Some("01"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = ListingState::new(18);
        let old = state.begin_reset(ListingFilter::by_category("08"));
        let new = state.begin_reset(ListingFilter::by_keyword("计算"));

        let outcome = state.apply_success(&new, page_of(0..2, 1, 1));
        assert_eq!(outcome, ApplyOutcome::Applied { added: 2 });

        let outcome = state.apply_success(&old, page_of(50..68, 1, 26));
        assert_eq!(outcome, ApplyOutcome::Stale);
        assert_eq!(state.items.len(), 2);
        assert!(!state.has_more);
    }

    #[test]
    fn test_stale_failure_does_not_touch_newer_request() {
        let mut state = ListingState::new(18);
        let old = state.begin_reset(ListingFilter::default());
        let _new = state.begin_reset(ListingFilter::by_category("03"));
        assert_eq!(state.apply_failure(&old, "boom"), ApplyOutcome::Stale);
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_load_through_requests_contiguous_range() {
        let mut state = loaded_first_page(ListingFilter::default(), 10);
        let ticket = state.begin_load_through(4).unwrap();
        assert_eq!(ticket.pages, 2..=4);

        let pages = vec![
            page_of(18..36, 2, 10),
            page_of(36..54, 3, 10),
            page_of(54..72, 4, 10),
        ];
        let merged = MajorsPage::concat(pages).unwrap();
        state.apply_success(&ticket, merged);
        assert_eq!(state.current_page, 4);
        assert_eq!(state.items.len(), 72);
        assert!(state.has_more);
    }

    #[test]
    fn test_load_through_is_clamped_to_total_pages() {
        let mut state = loaded_first_page(ListingFilter::default(), 3);
        let ticket = state.begin_load_through(9).unwrap();
        assert_eq!(ticket.pages, 2..=3);
    }

    #[test]
    fn test_load_more_before_first_page_resets() {
        let mut state = ListingState::new(18);
        let ticket = state.begin_load_more().unwrap();
        assert_eq!(ticket.kind, FetchKind::Reset);
        assert_eq!(ticket.pages, 1..=1);
    }

    #[test]
    fn test_items_count_equals_unique_ids_over_many_pages() {
        let mut state = loaded_first_page(ListingFilter::default(), 6);
        let mut expected: HashSet<u32> = (0..18).collect();
        for p in 2..=6u32 {
            let ticket = state.begin_load_more().unwrap();
            // overlapping windows of 20 ids every 18
            let start = (p - 1) * 18 - 2;
            let ids: Vec<u32> = (start..start + 20).collect();
            expected.extend(ids.iter().copied());
            state.apply_success(&ticket, page_of(ids, p, 6));
        }
        assert_eq!(state.items.len(), expected.len());
        assert!(!state.has_more);
    }

    #[test]
    fn test_failed_reset_keeps_has_more_false() {
        let mut state = loaded_first_page(ListingFilter::by_category("02"), 1);
        assert!(!state.has_more);

        let ticket = state.begin_reset(ListingFilter::by_category("08"));
        state.apply_failure(&ticket, "offline");
        assert!(!state.has_more);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.items.len(), 18);

        // the new filter can still be retried from page 1
        let retry = state.begin_load_more().unwrap();
        assert_eq!(retry.kind, FetchKind::Reset);
        assert_eq!(retry.filter.effective_category(), Some("08"));
    }

    #[test]
    fn test_rearm_after_applied_page() {
        let mut state = loaded_first_page(ListingFilter::default(), 5);
        assert!(state.should_rearm_near_end(0));
        let seen = state.generation;
        assert!(!state.should_rearm_near_end(seen));

        let ticket = state.begin_load_more().unwrap();
        assert!(!state.should_rearm_near_end(seen));
        state.apply_success(&ticket, page_of(18..36, 2, 5));
        assert!(state.should_rearm_near_end(seen));
    }

    #[test]
    fn test_no_rearm_after_failure() {
        let mut state = loaded_first_page(ListingFilter::default(), 5);
        let seen = state.generation;
        let ticket = state.begin_load_more().unwrap();
        state.apply_failure(&ticket, "HTTP 503");
        assert!(!state.should_rearm_near_end(seen));
    }

    #[test]
    fn test_no_rearm_when_last_page_reached() {
        let mut state = loaded_first_page(ListingFilter::default(), 2);
        let seen = state.generation;
        let ticket = state.begin_load_more().unwrap();
        state.apply_success(&ticket, page_of(18..36, 2, 2));
        assert!(!state.should_rearm_near_end(seen));
    }

    #[test]
    fn test_sentinel_in_view_during_outage_issues_one_request() {
        use crate::shared::near_end::EdgeTrigger;

        let mut state = loaded_first_page(ListingFilter::default(), 5);
        let mut trigger = EdgeTrigger::default();
        let mut seen = state.generation;
        let mut requests = 0;

        // sentinel visible the whole time, backend down
        for _ in 0..10 {
            if trigger.observe(true) {
                if let Some(ticket) = state.begin_load_more() {
                    requests += 1;
                    state.apply_failure(&ticket, "HTTP 503");
                }
            }
            if state.should_rearm_near_end(seen) {
                trigger.rearm();
            }
            seen = state.generation;
        }
        assert_eq!(requests, 1);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_keyword_whitespace_change_keeps_listing() {
        let state = loaded_first_page(ListingFilter::by_keyword("计算"), 3);
        assert!(!state.keyword_needs_reset(&ListingFilter::by_keyword("计算 ")));
        assert!(state.keyword_needs_reset(&ListingFilter::by_keyword("物理")));
    }

    #[test]
    fn test_keyword_same_request_in_flight_is_not_resent() {
        let mut state = ListingState::new(18);
        state.begin_reset(ListingFilter::by_keyword("计算"));
        assert!(!state.keyword_needs_reset(&ListingFilter::by_keyword(" 计算")));
    }

    #[test]
    fn test_keyword_resent_after_error() {
        let mut state = ListingState::new(18);
        let ticket = state.begin_reset(ListingFilter::by_keyword("计算"));
        state.apply_failure(&ticket, "offline");
        assert!(state.keyword_needs_reset(&ListingFilter::by_keyword("计算")));
    }

    #[test]
    fn test_clearing_keyword_goes_back_to_category() {
        let state = loaded_first_page(ListingFilter::by_category("08").with_keyword("数"), 2);
        assert!(state.keyword_needs_reset(&ListingFilter::by_category("08")));
    }
}
