/// Presentation state for the single movie screen
///
/// Tracks which movie is on screen, whether the detail sheet is open, and
/// whether a pick animation is in flight. All transitions that are not
/// listed on `Phase` leave the state untouched.

use super::catalog::{CatalogStore, RandomSource, RngSource};
use super::data::Movie;
use rand::rngs::StdRng;

/// Where the screen currently is. Indices always point into the owned catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No movie has been shown yet
    Idle,
    /// A movie card is visible, details closed
    Showing(usize),
    /// The detail sheet is open for this movie
    Detail(usize),
}

/// Ticket for a pick that will settle after the shuffle delay.
///
/// Only the most recently issued ticket can settle; older ones are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickTicket {
    generation: u64,
}

impl PickTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owns the catalog store and the three-field view state
pub struct Presentation<R = RngSource<StdRng>> {
    store: CatalogStore<R>,
    phase: Phase,
    animating: bool,
    generation: u64,
}

impl<R: RandomSource> Presentation<R> {
    pub fn new(store: CatalogStore<R>) -> Self {
        Presentation {
            store,
            phase: Phase::Idle,
            animating: false,
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn store(&self) -> &CatalogStore<R> {
        &self.store
    }

    /// The movie on screen, if any
    pub fn current_movie(&self) -> Option<&Movie> {
        match self.phase {
            Phase::Idle => None,
            Phase::Showing(index) | Phase::Detail(index) => self.store.catalog().get(index),
        }
    }

    pub fn details_visible(&self) -> bool {
        matches!(self.phase, Phase::Detail(_))
    }

    pub fn animating(&self) -> bool {
        self.animating
    }

    /// First display: Idle -> Showing(random movie)
    pub fn appear(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }

        let index = self.store.pick_random_index();
        self.phase = Phase::Showing(index);
        tracing::debug!(index, "first movie shown");
        true
    }

    /// Start a pick. The caller waits for the shuffle delay and then hands
    /// the ticket back to `settle_pick`.
    ///
    /// Any pick still pending becomes stale. Ignored while details are open.
    pub fn request_pick(&mut self) -> Option<PickTicket> {
        if self.details_visible() {
            return None;
        }

        self.generation += 1;
        self.animating = true;
        tracing::debug!(generation = self.generation, "pick requested");

        Some(PickTicket { generation: self.generation })
    }

    /// Finish a pick started by `request_pick`.
    ///
    /// Returns the newly shown movie, or `None` when the ticket was superseded.
    pub fn settle_pick(&mut self, ticket: PickTicket) -> Option<&Movie> {
        if ticket.generation != self.generation || self.details_visible() {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "dropping stale pick"
            );
            return None;
        }

        let index = self.store.pick_random_index();
        self.phase = Phase::Showing(index);
        self.animating = false;
        self.store.catalog().get(index)
    }

    /// Showing(m) -> Detail(m). Cancels any pending pick.
    pub fn card_tapped(&mut self) -> bool {
        let Phase::Showing(index) = self.phase else {
            return false;
        };

        self.generation += 1;
        self.animating = false;
        self.phase = Phase::Detail(index);
        true
    }

    /// Detail(m) -> Showing(m)
    pub fn close_requested(&mut self) -> bool {
        let Phase::Detail(index) = self.phase else {
            return false;
        };

        self.phase = Phase::Showing(index);
        true
    }
}

impl<R> std::fmt::Debug for Presentation<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presentation")
            .field("phase", &self.phase)
            .field("animating", &self.animating)
            .field("generation", &self.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::tests::{sample_catalog, Scripted};

    fn presentation(seed: u64) -> Presentation {
        Presentation::new(CatalogStore::with_source(sample_catalog(), RngSource::seeded(seed)))
    }

    fn snapshot<R: RandomSource>(p: &Presentation<R>) -> (Phase, bool, bool) {
        (p.phase(), p.details_visible(), p.animating())
    }

    #[test]
    fn test_starts_idle() {
        let p = presentation(1);

        assert_eq!(p.phase(), Phase::Idle);
        assert!(p.current_movie().is_none());
        assert!(!p.details_visible());
        assert!(!p.animating());
    }

    #[test]
    fn test_idle_only_reaches_showing() {
        for seed in 0..50 {
            let mut p = presentation(seed);

            // Nothing to tap or close yet
            assert!(!p.card_tapped());
            assert!(!p.close_requested());
            assert_eq!(p.phase(), Phase::Idle);

            assert!(p.appear());
            let Phase::Showing(index) = p.phase() else {
                panic!("expected Showing, got {:?}", p.phase());
            };
            let movie = p.current_movie().unwrap();
            assert_eq!(p.store().catalog().get(index), Some(movie));
            assert!(p.store().catalog().contains(movie));
        }
    }

    #[test]
    fn test_appear_only_fires_once() {
        let mut p = presentation(7);
        assert!(p.appear());
        let before = p.phase();

        assert!(!p.appear());
        assert_eq!(p.phase(), before);
    }

    #[test]
    fn test_pick_from_idle_settles_to_showing() {
        let mut p = presentation(3);

        let ticket = p.request_pick().unwrap();
        assert_eq!(p.phase(), Phase::Idle);
        assert!(p.animating());

        assert!(p.settle_pick(ticket).is_some());
        assert!(matches!(p.phase(), Phase::Showing(_)));
        assert!(!p.animating());
    }

    #[test]
    fn test_card_tap_keeps_movie() {
        let mut p = presentation(11);
        p.appear();
        let shown = p.current_movie().unwrap().id();

        assert!(p.card_tapped());
        assert!(p.details_visible());
        assert_eq!(p.current_movie().unwrap().id(), shown);
        assert!(matches!(p.phase(), Phase::Detail(_)));
    }

    #[test]
    fn test_close_returns_to_same_movie() {
        let mut p = presentation(12);
        p.appear();
        let Phase::Showing(index) = p.phase() else { unreachable!() };

        p.card_tapped();
        assert!(p.close_requested());

        assert_eq!(p.phase(), Phase::Showing(index));
        assert!(!p.details_visible());
    }

    #[test]
    fn test_close_while_showing_is_noop() {
        let mut p = presentation(13);
        p.appear();
        let before = snapshot(&p);

        assert!(!p.close_requested());
        assert!(!p.close_requested());
        assert_eq!(snapshot(&p), before);
    }

    #[test]
    fn test_pick_is_two_phase() {
        let catalog = sample_catalog();
        let store = CatalogStore::with_source(catalog, Scripted(vec![Some(0), Some(3)]));
        let mut p = Presentation::new(store);
        p.appear();
        assert_eq!(p.phase(), Phase::Showing(0));

        let ticket = p.request_pick().unwrap();
        // Animation starts immediately, the movie changes only on settle
        assert!(p.animating());
        assert_eq!(p.phase(), Phase::Showing(0));

        let movie = p.settle_pick(ticket).unwrap();
        assert_eq!(movie.title(), "D");
        assert_eq!(p.phase(), Phase::Showing(3));
        assert!(!p.animating());
    }

    #[test]
    fn test_second_pick_supersedes_first() {
        let catalog = sample_catalog();
        let store = CatalogStore::with_source(catalog, Scripted(vec![Some(0), Some(2)]));
        let mut p = Presentation::new(store);
        p.appear();

        let first = p.request_pick().unwrap();
        let second = p.request_pick().unwrap();
        assert!(second.generation() > first.generation());

        // The stale timer fires first and changes nothing
        assert!(p.settle_pick(first).is_none());
        assert_eq!(p.phase(), Phase::Showing(0));
        assert!(p.animating());

        assert_eq!(p.settle_pick(second).unwrap().title(), "C");
        // A ticket can only settle once
        assert!(p.settle_pick(second).is_none());
    }

    #[test]
    fn test_opening_details_cancels_pending_pick() {
        let mut p = presentation(21);
        p.appear();
        let shown = p.phase();

        let ticket = p.request_pick().unwrap();
        assert!(p.card_tapped());
        assert!(!p.animating());

        assert!(p.settle_pick(ticket).is_none());
        let Phase::Detail(index) = p.phase() else { unreachable!() };
        assert_eq!(Phase::Showing(index), shown);
    }

    #[test]
    fn test_pick_ignored_while_details_open() {
        let mut p = presentation(22);
        p.appear();
        p.card_tapped();
        let before = snapshot(&p);

        assert!(p.request_pick().is_none());
        assert!(!p.card_tapped());
        assert_eq!(snapshot(&p), before);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut p = presentation(99);

        p.appear();
        let x = p.current_movie().unwrap().clone();
        assert!(p.store().catalog().contains(&x));

        p.card_tapped();
        assert_eq!(p.current_movie(), Some(&x));
        assert!(p.details_visible());

        p.close_requested();
        assert_eq!(p.current_movie(), Some(&x));
        assert!(!p.details_visible());

        let ticket = p.request_pick().unwrap();
        let y = p.settle_pick(ticket).unwrap().clone();
        assert!(p.store().catalog().contains(&y));
        assert_eq!(p.current_movie(), Some(&y));
    }
}
