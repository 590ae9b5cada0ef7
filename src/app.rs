//! Application state: registry, active draw, and view-state wiring.
//!
//! All user actions from the display layer land here: `draw`, `add`,
//! `update`, `delete`, `open_settings`, `close_settings`, plus the event
//! loop's `tick`. Registry mutations persist to the injected store
//! immediately; the draw path only ever reads.

use crate::draw::{draw_prize, DrawOutcome, DrawSession};
use crate::prizes::{PrizeUpdate, Registry};
use crate::storage::PrizeStore;
use rand::Rng;
use std::io;

pub struct App<S: PrizeStore> {
    store: S,
    registry: Registry,
    /// Current draw choreography; `None` when idle.
    pub active_draw: Option<DrawSession>,
    /// Settings overlay visibility, orthogonal to the draw phase.
    pub settings_open: bool,
}

impl<S: PrizeStore> App<S> {
    /// Loads the registry from the store, falling back silently to the
    /// five-prize default set when nothing valid is persisted.
    pub fn new(store: S) -> Self {
        let registry = match store.load() {
            Some(prizes) => Registry::new(prizes),
            None => Registry::with_defaults(),
        };
        Self {
            store,
            registry,
            active_draw: None,
            settings_open: false,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// True while a draw is pending (settling or holding before reveal).
    pub fn draw_in_progress(&self) -> bool {
        self.active_draw
            .as_ref()
            .map(|s| s.in_progress())
            .unwrap_or(false)
    }

    /// The last outcome, once its reveal has activated.
    pub fn revealed_outcome(&self) -> Option<&DrawOutcome> {
        self.active_draw.as_ref()?.revealed_outcome()
    }

    /// Starts a draw: rolls the outcome now, then holds it through the
    /// choreography. Ignored while a draw is already pending. Returns
    /// whether a draw was started.
    pub fn request_draw(&mut self, rng: &mut impl Rng) -> bool {
        if self.draw_in_progress() {
            return false;
        }
        let outcome = draw_prize(self.registry.prizes(), rng);
        self.active_draw = Some(DrawSession::begin(outcome));
        true
    }

    /// Advances the draw choreography by one logic tick.
    pub fn tick(&mut self) {
        if let Some(session) = &mut self.active_draw {
            session.tick();
        }
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    /// Appends a new prize and persists. Returns the derived id.
    pub fn add_prize(&mut self) -> io::Result<String> {
        let id = self.registry.add();
        self.persist()?;
        Ok(id)
    }

    /// Applies a single-field edit and persists. Silent no-op on an absent
    /// id, but the snapshot is still written.
    pub fn update_prize(&mut self, id: &str, update: PrizeUpdate) -> io::Result<()> {
        self.registry.update(id, update);
        self.persist()
    }

    /// Removes a prize and persists.
    pub fn delete_prize(&mut self, id: &str) -> io::Result<()> {
        self.registry.delete(id);
        self.persist()
    }

    fn persist(&self) -> io::Result<()> {
        self.store.save(self.registry.prizes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn new_app_falls_back_to_defaults() {
        let app = App::new(MemoryStore::new());
        assert_eq!(app.registry().len(), 5);
        assert!(!app.draw_in_progress());
        assert!(!app.settings_open);
    }

    #[test]
    fn new_app_falls_back_on_malformed_state() {
        let app = App::new(MemoryStore::with_contents("{{{ not json"));
        assert_eq!(app.registry().len(), 5);
    }

    #[test]
    fn new_app_loads_persisted_registry() {
        let mut app = App::new(MemoryStore::new());
        app.delete_prize("2").unwrap();

        let contents = app.store.contents().unwrap();
        let reloaded = App::new(MemoryStore::with_contents(contents));
        assert_eq!(reloaded.registry().len(), 4);
        assert!(reloaded.registry().get("2").is_none());
    }

    #[test]
    fn request_draw_is_ignored_while_pending() {
        let mut app = App::new(MemoryStore::new());
        let mut rng = create_test_rng();

        assert!(app.request_draw(&mut rng));
        assert!(app.draw_in_progress());
        assert!(!app.request_draw(&mut rng), "re-entrant draw must be ignored");

        // Drain the choreography; once revealed, a new draw is allowed.
        while app.draw_in_progress() {
            app.tick();
        }
        assert!(app.revealed_outcome().is_some());
        assert!(app.request_draw(&mut rng));
    }

    #[test]
    fn outcome_hidden_until_reveal() {
        let mut app = App::new(MemoryStore::new());
        let mut rng = create_test_rng();
        app.request_draw(&mut rng);

        while app.draw_in_progress() {
            assert!(app.revealed_outcome().is_none());
            app.tick();
        }
        assert!(app.revealed_outcome().is_some());
    }

    #[test]
    fn mutations_persist_immediately() {
        let mut app = App::new(MemoryStore::new());
        assert!(app.store.contents().is_none());

        let id = app.add_prize().unwrap();
        assert_eq!(id, "6");
        assert!(app.store.contents().unwrap().contains("新奖项 6"));

        app.update_prize("6", PrizeUpdate::Name("纪念奖".to_string()))
            .unwrap();
        assert!(app.store.contents().unwrap().contains("纪念奖"));

        app.delete_prize("6").unwrap();
        assert!(!app.store.contents().unwrap().contains("纪念奖"));
    }

    #[test]
    fn settings_toggle_is_orthogonal_to_drawing() {
        let mut app = App::new(MemoryStore::new());
        let mut rng = create_test_rng();

        app.request_draw(&mut rng);
        app.open_settings();
        assert!(app.settings_open);
        assert!(app.draw_in_progress());

        app.close_settings();
        assert!(!app.settings_open);
        assert!(app.draw_in_progress());
    }
}
