//! Application state and core logic

use crate::catalog::{CatalogSource, FixtureCatalog};
use crate::config::{TuiConfig, FIXTURES_ENV};
use crate::platform;
use crate::state::wizard::{format_money, RentalWizard, WizardSession, WizardTransition};
use crate::state::{
    AppState, DashboardMenu, ListingFilters, SplashState, View, ViewParams,
    DEFAULT_EQUIPMENT_ID,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::env;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Marketplace data source
    catalog: Box<dyn CatalogSource>,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create a new App instance, picking the catalog from config and environment
    pub async fn new(config: TuiConfig) -> Result<Self> {
        let mut load_error = None;
        let catalog = match config.fixtures_source(env::var(FIXTURES_ENV).ok()) {
            Some(path) => match FixtureCatalog::from_path(&path) {
                Ok(catalog) => catalog,
                Err(err) => {
                    load_error = Some(format!("{err}; using built-in catalog"));
                    FixtureCatalog::builtin()
                }
            },
            None => FixtureCatalog::builtin(),
        };

        let mut app = Self::with_catalog(Box::new(catalog), config).await?;
        if let Some(message) = load_error {
            app.push_error(message);
        }
        Ok(app)
    }

    /// Create an App over an explicit catalog
    pub async fn with_catalog(catalog: Box<dyn CatalogSource>, config: TuiConfig) -> Result<Self> {
        let mut state = AppState::default();
        let splash_state = if config.skip_splash() {
            None
        } else {
            state.current_view = View::Splash;
            Some(SplashState::new())
        };

        let mut app = Self {
            state,
            catalog,
            config,
            quit: false,
            status_message: None,
            splash_state,
        };
        if !app.in_splash() {
            app.load_current_view().await;
        }
        Ok(app)
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we moved to the landing page
    pub async fn update_splash(&mut self, terminal_height: u16) -> bool {
        let complete = match self.splash_state.as_mut() {
            Some(splash) => {
                splash.update(terminal_height);
                splash.is_complete()
            }
            None => false,
        };
        if complete {
            self.splash_state = None;
            self.state.current_view = View::Landing;
            self.load_current_view().await;
        }
        complete
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Currency prefix for rendered amounts
    pub fn currency(&self) -> &str {
        self.config.currency_symbol()
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Splash => self.handle_splash_key(key).await?,
            View::Landing => self.handle_landing_key(key).await?,
            View::EquipmentListing => self.handle_listing_key(key).await?,
            View::EquipmentDetails => self.handle_details_key(key).await?,
            View::RentalWorkflow => self.handle_wizard_key(key).await?,
            View::ClientDashboard | View::VendorDashboard | View::AdminDashboard => {
                self.handle_dashboard_key(key).await?
            }
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        tracing::info!("Navigating to {view:?}");
        // Save current view to history
        self.state
            .view_history
            .push((self.state.current_view, self.state.view_params.clone()));
        if let Some(id) = &params.equipment_id {
            self.state.selected_equipment_id = Some(id.clone());
        }
        self.state.current_view = view;
        self.state.view_params = params;
        self.state.reset_selection();
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        // Skip form views in history to go back to the last non-form view
        while let Some((view, params)) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            if self.state.current_view.is_form_view() {
                self.state.wizard = None;
            }
            self.state.current_view = view;
            self.state.view_params = params;
            self.state.reset_selection();
            return;
        }
    }

    /// Navigate and load the target view's data
    pub async fn open(&mut self, view: View, params: ViewParams) {
        self.navigate(view, params);
        self.load_current_view().await;
    }

    async fn back(&mut self) {
        let before = self.state.current_view;
        self.go_back();
        if before != self.state.current_view {
            self.load_current_view().await;
        }
    }

    /// Fetch whatever the current view shows from the catalog
    pub async fn load_current_view(&mut self) {
        match self.state.current_view {
            View::Splash => {}
            View::Landing => match self.catalog.landing().await {
                Ok(content) => self.state.landing = Some(content),
                Err(err) => self.push_error(format!("Failed to load landing page: {err}")),
            },
            View::EquipmentListing => match self.catalog.list_equipment().await {
                Ok(items) => self.state.equipment = items,
                Err(err) => self.push_error(format!("Failed to load equipment: {err}")),
            },
            View::EquipmentDetails => {
                let id = self.state.current_equipment_id().to_string();
                self.state.selected_image = 0;
                match self.catalog.equipment_detail(&id).await {
                    Ok(detail) => self.state.equipment_detail = Some(detail),
                    Err(err) => {
                        self.state.equipment_detail = None;
                        self.push_error(format!("Failed to load equipment: {err}"));
                    }
                }
            }
            View::RentalWorkflow => self.start_wizard().await,
            View::ClientDashboard => match self.catalog.client_dashboard().await {
                Ok(data) => self.state.client_dashboard = Some(data),
                Err(err) => self.push_error(format!("Failed to load client dashboard: {err}")),
            },
            View::VendorDashboard => match self.catalog.vendor_dashboard().await {
                Ok(data) => self.state.vendor_dashboard = Some(data),
                Err(err) => self.push_error(format!("Failed to load vendor dashboard: {err}")),
            },
            View::AdminDashboard => match self.catalog.admin_dashboard().await {
                Ok(data) => self.state.admin_dashboard = Some(data),
                Err(err) => self.push_error(format!("Failed to load admin dashboard: {err}")),
            },
        }
    }

    /// Open a fresh wizard for the selected equipment.
    ///
    /// The selected id is carried for display only; every request is priced
    /// from the default equipment's price table.
    async fn start_wizard(&mut self) {
        let id = self.state.current_equipment_id().to_string();
        match self.catalog.rental_offer(DEFAULT_EQUIPMENT_ID).await {
            Ok(offer) => {
                let wizard =
                    RentalWizard::new(offer, Some(id), self.config.rental_period());
                self.state.wizard = Some(WizardSession::new(wizard));
            }
            Err(err) => {
                self.state.wizard = None;
                self.push_error(format!("Cannot start rental request: {err}"));
                self.go_back();
            }
        }
    }

    /// Handle keys in Splash screen
    async fn handle_splash_key(&mut self, _key: KeyEvent) -> Result<()> {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
        Ok(())
    }

    /// Handle keys on the landing page
    async fn handle_landing_key(&mut self, key: KeyEvent) -> Result<()> {
        let category_count = self
            .state
            .landing
            .as_ref()
            .map(|l| l.categories.len())
            .unwrap_or(0);

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(category_count),
            KeyCode::Enter => {
                let category = self
                    .state
                    .landing
                    .as_ref()
                    .and_then(|l| l.categories.get(self.state.selected_index))
                    .map(|c| c.name.clone());
                self.state.listing_filters = match category {
                    Some(name) => ListingFilters::for_category(&name),
                    None => ListingFilters::default(),
                };
                self.open(View::EquipmentListing, ViewParams::default()).await;
            }
            KeyCode::Char('e') => {
                self.state.listing_filters.reset();
                self.open(View::EquipmentListing, ViewParams::default()).await;
            }
            KeyCode::Char('c') => self.open(View::ClientDashboard, ViewParams::default()).await,
            KeyCode::Char('v') => self.open(View::VendorDashboard, ViewParams::default()).await,
            KeyCode::Char('a') => self.open(View::AdminDashboard, ViewParams::default()).await,
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the equipment listing
    async fn handle_listing_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.search_active {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.state.search_active = false,
                KeyCode::Backspace => {
                    self.state.listing_filters.search.pop();
                    self.state.reset_selection();
                }
                KeyCode::Char(c) => {
                    self.state.listing_filters.search.push(c);
                    self.state.reset_selection();
                }
                _ => {}
            }
            return Ok(());
        }

        let result_count = self.state.filtered_equipment().len();
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => self.back().await,
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(result_count),
            KeyCode::Char('/') => self.state.search_active = true,
            KeyCode::Char('c') => {
                self.state.listing_filters.cycle_category();
                self.state.reset_selection();
            }
            KeyCode::Char('l') => {
                self.state.listing_filters.cycle_location();
                self.state.reset_selection();
            }
            KeyCode::Char('p') => {
                self.state.listing_filters.cycle_price_band();
                self.state.reset_selection();
            }
            KeyCode::Char('s') => {
                self.state.listing_filters.cycle_sort();
                self.state.reset_selection();
            }
            KeyCode::Char('r') => {
                self.state.listing_filters.reset();
                self.state.reset_selection();
            }
            KeyCode::Enter => {
                if let Some(id) = self.state.selected_equipment().map(|e| e.id.clone()) {
                    self.open(View::EquipmentDetails, ViewParams::equipment(id))
                        .await;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on an equipment page
    async fn handle_details_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => self.back().await,
            KeyCode::Left | KeyCode::Char('h') => self.state.prev_image(),
            KeyCode::Right | KeyCode::Char('l') => self.state.next_image(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Enter | KeyCode::Char('r') => {
                let id = self.state.current_equipment_id().to_string();
                self.open(View::RentalWorkflow, ViewParams::equipment(id))
                    .await;
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the rental wizard
    async fn handle_wizard_key(&mut self, key: KeyEvent) -> Result<()> {
        // Header back action leaves the wizard for the equipment page
        if key.code == KeyCode::Esc {
            let id = self.state.current_equipment_id().to_string();
            self.state.wizard = None;
            if self.state.view_history.last().map(|(view, _)| *view)
                == Some(View::EquipmentDetails)
            {
                self.back().await;
            } else {
                self.open(View::EquipmentDetails, ViewParams::equipment(id))
                    .await;
            }
            return Ok(());
        }

        let Some(session) = self.state.wizard.as_mut() else {
            return Ok(());
        };

        let mut transition = None;
        if platform::is_action_modifier(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => transition = Some(session.advance()),
                KeyCode::Char('b') => {
                    session.retreat();
                }
                _ => {}
            }
        } else {
            match key.code {
                KeyCode::Tab | KeyCode::Down => session.next_field(),
                KeyCode::BackTab | KeyCode::Up => session.prev_field(),
                KeyCode::Left => session.cycle_choice(false),
                KeyCode::Right => session.cycle_choice(true),
                KeyCode::Enter => {
                    if session.is_buttons_row_active() {
                        transition = session.press_selected_button();
                    } else if session.active_field().is_some_and(|f| f.is_multiline()) {
                        session.input_newline();
                    } else {
                        session.next_field();
                    }
                }
                KeyCode::Backspace => session.backspace(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    session.input_char(c)
                }
                _ => {}
            }
        }

        if transition == Some(WizardTransition::Submitted) {
            self.finish_rental_request().await;
        }
        Ok(())
    }

    /// Leave the wizard after submission and land on the client dashboard
    async fn finish_rental_request(&mut self) {
        if let Some(session) = self.state.wizard.take() {
            let total = session.wizard.breakdown().grand_total();
            self.status_message = Some(format!(
                "Rental request for {} submitted ({})",
                session.wizard.offer().name,
                format_money(self.currency(), total)
            ));
        }
        self.open(View::ClientDashboard, ViewParams::default()).await;
    }

    /// Handle keys on the three dashboards
    async fn handle_dashboard_key(&mut self, key: KeyEvent) -> Result<()> {
        let forward = match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(true),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(false),
            _ => None,
        };
        if let Some(forward) = forward {
            self.cycle_dashboard_menu(forward);
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc | KeyCode::Backspace => self.back().await,
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Char('e') if self.state.current_view == View::ClientDashboard => {
                self.state.listing_filters.reset();
                self.open(View::EquipmentListing, ViewParams::default()).await;
            }
            _ => {}
        }
        Ok(())
    }

    fn cycle_dashboard_menu(&mut self, forward: bool) {
        fn step<M: DashboardMenu>(menu: &mut M, forward: bool) {
            *menu = if forward { menu.next() } else { menu.prev() };
        }
        match self.state.current_view {
            View::ClientDashboard => step(&mut self.state.client_menu, forward),
            View::VendorDashboard => step(&mut self.state.vendor_menu, forward),
            View::AdminDashboard => step(&mut self.state.admin_menu, forward),
            _ => return,
        }
        self.state.scroll_offset = 0;
    }

    /// Handle mouse events
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.in_splash() {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                if let Some(ref mut splash) = self.splash_state {
                    splash.skip();
                }
            }
            return Ok(());
        }

        let code = match mouse.kind {
            MouseEventKind::ScrollUp => KeyCode::Up,
            MouseEventKind::ScrollDown => KeyCode::Down,
            _ => return Ok(()),
        };
        if self.state.current_view == View::RentalWorkflow {
            return Ok(());
        }
        self.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, MockCatalogSource};
    use crate::state::wizard::{RentalPeriod, WizardField, WizardStep};
    use crate::state::{AdminMenu, ClientMenu, PriceBand};
    use pretty_assertions::assert_eq;

    fn no_splash() -> TuiConfig {
        TuiConfig {
            skip_splash: Some(true),
            ..Default::default()
        }
    }

    async fn fixture_app() -> App {
        App::with_catalog(Box::new(FixtureCatalog::builtin()), no_splash())
            .await
            .unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    mod app_basic_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_starts_on_landing_without_splash() {
            let app = fixture_app().await;
            assert!(!app.should_quit());
            assert!(!app.in_splash());
            assert_eq!(app.state.current_view, View::Landing);
            assert_eq!(app.state.landing.as_ref().unwrap().categories.len(), 5);
        }

        #[tokio::test]
        async fn test_starts_in_splash_by_default() {
            let app = App::with_catalog(Box::new(FixtureCatalog::builtin()), TuiConfig::default())
                .await
                .unwrap();
            assert!(app.in_splash());
            assert!(app.splash_state.is_some());
            assert!(app.state.landing.is_none());
        }

        #[tokio::test]
        async fn test_q_quits_from_landing() {
            let mut app = fixture_app().await;
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }
    }

    mod splash_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_update_splash_no_splash_state() {
            let mut app = fixture_app().await;
            assert!(!app.update_splash(24).await);
        }

        #[tokio::test]
        async fn test_key_skips_splash_then_lands() {
            let mut app = App::with_catalog(Box::new(FixtureCatalog::builtin()), TuiConfig::default())
                .await
                .unwrap();
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert!(app.update_splash(24).await);
            assert_eq!(app.state.current_view, View::Landing);
            assert!(app.splash_state.is_none());
            assert!(app.state.landing.is_some());
        }

        #[tokio::test]
        async fn test_update_splash_not_complete_yet() {
            let mut app = App::with_catalog(Box::new(FixtureCatalog::builtin()), TuiConfig::default())
                .await
                .unwrap();
            assert!(!app.update_splash(24).await);
            assert_eq!(app.state.current_view, View::Splash);
        }
    }

    mod navigation_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_navigate_saves_history() {
            let mut app = fixture_app().await;
            app.navigate(View::EquipmentListing, ViewParams::default());
            assert_eq!(app.state.current_view, View::EquipmentListing);
            assert_eq!(app.state.view_history.len(), 1);
            assert_eq!(app.state.view_history[0].0, View::Landing);
        }

        #[tokio::test]
        async fn test_navigate_keeps_equipment_when_params_are_empty() {
            let mut app = fixture_app().await;
            app.navigate(View::EquipmentDetails, ViewParams::equipment("EQ-004"));
            app.navigate(View::ClientDashboard, ViewParams::default());
            assert_eq!(app.state.current_equipment_id(), "EQ-004");
            app.navigate(View::EquipmentDetails, ViewParams::equipment("EQ-002"));
            assert_eq!(app.state.current_equipment_id(), "EQ-002");
        }

        #[tokio::test]
        async fn test_go_back_skips_wizard() {
            let mut app = fixture_app().await;
            app.navigate(View::EquipmentDetails, ViewParams::equipment("EQ-001"));
            app.navigate(View::RentalWorkflow, ViewParams::equipment("EQ-001"));
            app.navigate(View::ClientDashboard, ViewParams::default());
            app.go_back();
            assert_eq!(app.state.current_view, View::EquipmentDetails);
        }

        #[tokio::test]
        async fn test_go_back_empty_history_does_nothing() {
            let mut app = fixture_app().await;
            app.go_back();
            assert_eq!(app.state.current_view, View::Landing);
        }

        #[tokio::test]
        async fn test_landing_category_opens_filtered_listing() {
            let mut app = fixture_app().await;
            // Pumps is the fourth category
            for _ in 0..3 {
                app.handle_key(key(KeyCode::Down)).await.unwrap();
            }
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_view, View::EquipmentListing);
            assert_eq!(app.state.listing_filters.category, "Pumps");
            let ids: Vec<_> = app
                .state
                .filtered_equipment()
                .iter()
                .map(|e| e.id.as_str())
                .collect();
            assert_eq!(ids, vec!["EQ-002", "EQ-006"]);
        }

        #[tokio::test]
        async fn test_dashboard_shortcuts() {
            let mut app = fixture_app().await;
            app.handle_key(key(KeyCode::Char('v'))).await.unwrap();
            assert_eq!(app.state.current_view, View::VendorDashboard);
            assert!(app.state.vendor_dashboard.is_some());

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            app.handle_key(key(KeyCode::Char('a'))).await.unwrap();
            assert_eq!(app.state.current_view, View::AdminDashboard);
            assert!(app.state.admin_dashboard.is_some());
        }
    }

    mod listing_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        async fn listing_app() -> App {
            let mut app = fixture_app().await;
            app.handle_key(key(KeyCode::Char('e'))).await.unwrap();
            app
        }

        #[tokio::test]
        async fn test_filters_cycle_with_keys() {
            let mut app = listing_app().await;
            assert_eq!(app.state.filtered_equipment().len(), 6);

            app.handle_key(key(KeyCode::Char('p'))).await.unwrap();
            assert_eq!(app.state.listing_filters.price_band, PriceBand::UpTo500);
            assert!(app.state.filtered_equipment().is_empty());

            app.handle_key(key(KeyCode::Char('r'))).await.unwrap();
            assert!(!app.state.listing_filters.is_filtered());
        }

        #[tokio::test]
        async fn test_search_mode_captures_text() {
            let mut app = listing_app().await;
            app.handle_key(key(KeyCode::Char('/'))).await.unwrap();
            assert!(app.state.search_active);
            type_text(&mut app, "pump").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(!app.state.search_active);
            assert_eq!(app.state.listing_filters.search, "pump");
            assert_eq!(app.state.filtered_equipment().len(), 2);
            // Still on the listing; Enter only closed the search box
            assert_eq!(app.state.current_view, View::EquipmentListing);
        }

        #[tokio::test]
        async fn test_enter_opens_selected_details() {
            let mut app = listing_app().await;
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_view, View::EquipmentDetails);
            assert_eq!(app.state.current_equipment_id(), "EQ-002");
            assert_eq!(
                app.state.equipment_detail.as_ref().unwrap().vendor.name,
                "Halliburton"
            );
        }
    }

    mod wizard_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        async fn wizard_app(id: &str) -> App {
            let mut app = fixture_app().await;
            app.open(View::EquipmentDetails, ViewParams::equipment(id))
                .await;
            app.handle_key(key(KeyCode::Char('r'))).await.unwrap();
            app
        }

        fn wizard(app: &App) -> &WizardSession {
            app.state.wizard.as_ref().unwrap()
        }

        #[tokio::test]
        async fn test_request_rental_opens_wizard_for_equipment() {
            let app = wizard_app("EQ-002").await;
            assert_eq!(app.state.current_view, View::RentalWorkflow);
            let session = wizard(&app);
            assert_eq!(session.step(), WizardStep::SelectEquipment);
            assert_eq!(session.wizard.equipment_id(), Some("EQ-002"));
            // Priced from the default table, not the EQ-002 listing
            assert_eq!(session.wizard.offer().equipment_id, DEFAULT_EQUIPMENT_ID);
            assert_eq!(session.wizard.offer().price_per_day, 1250);
        }

        #[tokio::test]
        async fn test_configured_default_period() {
            let config = TuiConfig {
                default_rental_period: Some("weekly".to_string()),
                ..no_splash()
            };
            let mut app = App::with_catalog(Box::new(FixtureCatalog::builtin()), config)
                .await
                .unwrap();
            app.open(View::RentalWorkflow, ViewParams::default()).await;
            assert_eq!(
                wizard(&app).wizard.form().rental_period,
                RentalPeriod::Weekly
            );
        }

        #[tokio::test]
        async fn test_full_flow_submits_to_client_dashboard() {
            let mut app = wizard_app("EQ-001").await;

            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(wizard(&app).step(), WizardStep::ChooseDates);

            // Period field is focused first
            assert_eq!(wizard(&app).active_field(), Some(WizardField::RentalPeriod));
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "2024-11-01").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "2024-11-06").await;
            assert_eq!(wizard(&app).wizard.compute_total(), 6250);
            assert!(wizard(&app).wizard.shows_estimate());

            app.handle_key(ctrl('s')).await.unwrap();
            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(wizard(&app).step(), WizardStep::Confirm);
            assert_eq!(wizard(&app).wizard.breakdown().grand_total(), 7000);

            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(app.state.current_view, View::ClientDashboard);
            assert!(app.state.wizard.is_none());
            assert_eq!(
                app.status_message.as_deref(),
                Some("Rental request for Wireline Tools - T-Series Complete Kit submitted ($7,000)")
            );
        }

        #[tokio::test]
        async fn test_buttons_row_back_and_continue() {
            let mut app = wizard_app("EQ-001").await;
            // Step 1 has no fields, so Enter presses Continue
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(wizard(&app).step(), WizardStep::ChooseDates);

            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            assert!(wizard(&app).is_buttons_row_active());
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(wizard(&app).step(), WizardStep::SelectEquipment);
        }

        #[tokio::test]
        async fn test_period_keys_reprice() {
            let mut app = wizard_app("EQ-001").await;
            app.handle_key(ctrl('s')).await.unwrap();
            app.handle_key(key(KeyCode::Char('w'))).await.unwrap();
            assert_eq!(
                wizard(&app).wizard.form().rental_period,
                RentalPeriod::Weekly
            );
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(
                wizard(&app).wizard.form().rental_period,
                RentalPeriod::Monthly
            );
        }

        #[tokio::test]
        async fn test_escape_returns_to_details() {
            let mut app = wizard_app("EQ-003").await;
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::EquipmentDetails);
            assert!(app.state.wizard.is_none());
            assert_eq!(app.state.current_equipment_id(), "EQ-003");
        }

        #[tokio::test]
        async fn test_escape_keeps_history_bounded() {
            let mut app = wizard_app("EQ-003").await;
            let depth = app.state.view_history.len();
            for _ in 0..3 {
                app.handle_key(key(KeyCode::Esc)).await.unwrap();
                assert_eq!(app.state.current_view, View::EquipmentDetails);
                app.handle_key(key(KeyCode::Char('r'))).await.unwrap();
                assert_eq!(app.state.current_view, View::RentalWorkflow);
            }
            assert_eq!(app.state.view_history.len(), depth);
            assert!(app
                .state
                .view_history
                .iter()
                .all(|(view, _)| *view != View::RentalWorkflow));
        }

        #[tokio::test]
        async fn test_escape_without_history_opens_details() {
            let mut app = fixture_app().await;
            app.state.view_history.clear();
            app.state.current_view = View::RentalWorkflow;
            app.state.view_params = ViewParams::equipment("EQ-005");
            app.state.selected_equipment_id = Some("EQ-005".to_string());
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::EquipmentDetails);
            assert_eq!(app.state.current_equipment_id(), "EQ-005");
            assert!(app.state.equipment_detail.is_some());
        }

        #[tokio::test]
        async fn test_unknown_equipment_uses_default_offer() {
            let mut app = fixture_app().await;
            app.open(View::RentalWorkflow, ViewParams::equipment("EQ-404"))
                .await;
            let session = wizard(&app);
            // The raw id is shown while the default price table is used
            assert_eq!(session.wizard.equipment_id(), Some("EQ-404"));
            assert_eq!(session.wizard.offer().equipment_id, DEFAULT_EQUIPMENT_ID);
            assert!(!app.state.has_errors());
        }
    }

    mod dashboard_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_menu_tabs_are_private_per_dashboard() {
            let mut app = fixture_app().await;
            app.open(View::ClientDashboard, ViewParams::default()).await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.client_menu, ClientMenu::Rentals);

            app.open(View::AdminDashboard, ViewParams::default()).await;
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            assert_eq!(app.state.admin_menu, AdminMenu::Settings);
            assert_eq!(app.state.client_menu, ClientMenu::Rentals);
        }

        #[tokio::test]
        async fn test_client_dashboard_browse_shortcut() {
            let mut app = fixture_app().await;
            app.open(View::ClientDashboard, ViewParams::default()).await;
            app.handle_key(key(KeyCode::Char('e'))).await.unwrap();
            assert_eq!(app.state.current_view, View::EquipmentListing);
        }
    }

    mod catalog_failure_tests {
        use super::*;
        use pretty_assertions::assert_eq;
        use crate::catalog::MarketplaceFixtures;

        #[tokio::test]
        async fn test_wizard_only_asks_for_default_price_table() {
            let mut catalog = MockCatalogSource::new();
            catalog
                .expect_landing()
                .returning(|| Ok(MarketplaceFixtures::builtin().landing));
            catalog
                .expect_rental_offer()
                .withf(|id| id == DEFAULT_EQUIPMENT_ID)
                .times(1)
                .returning(|_| Ok(MarketplaceFixtures::builtin().details[0].offer()));

            let mut app = App::with_catalog(Box::new(catalog), no_splash())
                .await
                .unwrap();
            app.open(View::RentalWorkflow, ViewParams::equipment("EQ-006"))
                .await;
            let session = app.state.wizard.as_ref().unwrap();
            assert_eq!(session.wizard.equipment_id(), Some("EQ-006"));
            assert_eq!(session.wizard.offer().price_per_month, 28000);
        }

        #[tokio::test]
        async fn test_load_failure_shows_error_dialog() {
            let mut catalog = MockCatalogSource::new();
            catalog.expect_landing().returning(|| {
                Err(CatalogError::Io {
                    path: "fixtures.json".into(),
                    source: std::io::Error::other("disk on fire"),
                })
            });

            let mut app = App::with_catalog(Box::new(catalog), no_splash())
                .await
                .unwrap();
            assert!(app.state.has_errors());
            assert!(app
                .state
                .current_error()
                .unwrap()
                .starts_with("Failed to load landing page"));

            // Modal: other keys are swallowed until dismissed
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_missing_details_clear_previous_page() {
            let mut catalog = MockCatalogSource::new();
            catalog
                .expect_landing()
                .returning(|| Ok(MarketplaceFixtures::builtin().landing));
            catalog
                .expect_equipment_detail()
                .withf(|id| id == "EQ-777")
                .returning(|id| Err(CatalogError::not_found("equipment", id)));

            let mut app = App::with_catalog(Box::new(catalog), no_splash())
                .await
                .unwrap();
            app.open(View::EquipmentDetails, ViewParams::equipment("EQ-777"))
                .await;
            assert!(app.state.equipment_detail.is_none());
            assert_eq!(
                app.state.current_error(),
                Some("Failed to load equipment: equipment EQ-777 not found")
            );
        }

        #[tokio::test]
        async fn test_wizard_without_any_offer_goes_back() {
            let mut catalog = MockCatalogSource::new();
            catalog
                .expect_landing()
                .returning(|| Ok(MarketplaceFixtures::builtin().landing));
            catalog
                .expect_rental_offer()
                .times(1)
                .returning(|id| Err(CatalogError::not_found("equipment", id)));

            let mut app = App::with_catalog(Box::new(catalog), no_splash())
                .await
                .unwrap();
            app.open(View::RentalWorkflow, ViewParams::equipment("EQ-404"))
                .await;
            assert_eq!(app.state.current_view, View::Landing);
            assert!(app.state.wizard.is_none());
            assert!(app.state.has_errors());
        }
    }
}
