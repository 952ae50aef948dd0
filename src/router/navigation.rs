// ============================================================================
// NAVIGATION CONTROLLER - resolve → authorize → apply
// ============================================================================
// Se ejecuta completo en cada `hashchange` y en la carga inicial. No hay cola
// ni cancelación: si llegan dos navegaciones seguidas, gana el último fetch
// que termine.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::router::error::LoadError;
use crate::router::host::{FragmentFetcher, ViewHost};
use crate::router::loader::{LoadOutcome, ViewLoader};
use crate::router::routes::RouteTable;
use crate::state::{tour_steps_json, OnboardingState, SessionState};

/// Por qué se terminó mostrando otra vista distinta de la pedida
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Redirect {
    /// La vista no existe → fallback
    UnknownRoute { requested: String },
    /// La vista requiere un rol que la sesión no tiene → landing
    Unauthorized { requested: String, required_role: String },
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Resolution {
    pub view: String,
    pub redirect: Option<Redirect>,
}

pub struct NavigationController<H, F> {
    host: H,
    routes: Rc<RouteTable>,
    loader: ViewLoader<F>,
    session: SessionState,
    onboarding: Rc<OnboardingState>,
    landing_view: String,
    fallback_view: String,
    tour_delay_ms: u32,
}

impl<H: ViewHost, F: FragmentFetcher> NavigationController<H, F> {
    pub fn new(
        host: H,
        routes: Rc<RouteTable>,
        fetcher: F,
        session: SessionState,
        onboarding: Rc<OnboardingState>,
        config: &AppConfig,
    ) -> Self {
        Self {
            host,
            loader: ViewLoader::new(routes.clone(), fetcher),
            routes,
            session,
            onboarding,
            landing_view: config.landing_view.clone(),
            fallback_view: config.fallback_view.clone(),
            tour_delay_ms: config.tour_start_delay_ms,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn onboarding(&self) -> &OnboardingState {
        &self.onboarding
    }

    /// Resolve + authorize. Reescribe el fragmento visible si hubo redirección.
    pub fn resolve(&self) -> Resolution {
        let fragment = self.host.location_fragment();
        let requested = if fragment.is_empty() { self.landing_view.clone() } else { fragment };

        let resolution = self.authorize(self.resolve_name(requested));

        if let Some(redirect) = &resolution.redirect {
            log::warn!("↪️ [NAV] {:?} → #{}", redirect, resolution.view);
            if let Err(e) = self.host.replace_fragment(&resolution.view) {
                log::error!("❌ [NAV] No se pudo reescribir el fragmento: {}", e);
            }
        }
        resolution
    }

    fn resolve_name(&self, requested: String) -> Resolution {
        if self.routes.contains(&requested) {
            Resolution { view: requested, redirect: None }
        } else {
            Resolution {
                view: self.fallback_view.clone(),
                redirect: Some(Redirect::UnknownRoute { requested }),
            }
        }
    }

    fn authorize(&self, resolution: Resolution) -> Resolution {
        let required_role = self
            .routes
            .get(&resolution.view)
            .and_then(|route| route.required_role.clone());

        match required_role {
            Some(role) if !self.session.grants(&role) => Resolution {
                view: self.landing_view.clone(),
                redirect: Some(Redirect::Unauthorized { requested: resolution.view, required_role: role }),
            },
            _ => resolution,
        }
    }

    /// Marca activo el link de `view` (ninguno en la vista fallback)
    pub fn set_active_link(&self, view: &str) {
        for link_view in self.host.nav_link_views() {
            let active = link_view == view && view != self.fallback_view;
            if let Err(e) = self.host.set_nav_link_active(&link_view, active) {
                log::warn!("⚠️ [NAV] No se pudo actualizar el link {}: {}", link_view, e);
            }
        }
    }

    /// Ciclo completo de navegación. Los errores de carga ya se mostraron en la
    /// vista; se devuelven solo para logging.
    pub async fn handle_navigation(&self) -> Result<Resolution, LoadError> {
        let resolution = self.resolve();
        log::info!("🧭 [NAV] Navegando a #{}", resolution.view);

        self.set_active_link(&resolution.view);
        self.maybe_start_tour();

        match self.loader.load_view(&self.host, &resolution.view).await? {
            LoadOutcome::Loaded => {}
            LoadOutcome::NotFound => log::warn!("⚠️ [NAV] Vista {} sin entrada en la tabla", resolution.view),
        }
        Ok(resolution)
    }

    fn maybe_start_tour(&self) {
        if self.onboarding.begin() {
            log::info!("🎓 [NAV] Tour de bienvenida pendiente, arrancando en {} ms", self.tour_delay_ms);
            self.host.signal_tour_start(&tour_steps_json(), self.tour_delay_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::testing::{FakeFetcher, FakeHost};
    use crate::utils::constants::{ACCESS_TOKEN_KEY, NOT_FOUND_HTML, TUTORIAL_COMPLETED_KEY};
    use crate::utils::storage::{KeyValueStore, MemoryStore};
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use futures_util::FutureExt;

    const NAV_VIEWS: [&str; 3] = ["tasks", "finances", "admin"];

    fn token(role: &str) -> String {
        let payload = format!(r#"{{"user":{{"id":7,"role":"{}"}},"iat":0}}"#, role);
        format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
    }

    fn fetcher() -> FakeFetcher {
        FakeFetcher::new()
            .with_page("views/tasks.html", "<div id=\"task-matrix\">tasks</div>")
            .with_page("views/finances.html", "<div id=\"finance-summary\">finances</div>")
            .with_page("views/admin.html", "<table id=\"user-list\"></table>")
            .with_page("views/not-found.html", NOT_FOUND_HTML)
    }

    fn controller_with(
        fragment: &str,
        store: MemoryStore,
    ) -> NavigationController<FakeHost, FakeFetcher> {
        let store: Rc<dyn KeyValueStore> = Rc::new(store.with_item(TUTORIAL_COMPLETED_KEY, "true"));
        NavigationController::new(
            FakeHost::new().with_nav_links(&NAV_VIEWS).with_fragment(fragment),
            Rc::new(RouteTable::wopu()),
            fetcher(),
            SessionState::new(store.clone()),
            Rc::new(OnboardingState::new(store)),
            &AppConfig::default(),
        )
    }

    fn controller(fragment: &str) -> NavigationController<FakeHost, FakeFetcher> {
        controller_with(fragment, MemoryStore::new())
    }

    fn navigate<H: ViewHost, F: FragmentFetcher>(c: &NavigationController<H, F>) -> Result<Resolution, LoadError> {
        c.handle_navigation().now_or_never().expect("fake fetches resolve immediately")
    }

    #[test]
    fn empty_fragment_lands_on_tasks() {
        let c = controller("");
        let resolution = navigate(&c).unwrap();
        assert_eq!(resolution, Resolution { view: "tasks".into(), redirect: None });
        assert_eq!(c.host().view_html(), "<div id=\"task-matrix\">tasks</div>");
        assert!(c.host().fragment_rewrites().is_empty());
    }

    #[test]
    fn unknown_fragment_redirects_to_not_found() {
        let c = controller("#unknown");
        let resolution = navigate(&c).unwrap();

        assert_eq!(resolution.view, "not-found");
        assert_eq!(
            resolution.redirect,
            Some(Redirect::UnknownRoute { requested: "unknown".into() })
        );
        assert_eq!(c.host().view_html(), NOT_FOUND_HTML);
        assert_eq!(c.host().fragment(), "not-found");
        assert!(c.host().active_links().is_empty());
    }

    #[test]
    fn admin_with_user_role_resolves_to_tasks() {
        let c = controller_with("#admin", MemoryStore::new().with_item(ACCESS_TOKEN_KEY, &token("user")));
        let resolution = navigate(&c).unwrap();

        assert_eq!(resolution.view, "tasks");
        assert_eq!(
            resolution.redirect,
            Some(Redirect::Unauthorized { requested: "admin".into(), required_role: "admin".into() })
        );
        assert_eq!(c.host().fragment(), "tasks");
        assert_eq!(c.host().active_links(), vec!["tasks".to_string()]);
    }

    #[test]
    fn admin_without_session_resolves_to_tasks() {
        let c = controller("#admin");
        assert_eq!(navigate(&c).unwrap().view, "tasks");
        assert_eq!(c.host().fragment(), "tasks");
    }

    #[test]
    fn malformed_token_is_treated_as_unauthenticated() {
        let c = controller_with("#admin", MemoryStore::new().with_item(ACCESS_TOKEN_KEY, "not.a.jwt"));
        assert_eq!(navigate(&c).unwrap().view, "tasks");
    }

    #[test]
    fn admin_with_admin_role_is_allowed() {
        let c = controller_with("#admin", MemoryStore::new().with_item(ACCESS_TOKEN_KEY, &token("admin")));
        let resolution = navigate(&c).unwrap();

        assert_eq!(resolution, Resolution { view: "admin".into(), redirect: None });
        assert_eq!(c.host().view_html(), "<table id=\"user-list\"></table>");
        assert_eq!(c.host().active_links(), vec!["admin".to_string()]);
    }

    #[test]
    fn finances_loads_only_its_stylesheet() {
        let c = controller("#tasks");
        navigate(&c).unwrap();
        c.host().set_fragment("#finances");
        navigate(&c).unwrap();

        assert!(c.host().view_html().contains("finance-summary"));
        assert_eq!(c.host().stylesheets(), vec!["assets/css/pages/finances.css".to_string()]);
        assert_eq!(c.host().scripts().len(), 1);
    }

    #[test]
    fn repeated_navigation_keeps_one_active_link() {
        let c = controller("#tasks");
        for _ in 0..2 {
            c.host().set_fragment("#tasks");
            navigate(&c).unwrap();
            c.host().set_fragment("#finances");
            navigate(&c).unwrap();
        }
        assert_eq!(c.host().active_links(), vec!["finances".to_string()]);
    }

    #[test]
    fn every_configured_route_renders_its_own_resources() {
        let store: Rc<dyn KeyValueStore> = Rc::new(
            MemoryStore::new()
                .with_item(ACCESS_TOKEN_KEY, &token("admin"))
                .with_item(TUTORIAL_COMPLETED_KEY, "true"),
        );
        let table = RouteTable::wopu();
        let c = NavigationController::new(
            FakeHost::new().with_nav_links(&NAV_VIEWS),
            Rc::new(table.clone()),
            fetcher().with_page("views/complete-profile.html", "<form id=\"complete-profile-form\"></form>"),
            SessionState::new(store.clone()),
            Rc::new(OnboardingState::new(store)),
            &AppConfig::default(),
        );

        for name in ["tasks", "finances", "admin", "not-found", "complete-profile", "tasks"] {
            c.host().set_fragment(name);
            let resolution = navigate(&c).unwrap();
            assert_eq!(resolution.view, name);

            let route = table.get(name).unwrap();
            assert_eq!(c.host().stylesheets(), route.css_paths, "stylesheets for {}", name);
            assert_eq!(c.host().scripts().len(), usize::from(route.js_path.is_some()), "scripts for {}", name);
        }
    }

    #[test]
    fn fetch_failure_shows_error_and_reports_it() {
        let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new().with_item(TUTORIAL_COMPLETED_KEY, "true"));
        let c = NavigationController::new(
            FakeHost::new().with_nav_links(&NAV_VIEWS).with_fragment("#finances"),
            Rc::new(RouteTable::wopu()),
            FakeFetcher::new().with_network_error("views/finances.html"),
            SessionState::new(store.clone()),
            Rc::new(OnboardingState::new(store)),
            &AppConfig::default(),
        );

        let result = navigate(&c);
        assert!(matches!(result, Err(LoadError::Network { .. })));
        assert_eq!(c.host().view_html(), crate::utils::constants::LOAD_ERROR_HTML);
        assert_eq!(c.host().active_links(), vec!["finances".to_string()]);
    }

    #[test]
    fn tour_is_signalled_once_for_new_users() {
        let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
        let c = NavigationController::new(
            FakeHost::new().with_nav_links(&NAV_VIEWS),
            Rc::new(RouteTable::wopu()),
            fetcher(),
            SessionState::new(store.clone()),
            Rc::new(OnboardingState::new(store)),
            &AppConfig::default(),
        );

        navigate(&c).unwrap();
        c.host().set_fragment("#finances");
        navigate(&c).unwrap();

        let signals = c.host().tour_signals();
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].1, 500);
        assert!(c.onboarding().is_running());
    }
}
