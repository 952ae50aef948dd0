//! Dobles en memoria de `ViewHost` y `FragmentFetcher` para los tests del router.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::router::error::{HostError, LoadError};
use crate::router::host::{FragmentFetcher, ViewHost};

#[derive(Clone, Debug, PartialEq)]
enum DynamicNode {
    Style(String),
    Script(String),
}

#[derive(Default)]
pub struct FakeHost {
    view_html: RefCell<String>,
    dynamic_nodes: RefCell<Vec<DynamicNode>>,
    fragment: RefCell<String>,
    fragment_rewrites: RefCell<Vec<String>>,
    nav_links: RefCell<Vec<(String, bool)>>,
    tour_signals: RefCell<Vec<(String, u32)>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sidebar con un link por vista
    pub fn with_nav_links(self, views: &[&str]) -> Self {
        *self.nav_links.borrow_mut() = views.iter().map(|v| (v.to_string(), false)).collect();
        self
    }

    pub fn with_fragment(self, fragment: &str) -> Self {
        self.set_fragment(fragment);
        self
    }

    /// Simula que el usuario cambió el hash
    pub fn set_fragment(&self, fragment: &str) {
        *self.fragment.borrow_mut() = fragment.trim_start_matches('#').to_string();
    }

    pub fn fragment(&self) -> String {
        self.fragment.borrow().clone()
    }

    pub fn fragment_rewrites(&self) -> Vec<String> {
        self.fragment_rewrites.borrow().clone()
    }

    pub fn view_html(&self) -> String {
        self.view_html.borrow().clone()
    }

    pub fn stylesheets(&self) -> Vec<String> {
        self.dynamic_nodes
            .borrow()
            .iter()
            .filter_map(|n| match n {
                DynamicNode::Style(href) => Some(href.clone()),
                DynamicNode::Script(_) => None,
            })
            .collect()
    }

    pub fn scripts(&self) -> Vec<String> {
        self.dynamic_nodes
            .borrow()
            .iter()
            .filter_map(|n| match n {
                DynamicNode::Script(src) => Some(src.clone()),
                DynamicNode::Style(_) => None,
            })
            .collect()
    }

    pub fn active_links(&self) -> Vec<String> {
        self.nav_links
            .borrow()
            .iter()
            .filter(|(_, active)| *active)
            .map(|(view, _)| view.clone())
            .collect()
    }

    pub fn tour_signals(&self) -> Vec<(String, u32)> {
        self.tour_signals.borrow().clone()
    }
}

impl ViewHost for FakeHost {
    fn set_view_html(&self, html: &str) -> Result<(), HostError> {
        *self.view_html.borrow_mut() = html.to_string();
        Ok(())
    }

    fn remove_dynamic_nodes(&self) -> Result<(), HostError> {
        self.dynamic_nodes.borrow_mut().clear();
        Ok(())
    }

    fn append_stylesheet(&self, href: &str) -> Result<(), HostError> {
        self.dynamic_nodes.borrow_mut().push(DynamicNode::Style(href.to_string()));
        Ok(())
    }

    fn append_module_script(&self, src: &str) -> Result<(), HostError> {
        self.dynamic_nodes.borrow_mut().push(DynamicNode::Script(src.to_string()));
        Ok(())
    }

    fn location_fragment(&self) -> String {
        self.fragment()
    }

    fn replace_fragment(&self, view: &str) -> Result<(), HostError> {
        self.set_fragment(view);
        self.fragment_rewrites.borrow_mut().push(view.to_string());
        Ok(())
    }

    fn nav_link_views(&self) -> Vec<String> {
        self.nav_links.borrow().iter().map(|(view, _)| view.clone()).collect()
    }

    fn set_nav_link_active(&self, view: &str, active: bool) -> Result<(), HostError> {
        for link in self.nav_links.borrow_mut().iter_mut().filter(|(v, _)| v == view) {
            link.1 = active;
        }
        Ok(())
    }

    fn signal_tour_start(&self, steps_json: &str, delay_ms: u32) {
        self.tour_signals.borrow_mut().push((steps_json.to_string(), delay_ms));
    }
}

/// Páginas servidas por ruta; cualquier otra ruta responde 404
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, Result<String, LoadError>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, path: &str, html: &str) -> Self {
        self.pages.insert(path.to_string(), Ok(html.to_string()));
        self
    }

    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.pages
            .insert(path.to_string(), Err(LoadError::Status { path: path.to_string(), status }));
        self
    }

    pub fn with_network_error(mut self, path: &str) -> Self {
        self.pages.insert(
            path.to_string(),
            Err(LoadError::Network { path: path.to_string(), message: "connection refused".into() }),
        );
        self
    }
}

impl FragmentFetcher for FakeFetcher {
    async fn fetch_fragment(&self, path: &str) -> Result<String, LoadError> {
        self.pages
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(LoadError::Status { path: path.to_string(), status: 404 }))
    }
}
