// ============================================================================
// ROUTE TABLE - vista → fragmento HTML, hojas de estilo y módulo JS
// ============================================================================

use std::collections::HashMap;

use crate::utils::constants::ADMIN_ROLE;

#[derive(Clone, PartialEq, Debug)]
pub struct RouteEntry {
    pub name: String,
    pub html_path: String,
    pub css_paths: Vec<String>,
    pub js_path: Option<String>,
    /// Rol necesario para ver la vista (`None` = cualquiera)
    pub required_role: Option<String>,
}

impl RouteEntry {
    pub fn new(name: &str, html_path: &str) -> Self {
        Self {
            name: name.to_string(),
            html_path: html_path.to_string(),
            css_paths: Vec::new(),
            js_path: None,
            required_role: None,
        }
    }

    pub fn css(mut self, path: &str) -> Self {
        self.css_paths.push(path.to_string());
        self
    }

    pub fn js(mut self, path: &str) -> Self {
        self.js_path = Some(path.to_string());
        self
    }

    pub fn restricted_to(mut self, role: &str) -> Self {
        self.required_role = Some(role.to_string());
        self
    }

    /// Convención de Wopu: `views/<name>.html`, `assets/css/pages/<name>.css`, `views/<name>.js`
    pub fn conventional(name: &str) -> Self {
        Self::new(name, &format!("views/{}.html", name))
            .css(&format!("assets/css/pages/{}.css", name))
            .js(&format!("views/{}.js", name))
    }
}

#[derive(Clone, Default, Debug)]
pub struct RouteTable {
    entries: HashMap<String, RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tabla de la aplicación
    pub fn wopu() -> Self {
        let mut table = Self::new();
        table.insert(RouteEntry::conventional("tasks"));
        table.insert(RouteEntry::conventional("finances"));
        table.insert(RouteEntry::conventional("admin").restricted_to(ADMIN_ROLE));
        table.insert(RouteEntry::conventional("complete-profile"));
        table.insert(
            RouteEntry::new("not-found", "views/not-found.html").css("assets/css/pages/not-found.css"),
        );
        table
    }

    /// Inserta (o reemplaza) la entrada con el mismo nombre
    pub fn insert(&mut self, entry: RouteEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wopu_table_has_every_view() {
        let table = RouteTable::wopu();
        for name in ["tasks", "finances", "admin", "complete-profile", "not-found"] {
            assert!(table.contains(name), "missing route {}", name);
        }
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn only_admin_is_restricted() {
        let table = RouteTable::wopu();
        let restricted: Vec<&str> = table
            .names()
            .filter(|n| table.get(n).and_then(|e| e.required_role.as_deref()).is_some())
            .collect();
        assert_eq!(restricted, vec!["admin"]);
    }

    #[test]
    fn not_found_has_no_behavior_module() {
        let entry = RouteTable::wopu().get("not-found").cloned().unwrap();
        assert_eq!(entry.js_path, None);
        assert_eq!(entry.css_paths, vec!["assets/css/pages/not-found.css".to_string()]);
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut table = RouteTable::new();
        table.insert(RouteEntry::new("tasks", "a.html"));
        table.insert(RouteEntry::new("tasks", "b.html"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("tasks").unwrap().html_path, "b.html");
    }
}
