// ============================================================================
// ADMIN VIEW - Tabla de usuarios
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{get_element_by_id, require_element, set_inner_html, set_text_content};
use crate::models::User;
use crate::services::{admin_service, ApiClient};
use crate::state::SessionState;
use crate::utils::html::escape_html;
use crate::utils::storage::LocalStore;
use crate::viewmodels::AdminViewModel;

pub fn render_user_row(user: &User) -> String {
    let role = escape_html(&user.role);
    format!(
        concat!(
            "<tr><td>{id}</td><td>{email}</td>",
            "<td><span class=\"role-badge role-{role}\">{role}</span></td>",
            "<td><button class=\"btn btn-secondary btn-sm\">Edit</button></td></tr>"
        ),
        id = user.id,
        email = escape_html(&user.email),
        role = role,
    )
}

pub fn render_user_rows(users: &[User]) -> String {
    if users.is_empty() {
        return "<tr><td colspan=\"4\">No users found.</td></tr>".to_string();
    }
    users.iter().map(render_user_row).collect()
}

fn render(vm: &AdminViewModel) -> Result<(), JsValue> {
    set_inner_html(&require_element("user-list")?, &render_user_rows(vm.users()));
    if let Some(count) = get_element_by_id("admin-count") {
        set_text_content(&count, &vm.admin_count().to_string());
    }
    Ok(())
}

/// Monta la vista admin (llamado desde `views/admin.js`)
#[wasm_bindgen]
pub fn mount_admin_view() -> Result<(), JsValue> {
    log::info!("🛡️ [ADMIN] Montando vista");
    require_element("user-list")?;

    let api = ApiClient::from_session(&SessionState::new(std::rc::Rc::new(LocalStore)));
    spawn_local(async move {
        let mut vm = AdminViewModel::new();
        match admin_service::fetch_users(&api).await {
            Ok(users) => {
                log::info!("✅ [ADMIN] {} usuarios", users.len());
                vm.set_users(users);
            }
            Err(e) => log::error!("❌ [ADMIN] Error obteniendo usuarios: {}", e),
        }
        if let Err(e) = render(&vm) {
            log::error!("❌ [ADMIN] Error renderizando usuarios: {:?}", e);
        }
    });
    Ok(())
}
