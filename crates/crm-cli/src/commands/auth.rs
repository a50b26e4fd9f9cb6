//! Session commands: login, logout, whoami, access

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use crm_client::rest::RestAuthApi;
use crm_client::FileSessionStore;
use crm_core::services::{AuthService, MenuAction};

use super::Ctx;
use crate::output;

fn service(ctx: &Ctx) -> AuthService<RestAuthApi, FileSessionStore> {
    AuthService::new(
        Arc::new(RestAuthApi::new(ctx.client.clone())),
        ctx.store.clone(),
    )
}

pub async fn login(ctx: &Ctx, user_id: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_password()?,
    };
    if password.is_empty() {
        bail!("password must not be empty");
    }

    let user = service(ctx).login(user_id, &password).await?;
    println!(
        "Signed in as {} ({}) on tenant {}",
        user.username, user.user_id, user.tenant_id
    );
    Ok(())
}

pub async fn logout(ctx: &Ctx) -> Result<()> {
    service(ctx).logout().await;
    println!("Signed out");
    Ok(())
}

pub fn whoami(ctx: &Ctx) -> Result<()> {
    match service(ctx).current_user() {
        Some(user) => output::print_json(&user),
        None => bail!("not signed in"),
    }
}

pub fn access(ctx: &Ctx, menu_code: &str, action: &str) -> Result<()> {
    let action: MenuAction = action.parse()?;
    if service(ctx).has_menu_access(menu_code, action) {
        println!("granted");
    } else {
        println!("denied");
    }
    Ok(())
}

fn prompt_password() -> Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush().ok();
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("cannot read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
