//! Command dispatch

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crm_client::{ApiClient, FileSessionStore};

use crate::{Command, MenuCommand};

mod auth;
mod menus;
mod resources;

pub struct Ctx {
    pub client: Arc<ApiClient>,
    pub store: Arc<FileSessionStore>,
}

pub async fn run(command: Command, ctx: &Ctx) -> Result<()> {
    match command {
        Command::Login { user_id, password } => auth::login(ctx, &user_id, password).await,
        Command::Logout => auth::logout(ctx).await,
        Command::Whoami => auth::whoami(ctx),
        Command::Access { menu_code, action } => auth::access(ctx, &menu_code, &action),
        Command::Menu(menu) => match menu {
            MenuCommand::Tree { visible } => menus::tree(ctx, visible).await,
            MenuCommand::Create { file } => menus::create(ctx, &file).await,
            MenuCommand::CreateChild { parent, file } => {
                menus::create_child(ctx, parent, &file).await
            }
            MenuCommand::Update { menu_no, file } => menus::update(ctx, menu_no, &file).await,
            MenuCommand::Delete { menu_no } => menus::delete(ctx, menu_no).await,
            MenuCommand::Move { active, over } => menus::reorder(ctx, active, over).await,
        },
        Command::List { resource } => resources::list(ctx, resource).await,
        Command::Get { resource, id } => resources::get(ctx, resource, &id).await,
        Command::Create { resource, file } => resources::create(ctx, resource, &file).await,
        Command::Update { resource, id, file } => {
            resources::update(ctx, resource, &id, &file).await
        }
        Command::Delete { resource, id } => resources::delete(ctx, resource, &id).await,
    }
}

/// Parse a JSON form document; validation happens in the gateways.
pub(crate) fn read_form<T: DeserializeOwned>(file: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read form document {}", file.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("form document {} does not parse", file.display()))
}
