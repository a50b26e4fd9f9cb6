//! Menu administration commands

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crm_client::rest::RestMenuApi;
use crm_core::domain::{MenuCreate, MenuTree, MenuUpdate};
use crm_core::services::MenuService;

use super::{read_form, Ctx};
use crate::output;

fn service(ctx: &Ctx) -> MenuService<RestMenuApi> {
    MenuService::new(Arc::new(RestMenuApi::new(ctx.client.clone())))
}

pub async fn tree(ctx: &Ctx, visible: bool) -> Result<()> {
    let service = service(ctx);
    let tree = if visible {
        service.load_visible_tree().await?
    } else {
        service.load_tree().await?
    };
    if tree.is_empty() {
        println!("No menus found.");
        return Ok(());
    }
    print_forest(&tree);
    Ok(())
}

pub async fn create(ctx: &Ctx, file: &Path) -> Result<()> {
    let form: MenuCreate = read_form(file)?;
    let created = service(ctx).create(&form).await?;
    output::print_json(&created)
}

pub async fn create_child(ctx: &Ctx, parent: i64, file: &Path) -> Result<()> {
    let service = service(ctx);
    let tree = service.load_tree().await?;
    let form: MenuCreate = read_form(file)?;
    let created = service.create_child(&tree, parent, form).await?;
    output::print_json(&created)
}

pub async fn update(ctx: &Ctx, menu_no: i64, file: &Path) -> Result<()> {
    let form: MenuUpdate = read_form(file)?;
    let updated = service(ctx).update(menu_no, &form).await?;
    output::print_json(&updated)
}

pub async fn delete(ctx: &Ctx, menu_no: i64) -> Result<()> {
    service(ctx).delete(menu_no).await?;
    println!("Deleted menu {}", menu_no);
    Ok(())
}

pub async fn reorder(ctx: &Ctx, active: i64, over: i64) -> Result<()> {
    let service = service(ctx);
    let mut tree = service.load_tree().await?;
    let changes = service.reorder(&mut tree, active, over).await?;
    if changes.is_empty() {
        println!("Nothing to move.");
    } else {
        println!("Reordered {} menus:", changes.len());
        print_forest(&tree);
    }
    Ok(())
}

fn print_forest(tree: &MenuTree) {
    for &root in tree.roots() {
        print_node(tree, root, 0);
    }
}

fn print_node(tree: &MenuTree, menu_no: i64, depth: usize) {
    let Some(record) = tree.get(menu_no) else {
        return;
    };
    let mut flags = String::new();
    if !record.is_active {
        flags.push_str(" [inactive]");
    }
    if !record.is_visible {
        flags.push_str(" [hidden]");
    }
    println!(
        "{}{} #{} {} ({}){}",
        "  ".repeat(depth),
        record.menu_name,
        record.menu_no,
        record.menu_code,
        record.menu_order,
        flags
    );
    for &child in tree.children_of(menu_no) {
        print_node(tree, child, depth + 1);
    }
}
