//! Menu tree construction and sibling reorder
//!
//! The hierarchy is kept as a flat arena: an id-indexed map of records plus
//! root/child id lists. Lookups are O(1) and reordering mutates one sibling
//! list in place instead of rebuilding a nested structure.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crm_shared::constants::MENU_ORDER_GAP;

use super::menu::MenuRecord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuTreeError {
    #[error("Unknown menu: {0}")]
    UnknownMenu(i64),

    #[error("Menus {active} and {over} are not siblings")]
    DifferentParents { active: i64, over: i64 },
}

impl From<MenuTreeError> for crate::error::DomainError {
    fn from(err: MenuTreeError) -> Self {
        crate::error::DomainError::Validation(err.to_string())
    }
}

/// One row of the bulk-reorder payload (`PUT /api/menus/reorder`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuOrderChange {
    pub menu_no: i64,
    pub menu_order: i32,
    pub upper_menu_no: Option<i64>,
}

/// Nested view of one entry and its descendants, for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct MenuTreeNode {
    #[serde(flatten)]
    pub record: MenuRecord,
    pub children: Vec<MenuTreeNode>,
}

/// Forest of menu entries indexed by id.
#[derive(Debug, Clone, Default)]
pub struct MenuTree {
    records: HashMap<i64, MenuRecord>,
    roots: Vec<i64>,
    children: HashMap<i64, Vec<i64>>,
}

impl MenuTree {
    /// Build the forest from a flat record list.
    ///
    /// Total over arbitrary input: a record whose parent id is missing (or
    /// is the record itself) becomes a root, records caught in a parent
    /// cycle are promoted to roots, and duplicate ids resolve to the last
    /// record seen. Every sibling list is sorted ascending by `menu_order`,
    /// equal orders keeping input order.
    pub fn build(input: Vec<MenuRecord>) -> Self {
        let mut records: HashMap<i64, MenuRecord> = HashMap::with_capacity(input.len());
        let mut input_order: Vec<i64> = Vec::with_capacity(input.len());
        for record in input {
            let id = record.menu_no;
            if records.insert(id, record).is_none() {
                input_order.push(id);
            }
        }

        let mut roots = Vec::new();
        let mut children: HashMap<i64, Vec<i64>> = HashMap::new();
        for &id in &input_order {
            match records[&id].upper_menu_no {
                Some(parent) if parent == id => {
                    warn!(menu_no = id, "menu is its own parent, treating as root");
                    roots.push(id);
                }
                Some(parent) if records.contains_key(&parent) => {
                    children.entry(parent).or_default().push(id);
                }
                // No parent, or parent absent from the input set
                _ => roots.push(id),
            }
        }

        let mut tree = Self {
            records,
            roots,
            children,
        };
        tree.promote_unreachable(&input_order);
        tree.sort_levels();
        tree
    }

    /// Break parent cycles by promoting trapped entries to roots, in input
    /// order, until every record is reachable.
    fn promote_unreachable(&mut self, input_order: &[i64]) {
        loop {
            let reachable = self.reachable();
            let stray = input_order.iter().copied().find(|id| !reachable.contains(id));
            let Some(stray) = stray else {
                return;
            };
            warn!(menu_no = stray, "menu is caught in a parent cycle, promoting to root");
            if let Some(parent) = self.records[&stray].upper_menu_no {
                if let Some(list) = self.children.get_mut(&parent) {
                    list.retain(|&child| child != stray);
                }
            }
            self.roots.push(stray);
        }
    }

    fn reachable(&self) -> HashSet<i64> {
        let mut seen = HashSet::with_capacity(self.records.len());
        let mut stack: Vec<i64> = self.roots.clone();
        while let Some(id) = stack.pop() {
            if seen.insert(id) {
                stack.extend(self.children_of(id));
            }
        }
        seen
    }

    fn sort_levels(&mut self) {
        let records = &self.records;
        self.roots.sort_by_key(|id| records[id].menu_order);
        for list in self.children.values_mut() {
            list.sort_by_key(|id| records[id].menu_order);
        }
    }

    pub fn get(&self, menu_no: i64) -> Option<&MenuRecord> {
        self.records.get(&menu_no)
    }

    pub fn roots(&self) -> &[i64] {
        &self.roots
    }

    pub fn children_of(&self, menu_no: i64) -> &[i64] {
        self.children.get(&menu_no).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Depth-first id sequence, children after their parent, siblings in
    /// display order.
    pub fn flatten(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.records.len());
        let mut stack: Vec<i64> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children_of(id).iter().rev());
        }
        out
    }

    /// Nested render view of the whole forest.
    pub fn nodes(&self) -> Vec<MenuTreeNode> {
        self.roots.iter().map(|&id| self.node(id)).collect()
    }

    fn node(&self, id: i64) -> MenuTreeNode {
        MenuTreeNode {
            record: self.records[&id].clone(),
            children: self.children_of(id).iter().map(|&c| self.node(c)).collect(),
        }
    }

    /// Order slot for a new entry under `parent`: highest sibling order plus
    /// the standard gap, 0 for an empty level.
    pub fn next_order(&self, parent: Option<i64>) -> i32 {
        let siblings = match parent {
            None => self.roots.as_slice(),
            Some(p) => self.children_of(p),
        };
        siblings
            .iter()
            .map(|id| self.records[id].menu_order)
            .max()
            .map(|max| max + MENU_ORDER_GAP)
            .unwrap_or(0)
    }

    /// Move `active` to the position currently held by `over` within their
    /// shared sibling list, renumber the list with the standard gap, and
    /// return the rows whose order changed (the bulk-reorder payload).
    ///
    /// Both ids must exist and share a parent; moves across sibling groups
    /// are rejected.
    pub fn move_within_siblings(
        &mut self,
        active: i64,
        over: i64,
    ) -> Result<Vec<MenuOrderChange>, MenuTreeError> {
        let active_parent = self
            .placement_of(active)
            .ok_or(MenuTreeError::UnknownMenu(active))?;
        let over_parent = self
            .placement_of(over)
            .ok_or(MenuTreeError::UnknownMenu(over))?;
        if active_parent != over_parent {
            return Err(MenuTreeError::DifferentParents { active, over });
        }
        if active == over {
            return Ok(Vec::new());
        }

        let siblings = match active_parent {
            None => &mut self.roots,
            Some(parent) => self
                .children
                .get_mut(&parent)
                .ok_or(MenuTreeError::UnknownMenu(parent))?,
        };
        let old_index = siblings
            .iter()
            .position(|&id| id == active)
            .ok_or(MenuTreeError::UnknownMenu(active))?;
        let new_index = siblings
            .iter()
            .position(|&id| id == over)
            .ok_or(MenuTreeError::UnknownMenu(over))?;
        let moved = siblings.remove(old_index);
        siblings.insert(new_index, moved);

        let order: Vec<i64> = siblings.clone();
        let mut changes = Vec::new();
        for (index, id) in order.iter().enumerate() {
            let slot = (index as i32 + 1) * MENU_ORDER_GAP;
            let record = self
                .records
                .get_mut(id)
                .ok_or(MenuTreeError::UnknownMenu(*id))?;
            if record.menu_order != slot {
                record.menu_order = slot;
                changes.push(MenuOrderChange {
                    menu_no: *id,
                    menu_order: slot,
                    upper_menu_no: active_parent,
                });
            }
        }
        Ok(changes)
    }

    /// Parent the tree placed `menu_no` under (`None` for root level), or
    /// `None` overall when the id is unknown. Placement, not the record's
    /// own parent pointer: entries rescued from cycles sit at root level.
    fn placement_of(&self, menu_no: i64) -> Option<Option<i64>> {
        if !self.records.contains_key(&menu_no) {
            return None;
        }
        if self.roots.contains(&menu_no) {
            return Some(None);
        }
        self.children
            .iter()
            .find(|(_, list)| list.contains(&menu_no))
            .map(|(&parent, _)| Some(parent))
    }
}
