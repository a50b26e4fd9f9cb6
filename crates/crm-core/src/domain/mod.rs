//! # CRM Core - Domain Module
//!
//! Entities and validated forms for the CRM console.

pub mod activity;
pub mod branch;
pub mod customer;
pub mod group;
pub mod lead;
pub mod menu;
pub mod menu_tree;
pub mod opportunity;
pub mod pipeline;
pub mod position;
pub mod product;
pub mod quote;
pub mod session;
pub mod tenant;
pub mod user;

mod validation;

// Re-export all entities and forms
pub use activity::{Activity, ActivityForm};
pub use branch::{Branch, BranchCreate, BranchUpdate};
pub use customer::{Customer, CustomerForm};
pub use group::{Group, GroupForm};
pub use lead::{Lead, LeadForm};
pub use menu::{MenuCreate, MenuRecord, MenuUpdate};
pub use menu_tree::{MenuOrderChange, MenuTree, MenuTreeError, MenuTreeNode};
pub use opportunity::{Opportunity, OpportunityCreate, OpportunityUpdate};
pub use pipeline::{PipelineStage, PipelineStageForm};
pub use position::{Position, PositionForm};
pub use product::{Product, ProductForm};
pub use quote::{Quote, QuoteForm, QuoteItem, QuoteItemForm};
pub use session::{AuthSession, TokenPair, User, UserProfile};
pub use tenant::{Tenant, TenantCreate, TenantUpdate};
pub use user::{UserAccount, UserCreate, UserUpdate};
