//! # CRM Client - REST Gateways
//!
//! Port implementations and one typed API per backend resource.

pub mod activities;
pub mod auth;
pub mod branches;
pub mod customers;
pub mod groups;
pub mod leads;
pub mod menus;
pub mod opportunities;
pub mod pipeline_stages;
pub mod positions;
pub mod products;
pub mod quotes;
pub mod tenants;
pub mod users;

pub use activities::ActivityApi;
pub use auth::RestAuthApi;
pub use branches::BranchApi;
pub use customers::CustomerApi;
pub use groups::GroupApi;
pub use leads::LeadApi;
pub use menus::RestMenuApi;
pub use opportunities::OpportunityApi;
pub use pipeline_stages::PipelineStageApi;
pub use positions::PositionApi;
pub use products::ProductApi;
pub use quotes::QuoteApi;
pub use tenants::TenantApi;
pub use users::UserApi;
