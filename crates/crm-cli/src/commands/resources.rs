//! Generic list/get/create/update/delete over the CRUD resources

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crm_client::rest::{
    ActivityApi, BranchApi, CustomerApi, GroupApi, LeadApi, OpportunityApi, PipelineStageApi,
    PositionApi, ProductApi, QuoteApi, TenantApi, UserApi,
};
use crm_client::ApiClient;

use super::{read_form, Ctx};
use crate::output::{print_json, print_table};
use crate::Resource;

fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_default()
}

pub async fn list(ctx: &Ctx, resource: Resource) -> Result<()> {
    let client: Arc<ApiClient> = ctx.client.clone();
    match resource {
        Resource::Tenants => {
            let rows: Vec<Vec<String>> = TenantApi::new(client)
                .list()
                .await?
                .into_iter()
                .map(|t| vec![t.tenant_id, t.tenant_name, t.use_at.to_string()])
                .collect();
            print_table(&["ID", "NAME", "USE"], &rows);
        }
        Resource::Branches => {
            let rows: Vec<Vec<String>> = BranchApi::new(client)
                .list()
                .await?
                .into_iter()
                .map(|b| vec![b.branch_id, b.branch_code, b.branch_name, b.use_at.to_string()])
                .collect();
            print_table(&["ID", "CODE", "NAME", "USE"], &rows);
        }
        Resource::Groups => {
            let rows: Vec<Vec<String>> = GroupApi::new(client)
                .list()
                .await?
                .into_iter()
                .map(|g| {
                    vec![
                        g.group_id,
                        g.group_code,
                        g.group_name,
                        g.branch_id,
                        g.use_at.to_string(),
                    ]
                })
                .collect();
            print_table(&["ID", "CODE", "NAME", "BRANCH", "USE"], &rows);
        }
        Resource::Positions => {
            let rows: Vec<Vec<String>> = PositionApi::new(client)
                .list()
                .await?
                .into_iter()
                .map(|p| {
                    vec![
                        p.position_id,
                        p.position_code,
                        p.position_name,
                        p.position_level.to_string(),
                        p.use_at.to_string(),
                    ]
                })
                .collect();
            print_table(&["ID", "CODE", "NAME", "LEVEL", "USE"], &rows);
        }
        Resource::Users => {
            let rows: Vec<Vec<String>> = UserApi::new(client)
                .list()
                .await?
                .into_iter()
                .map(|u| vec![u.user_id, u.user_name, u.email, u.use_at.to_string()])
                .collect();
            print_table(&["ID", "NAME", "EMAIL", "USE"], &rows);
        }
        Resource::Leads => {
            let rows: Vec<Vec<String>> = LeadApi::new(client)
                .list()
                .await?
                .into_iter()
                .map(|l| {
                    vec![
                        l.lead_id,
                        l.lead_name,
                        opt(&l.lead_status),
                        opt(&l.estimated_revenue),
                        l.use_at.to_string(),
                    ]
                })
                .collect();
            print_table(&["ID", "NAME", "STATUS", "EST. REVENUE", "USE"], &rows);
        }
        Resource::Customers => {
            let rows: Vec<Vec<String>> = CustomerApi::new(client)
                .list()
                .await?
                .into_iter()
                .map(|c| {
                    vec![
                        c.customer_id,
                        c.customer_code,
                        c.customer_name,
                        opt(&c.customer_type),
                        c.use_at.to_string(),
                    ]
                })
                .collect();
            print_table(&["ID", "CODE", "NAME", "TYPE", "USE"], &rows);
        }
        Resource::Opportunities => {
            let rows: Vec<Vec<String>> = OpportunityApi::new(client)
                .list()
                .await?
                .into_iter()
                .map(|o| {
                    vec![
                        o.opportunity_id,
                        o.opportunity_name,
                        o.stage_id,
                        opt(&o.amount),
                        opt(&o.expected_close_date),
                    ]
                })
                .collect();
            print_table(&["ID", "NAME", "STAGE", "AMOUNT", "CLOSE DATE"], &rows);
        }
        Resource::Products => {
            let rows: Vec<Vec<String>> = ProductApi::new(client)
                .list()
                .await?
                .into_iter()
                .map(|p| {
                    vec![
                        p.product_id,
                        p.product_code,
                        p.product_name,
                        p.unit_price.to_string(),
                        p.use_at.to_string(),
                    ]
                })
                .collect();
            print_table(&["ID", "CODE", "NAME", "UNIT PRICE", "USE"], &rows);
        }
        Resource::Quotes => {
            let rows: Vec<Vec<String>> = QuoteApi::new(client)
                .list()
                .await?
                .into_iter()
                .map(|q| {
                    vec![
                        q.quote_id,
                        q.quote_number,
                        q.customer_id,
                        q.quote_date.to_string(),
                        opt(&q.quote_status),
                    ]
                })
                .collect();
            print_table(&["ID", "NUMBER", "CUSTOMER", "DATE", "STATUS"], &rows);
        }
        Resource::Activities => {
            let rows: Vec<Vec<String>> = ActivityApi::new(client)
                .list()
                .await?
                .into_iter()
                .map(|a| {
                    vec![
                        a.activity_id,
                        a.activity_subject,
                        a.activity_type,
                        a.activity_status,
                        a.priority,
                    ]
                })
                .collect();
            print_table(&["ID", "SUBJECT", "TYPE", "STATUS", "PRIORITY"], &rows);
        }
        Resource::Stages => {
            let rows: Vec<Vec<String>> = PipelineStageApi::new(client)
                .list()
                .await?
                .into_iter()
                .map(|s| {
                    vec![
                        s.stage_id,
                        s.stage_code,
                        s.stage_name,
                        opt(&s.stage_order),
                        opt(&s.probability),
                    ]
                })
                .collect();
            print_table(&["ID", "CODE", "NAME", "ORDER", "PROBABILITY"], &rows);
        }
    }
    Ok(())
}

pub async fn get(ctx: &Ctx, resource: Resource, id: &str) -> Result<()> {
    let client = ctx.client.clone();
    match resource {
        Resource::Tenants => print_json(&TenantApi::new(client).get(id).await?),
        Resource::Branches => print_json(&BranchApi::new(client).get(id).await?),
        Resource::Groups => print_json(&GroupApi::new(client).get(id).await?),
        Resource::Positions => print_json(&PositionApi::new(client).get(id).await?),
        Resource::Users => print_json(&UserApi::new(client).get(id).await?),
        Resource::Leads => print_json(&LeadApi::new(client).get(id).await?),
        Resource::Customers => print_json(&CustomerApi::new(client).get(id).await?),
        Resource::Opportunities => print_json(&OpportunityApi::new(client).get(id).await?),
        Resource::Products => print_json(&ProductApi::new(client).get(id).await?),
        Resource::Quotes => print_json(&QuoteApi::new(client).get(id).await?),
        Resource::Activities => print_json(&ActivityApi::new(client).get(id).await?),
        Resource::Stages => print_json(&PipelineStageApi::new(client).get(id).await?),
    }
}

pub async fn create(ctx: &Ctx, resource: Resource, file: &Path) -> Result<()> {
    let client = ctx.client.clone();
    match resource {
        Resource::Tenants => {
            print_json(&TenantApi::new(client).create(&read_form(file)?).await?)
        }
        Resource::Branches => {
            print_json(&BranchApi::new(client).create(&read_form(file)?).await?)
        }
        Resource::Groups => print_json(&GroupApi::new(client).create(&read_form(file)?).await?),
        Resource::Positions => {
            print_json(&PositionApi::new(client).create(&read_form(file)?).await?)
        }
        Resource::Users => print_json(&UserApi::new(client).create(&read_form(file)?).await?),
        Resource::Leads => print_json(&LeadApi::new(client).create(&read_form(file)?).await?),
        Resource::Customers => {
            print_json(&CustomerApi::new(client).create(&read_form(file)?).await?)
        }
        Resource::Opportunities => {
            print_json(&OpportunityApi::new(client).create(&read_form(file)?).await?)
        }
        Resource::Products => {
            print_json(&ProductApi::new(client).create(&read_form(file)?).await?)
        }
        Resource::Quotes => print_json(&QuoteApi::new(client).create(&read_form(file)?).await?),
        Resource::Activities => {
            print_json(&ActivityApi::new(client).create(&read_form(file)?).await?)
        }
        Resource::Stages => {
            print_json(&PipelineStageApi::new(client).create(&read_form(file)?).await?)
        }
    }
}

pub async fn update(ctx: &Ctx, resource: Resource, id: &str, file: &Path) -> Result<()> {
    let client = ctx.client.clone();
    match resource {
        Resource::Tenants => {
            print_json(&TenantApi::new(client).update(id, &read_form(file)?).await?)
        }
        Resource::Branches => {
            print_json(&BranchApi::new(client).update(id, &read_form(file)?).await?)
        }
        Resource::Groups => {
            print_json(&GroupApi::new(client).update(id, &read_form(file)?).await?)
        }
        Resource::Positions => {
            print_json(&PositionApi::new(client).update(id, &read_form(file)?).await?)
        }
        Resource::Users => print_json(&UserApi::new(client).update(id, &read_form(file)?).await?),
        Resource::Leads => print_json(&LeadApi::new(client).update(id, &read_form(file)?).await?),
        Resource::Customers => {
            print_json(&CustomerApi::new(client).update(id, &read_form(file)?).await?)
        }
        Resource::Opportunities => {
            print_json(
                &OpportunityApi::new(client)
                    .update(id, &read_form(file)?)
                    .await?,
            )
        }
        Resource::Products => {
            print_json(&ProductApi::new(client).update(id, &read_form(file)?).await?)
        }
        Resource::Quotes => {
            print_json(&QuoteApi::new(client).update(id, &read_form(file)?).await?)
        }
        Resource::Activities => {
            print_json(&ActivityApi::new(client).update(id, &read_form(file)?).await?)
        }
        Resource::Stages => {
            print_json(
                &PipelineStageApi::new(client)
                    .update(id, &read_form(file)?)
                    .await?,
            )
        }
    }
}

pub async fn delete(ctx: &Ctx, resource: Resource, id: &str) -> Result<()> {
    let client = ctx.client.clone();
    match resource {
        Resource::Tenants => TenantApi::new(client).delete(id).await?,
        Resource::Branches => BranchApi::new(client).delete(id).await?,
        Resource::Groups => GroupApi::new(client).delete(id).await?,
        Resource::Positions => PositionApi::new(client).delete(id).await?,
        Resource::Users => UserApi::new(client).delete(id).await?,
        Resource::Leads => LeadApi::new(client).delete(id).await?,
        Resource::Customers => CustomerApi::new(client).delete(id).await?,
        Resource::Opportunities => OpportunityApi::new(client).delete(id).await?,
        Resource::Products => ProductApi::new(client).delete(id).await?,
        Resource::Quotes => QuoteApi::new(client).delete(id).await?,
        Resource::Activities => ActivityApi::new(client).delete(id).await?,
        Resource::Stages => PipelineStageApi::new(client).delete(id).await?,
    }
    println!("Deleted {}", id);
    Ok(())
}
