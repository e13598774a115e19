use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::modules::profile::domain::entities::PersonalInfo;

use super::entities::{
    BlockKind, FeaturedProject, LayoutKind, PortfolioBlock, PortfolioDocument,
};

//
// ──────────────────────────────────────────────────────────
// Raw storage projections
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct PortfolioRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub slug: String,
    pub layout: String,
    pub is_published: bool,
    pub cv_id: Option<Uuid>,
    pub theme_id: Option<String>,
    pub custom_domain: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProjectRow {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub title: String,
    pub description: String,
    pub media_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub is_featured: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone)]
pub struct BlockRow {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub kind: String,
    pub content: Map<String, Value>,
    pub sort_order: i32,
    pub is_visible: bool,
}

//
// ──────────────────────────────────────────────────────────
// Assembly
// ──────────────────────────────────────────────────────────
//

/// Sorts both child lists by `(sort_order, id)` for a deterministic
/// display order under tied sort values.
pub fn assemble_portfolio(
    portfolio: PortfolioRow,
    mut projects: Vec<ProjectRow>,
    mut blocks: Vec<BlockRow>,
    personal_info: PersonalInfo,
) -> PortfolioDocument {
    projects.sort_by(|a, b| (a.sort_order, a.id).cmp(&(b.sort_order, b.id)));
    blocks.sort_by(|a, b| (a.sort_order, a.id).cmp(&(b.sort_order, b.id)));

    PortfolioDocument {
        id: portfolio.id,
        owner_id: portfolio.owner_id,
        title: portfolio.title,
        slug: portfolio.slug,
        layout: LayoutKind::parse(&portfolio.layout),
        is_published: portfolio.is_published,
        cv_id: portfolio.cv_id,
        theme_id: portfolio.theme_id,
        custom_domain: portfolio.custom_domain,
        created_at: portfolio.created_at,
        last_edited_at: portfolio.last_edited_at,
        personal_info,
        projects: projects
            .into_iter()
            .map(|p| FeaturedProject {
                id: p.id,
                sort_order: p.sort_order,
                title: p.title,
                description: p.description,
                media_url: p.media_url,
                repo_url: p.repo_url,
                live_url: p.live_url,
                tech_stack: p.tech_stack,
                is_featured: p.is_featured,
            })
            .collect(),
        blocks: blocks
            .into_iter()
            .map(|b| PortfolioBlock {
                id: b.id,
                kind: BlockKind::parse(&b.kind),
                content: b.content,
                sort_order: b.sort_order,
                is_visible: b.is_visible,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio_row() -> PortfolioRow {
        let now = Utc::now();
        PortfolioRow {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: "Portfolio".to_string(),
            slug: "portfolio".to_string(),
            layout: "developer".to_string(),
            is_published: false,
            cv_id: None,
            theme_id: None,
            custom_domain: None,
            created_at: now,
            last_edited_at: now,
        }
    }

    fn block(portfolio_id: Uuid, order: i32, id: Uuid) -> BlockRow {
        BlockRow {
            id,
            portfolio_id,
            kind: "hero".to_string(),
            content: Map::new(),
            sort_order: order,
            is_visible: true,
        }
    }

    #[test]
    fn tied_block_orders_break_by_id() {
        let row = portfolio_row();
        let first = Uuid::from_u128(1);
        let second = Uuid::from_u128(2);

        let doc = assemble_portfolio(
            row.clone(),
            vec![],
            vec![block(row.id, 0, second), block(row.id, 0, first)],
            PersonalInfo::default(),
        );

        let ids: Vec<Uuid> = doc.blocks.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn stored_layout_string_becomes_the_enum() {
        let doc = assemble_portfolio(portfolio_row(), vec![], vec![], PersonalInfo::default());
        assert_eq!(doc.layout, LayoutKind::Developer);
    }
}
