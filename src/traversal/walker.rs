use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::sleep;

use crate::config::WalkerConfig;
use crate::models::IgnoreRecord;
use crate::snyk::IgnoreSource;
use crate::traversal::flattener::{flatten_ignore_set, ProjectScope};

/// Drives the organization → project → ignores fan-out and accumulates
/// the flattened records in discovery order.
pub struct HierarchyWalker {
    source: Arc<dyn IgnoreSource>,
    config: WalkerConfig,
}

impl HierarchyWalker {
    pub fn new(source: impl IgnoreSource + 'static, config: WalkerConfig) -> Self {
        Self {
            source: Arc::new(source),
            config,
        }
    }

    /// Walk every organization and project visible to the token and
    /// collect one record per stored ignore rule. An empty account
    /// hierarchy is a normal terminal state, not an error.
    pub async fn process_all(&self) -> Vec<IgnoreRecord> {
        let mut records = Vec::new();

        let organizations = self
            .source
            .organizations(self.config.group_id.as_deref())
            .await;

        if organizations.is_empty() {
            tracing::info!("No organizations found");
            return records;
        }

        for org in &organizations {
            let Some(org_id) = org.id.as_deref() else {
                tracing::warn!("Skipping organization with missing id");
                continue;
            };
            let org_name = org.display_name();
            tracing::info!("Processing organization: {} ({})", org_name, org_id);

            let projects = self.source.projects(org_id).await;

            let pb = ProgressBar::new(projects.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} projects",
                    )
                    .unwrap()
                    .progress_chars("#>-"),
            );

            for project in &projects {
                let Some(project_id) = project.id.as_deref() else {
                    tracing::warn!("Skipping project with missing id in org {}", org_id);
                    pb.inc(1);
                    continue;
                };
                let project_name = project.display_name();
                tracing::debug!("Processing project: {} ({})", project_name, project_id);

                let ignores = self.source.project_ignores(org_id, project_id).await;
                let scope = ProjectScope {
                    org_id: org_id.to_string(),
                    org_name: org_name.to_string(),
                    project_id: project_id.to_string(),
                    project_name: project_name.to_string(),
                };
                records.extend(flatten_ignore_set(&scope, &ignores));
                pb.inc(1);

                // Rate limiting delay, once per scanned project.
                if !self.config.project_delay.is_zero() {
                    sleep(self.config.project_delay).await;
                }
            }

            pb.finish_and_clear();
        }

        tracing::info!("Collected {} ignore records", records.len());
        records
    }
}
