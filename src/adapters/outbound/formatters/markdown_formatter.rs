use crate::application::dto::{AnalysisResponse, ConnectivityResponse, ImpactResponse};
use crate::impact_analysis::domain::{
    AnalysisMetadata, AnalysisSummary, ClassifiedEdge, DependencyEdge, DependencyRecord,
    EdgeStatus, ImpactEntry, Simulation,
};
use crate::ports::outbound::AnalysisFormatter;
use crate::shared::Result;

/// Markdown table header for ingested dependencies
const DEPENDENCY_TABLE_HEADER: &str = "| Dependency | Vulnerabilities | Highest Finding | Used In |\n";

/// Markdown table separator line for ingested dependencies
const DEPENDENCY_TABLE_SEPARATOR: &str = "|------------|-----------------|-----------------|---------|\n";

/// Markdown table header for build graph edges
const EDGE_TABLE_HEADER: &str = "| From | To |\n";

/// Markdown table separator line for build graph edges
const EDGE_TABLE_SEPARATOR: &str = "|------|----|\n";

/// MarkdownFormatter adapter for human-readable reports
///
/// Every free-text cell passes through `escape_markdown_table_cell`, since
/// scanner descriptions routinely contain pipes and line breaks.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace("\r\n", " ").replace('\n', " ")
    }

    fn join_or_dash(items: &[String]) -> String {
        if items.is_empty() {
            "-".to_string()
        } else {
            Self::escape_markdown_table_cell(&items.join(", "))
        }
    }

    fn edge_status_label(status: EdgeStatus) -> &'static str {
        match status {
            EdgeStatus::Vulnerable => "🔴 vulnerable",
            EdgeStatus::Impacted => "🟠 impacted",
            EdgeStatus::Safe => "🟢 safe",
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_metadata(&self, output: &mut String, metadata: &AnalysisMetadata) {
        output.push_str(&format!(
            "*Generated by {} {} at {}*\n\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.generated_at()
        ));
        if let Some(report_date) = metadata.report_date() {
            output.push_str(&format!("*Scan report date: {}*\n\n", report_date));
        }
    }

    fn render_summary(&self, output: &mut String, summary: &AnalysisSummary) {
        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Count |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!(
            "| Total dependencies | {} |\n",
            summary.total_dependencies
        ));
        output.push_str(&format!(
            "| Vulnerable dependencies | {} |\n",
            summary.vulnerable_count
        ));
        output.push_str(&format!("| High severity | {} |\n", summary.high_severity));
        output.push_str(&format!(
            "| Medium severity | {} |\n",
            summary.medium_severity
        ));
        output.push_str(&format!("| Low severity | {} |\n\n", summary.low_severity));
    }

    fn render_dependencies(&self, output: &mut String, dependencies: &[DependencyRecord]) {
        output.push_str("## Dependencies\n\n");

        if dependencies.is_empty() {
            output.push_str("*No dependencies in scan report*\n\n");
            return;
        }

        output.push_str(DEPENDENCY_TABLE_HEADER);
        output.push_str(DEPENDENCY_TABLE_SEPARATOR);

        for record in dependencies {
            let finding = record
                .first_vulnerability()
                .map(|v| match v.severity.as_deref() {
                    Some(severity) => format!("{} ({})", v.name, severity),
                    None => v.name.clone(),
                })
                .unwrap_or_else(|| "-".to_string());

            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&record.file_name),
                record.vulnerabilities.len(),
                Self::escape_markdown_table_cell(&finding),
                Self::join_or_dash(&record.used_in)
            ));
        }
        output.push('\n');
    }

    fn render_edges(&self, output: &mut String, title: &str, edges: &[DependencyEdge]) {
        output.push_str(&format!("## {}\n\n", title));

        if edges.is_empty() {
            output.push_str("*No edges*\n\n");
            return;
        }

        output.push_str(EDGE_TABLE_HEADER);
        output.push_str(EDGE_TABLE_SEPARATOR);
        for edge in edges {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&edge.from),
                Self::escape_markdown_table_cell(&edge.to)
            ));
        }
        output.push('\n');
    }

    fn render_simulations(&self, output: &mut String, simulations: &[Simulation]) {
        output.push_str("## Upgrade Simulations\n\n");

        if simulations.is_empty() {
            output.push_str("*No simulations*\n\n");
            return;
        }

        output.push_str("| Simulation | Recommended Version | Severity Score | Description |\n");
        output.push_str("|------------|---------------------|----------------|-------------|\n");
        for simulation in simulations {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&simulation.id),
                Self::escape_markdown_table_cell(&simulation.recommended_version),
                simulation.severity_score,
                Self::escape_markdown_table_cell(&simulation.description)
            ));
        }
        output.push('\n');
    }

    fn render_impact(&self, output: &mut String, impact: &[ImpactEntry]) {
        output.push_str("## Impacted Dependents\n\n");

        if impact.is_empty() {
            output.push_str("*No clean dependency directly depends on this component*\n\n");
            return;
        }

        output.push_str("| Dependent | Impact | Used In | Recommendation |\n");
        output.push_str("|-----------|--------|---------|----------------|\n");
        for entry in impact {
            output.push_str(&format!(
                "| {} | {:?} | {} | {} |\n",
                Self::escape_markdown_table_cell(&entry.target),
                entry.impact_level,
                Self::join_or_dash(&entry.used_in),
                Self::escape_markdown_table_cell(&entry.recommendation)
            ));
        }
        output.push('\n');
    }

    fn render_component_list(&self, output: &mut String, title: &str, components: &[String]) {
        output.push_str(&format!("## {}\n\n", title));

        if components.is_empty() {
            output.push_str("*None*\n\n");
            return;
        }

        for component in components {
            output.push_str(&format!("- `{}`\n", component.replace('`', "'")));
        }
        output.push('\n');
    }

    fn render_classified_edges(&self, output: &mut String, edges: &[ClassifiedEdge]) {
        output.push_str("## Edges\n\n");

        if edges.is_empty() {
            output.push_str("*No edges*\n\n");
            return;
        }

        output.push_str("| From | To | Status |\n");
        output.push_str("|------|----|--------|\n");
        for classified in edges {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&classified.edge.from),
                Self::escape_markdown_table_cell(&classified.edge.to),
                Self::edge_status_label(classified.status)
            ));
        }
        output.push('\n');
    }
}

impl AnalysisFormatter for MarkdownFormatter {
    fn format_analysis(&self, response: &AnalysisResponse) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Dependency Vulnerability Analysis\n\n");
        if let Some(name) = response.project_info.as_ref().and_then(|p| p.name.as_deref()) {
            output.push_str(&format!("**Project:** {}\n\n", name));
        }
        self.render_metadata(&mut output, &response.metadata);
        self.render_summary(&mut output, &response.summary);
        self.render_dependencies(&mut output, &response.dependencies);
        self.render_edges(&mut output, "Dependency Graph", &response.graph);

        Ok(output)
    }

    fn format_impact(&self, response: &ImpactResponse) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "# Upgrade Impact: {}\n\n",
            response.vulnerable_dependency
        ));
        self.render_simulations(&mut output, &response.simulations);
        self.render_impact(&mut output, &response.impact);

        Ok(output)
    }

    fn format_connectivity(&self, response: &ConnectivityResponse) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Vulnerability Connectivity\n\n");
        self.render_component_list(
            &mut output,
            "Vulnerable Components",
            &response.report.vulnerable,
        );
        self.render_component_list(
            &mut output,
            "Transitively Impacted Components",
            &response.report.impacted,
        );
        self.render_classified_edges(&mut output, &response.report.edges);

        if response.unresolved_edges > 0 {
            output.push_str(&format!(
                "> ⚠️ {} graph {} reference components missing from the scan report.\n",
                response.unresolved_edges,
                if response.unresolved_edges == 1 {
                    "edge"
                } else {
                    "edges"
                }
            ));
        }

        Ok(output)
    }
}
