use chrono::Utc;

use crate::structs::aggregate_state::AggregateState;
use crate::structs::config::config::Config;

/// Deterministic text rendering of the aggregate state. Section order is
/// fixed; the language ranking uses descending code with an ascending name
/// tie-break so equal totals always render the same way.
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn render(config: &Config, state: &AggregateState, truncated: bool) -> String {
        let mut out = String::new();

        Self::render_header(&mut out, config, truncated);
        Self::render_details(&mut out, state);
        Self::render_language_summary(&mut out, state);
        Self::render_grand_totals(&mut out, state);
        Self::render_skipped(&mut out, state);
        Self::render_processed(&mut out, state);

        out
    }

    fn render_header(out: &mut String, config: &Config, truncated: bool) {
        out.push_str("GitHub LOC Report\n");
        out.push_str("=================\n\n");
        out.push_str(&format!(
            "Generated: {}\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(&format!("Account: {}\n", config.account));
        out.push_str(&format!(
            "Filters: private={} forks={} archived={}\n",
            inclusion(config.include_private),
            inclusion(config.include_forks),
            inclusion(config.include_archived),
        ));
        match &config.language_filter {
            Some(languages) => {
                out.push_str(&format!("Languages: {}\n", languages.join(", ")));
            }
            None => out.push_str("Languages: all\n"),
        }
        if truncated {
            out.push_str(
                "\nNOTE: repository discovery was truncated by a listing error; totals may be incomplete.\n",
            );
        }
    }

    fn render_details(out: &mut String, state: &AggregateState) {
        out.push_str("\nPer-repository breakdown\n");
        out.push_str("------------------------\n");
        out.push_str(&format!(
            "{:<30} {:<10} {:<20} {:>8} {:>8} {:>8} {:>10}\n",
            "Repository", "Visibility", "Language", "Files", "Blank", "Comment", "Code"
        ));
        for detail in &state.details {
            let visibility = if detail.private { "private" } else { "public" };
            out.push_str(&format!(
                "{:<30} {:<10} {:<20} {:>8} {:>8} {:>8} {:>10}\n",
                detail.repository,
                visibility,
                detail.language,
                detail.stats.files,
                detail.stats.blank,
                detail.stats.comment,
                detail.stats.code,
            ));
        }
    }

    fn render_language_summary(out: &mut String, state: &AggregateState) {
        out.push_str("\nLanguage summary\n");
        out.push_str("----------------\n");
        out.push_str(&format!(
            "{:<20} {:>8} {:>8} {:>8} {:>10}\n",
            "Language", "Files", "Blank", "Comment", "Code"
        ));

        let mut ranked: Vec<_> = state.language_totals.iter().collect();
        ranked.sort_by(|a, b| b.1.code.cmp(&a.1.code).then_with(|| a.0.cmp(b.0)));

        for (language, stats) in ranked {
            out.push_str(&format!(
                "{:<20} {:>8} {:>8} {:>8} {:>10}\n",
                language, stats.files, stats.blank, stats.comment, stats.code,
            ));
        }
    }

    fn render_grand_totals(out: &mut String, state: &AggregateState) {
        out.push_str("\nGrand totals\n");
        out.push_str("------------\n");
        out.push_str(&format!(
            "Repositories processed: {}\n",
            format_thousands(state.processed.len() as u64)
        ));
        out.push_str(&format!("Files:   {}\n", format_thousands(state.grand_totals.files)));
        out.push_str(&format!("Blank:   {}\n", format_thousands(state.grand_totals.blank)));
        out.push_str(&format!("Comment: {}\n", format_thousands(state.grand_totals.comment)));
        out.push_str(&format!("Code:    {}\n", format_thousands(state.grand_totals.code)));
    }

    fn render_skipped(out: &mut String, state: &AggregateState) {
        if state.skipped.is_empty() {
            return;
        }
        out.push_str("\nSkipped repositories\n");
        out.push_str("--------------------\n");
        for (name, status) in &state.skipped {
            out.push_str(&format!("{:<30} {}\n", name, status));
        }
    }

    fn render_processed(out: &mut String, state: &AggregateState) {
        out.push_str("\nProcessed repositories\n");
        out.push_str("----------------------\n");
        for name in &state.processed {
            out.push_str(&format!("{}\n", name));
        }
    }
}

fn inclusion(included: bool) -> &'static str {
    if included {
        "included"
    } else {
        "excluded"
    }
}

/// Grouped-thousands rendering, e.g. 1234567 -> "1,234,567".
fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
