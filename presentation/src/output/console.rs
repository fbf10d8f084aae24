//! Console output formatter for recommendation results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use skinpal_domain::{
    Catalog, Category, CategoryRecommendation, ProfileState, RecommendationSet, SkinProfile,
};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete routine
    pub fn format(profile: &SkinProfile, recommendations: &RecommendationSet) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Your Skincare Routine"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Profile:".cyan().bold(), profile));

        for (step, item) in recommendations.iter().enumerate() {
            output.push_str(&Self::section_header(&format!(
                "Step {}: {}",
                step + 1,
                item.category.label()
            )));
            output.push_str(&Self::format_category(item));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(profile: &SkinProfile, recommendations: &RecommendationSet) -> String {
        let value = serde_json::json!({
            "profile": profile,
            "recommendations": recommendations,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the top pick per step
    pub fn format_summary(profile: &SkinProfile, recommendations: &RecommendationSet) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Your Skincare Routine ===".cyan().bold()
        ));
        output.push_str(&format!("{} {}\n\n", "For:".dimmed(), profile));

        for item in recommendations {
            output.push_str(&format!(
                "{:<12} {}\n",
                format!("{}:", item.category.label()).bold(),
                item.top_pick().unwrap_or("-")
            ));
        }

        output
    }

    /// Format a stored profile (or its absence)
    pub fn format_profile(state: &ProfileState) -> String {
        match state.profile() {
            Some(profile) => {
                let mut output = String::new();
                output.push_str(&Self::section_header("Your Skin Profile"));
                output.push_str(&format!(
                    "  {:<10} {}\n",
                    "Skin type:".bold(),
                    profile.skin_type.label()
                ));
                output.push_str(&format!(
                    "  {:<10} {}\n",
                    "Concern:".bold(),
                    profile.concern.label()
                ));
                output.push_str(&format!(
                    "  {:<10} {}\n",
                    "Budget:".bold(),
                    profile.budget.label()
                ));
                output
            }
            None => format!(
                "{}\nRun `skinpal questionnaire` to create one.\n",
                "No skin profile saved yet.".yellow()
            ),
        }
    }

    /// Format a stored profile as JSON
    pub fn format_profile_json(state: &ProfileState) -> String {
        serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
    }

    /// Message shown when recommendations need a profile first
    pub fn format_questionnaire_required() -> String {
        format!(
            "{}\nComplete the questionnaire first: `skinpal questionnaire`\n",
            "No skin profile found.".yellow().bold()
        )
    }

    /// Confirmation after the questionnaire was saved
    pub fn format_profile_saved(profile: &SkinProfile) -> String {
        format!("{} {}\n", "✓ Profile saved:".green().bold(), profile)
    }

    /// Overview of the loaded catalog
    pub fn format_catalog(catalog: &Catalog) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Product Catalog"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Version:".cyan().bold(),
            catalog.version()
        ));

        for category in Category::ALL {
            output.push_str(&Self::section_header(category.label()));
            output.push_str(&format!(
                "  Product rules: {}\n  Tips: {}\n  Fallback: {}\n",
                catalog.rule_count(category),
                catalog.tips_for(category).count(),
                catalog.fallback_for(category).join(", ")
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_category(item: &CategoryRecommendation) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Products:".bold()));
        for (i, product) in item.products.iter().enumerate() {
            if i == 0 {
                output.push_str(&format!("  * {} {}\n", product, "(top pick)".green()));
            } else {
                output.push_str(&format!("  * {}\n", product));
            }
        }

        if !item.tips.is_empty() {
            output.push_str(&format!("{}\n", "Tips:".bold()));
            for tip in &item.tips {
                output.push_str(&format!("  - {}\n", tip));
            }
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, profile: &SkinProfile, recommendations: &RecommendationSet) -> String {
        Self::format(profile, recommendations)
    }

    fn format_json(&self, profile: &SkinProfile, recommendations: &RecommendationSet) -> String {
        Self::format_json(profile, recommendations)
    }

    fn format_summary(
        &self,
        profile: &SkinProfile,
        recommendations: &RecommendationSet,
    ) -> String {
        Self::format_summary(profile, recommendations)
    }
}
