//! Output formatter trait

use skinpal_domain::{OutputFormat, RecommendationSet, SkinProfile};

/// Trait for formatting recommendation results
pub trait OutputFormatter {
    /// Format the complete routine with products and tips
    fn format(&self, profile: &SkinProfile, recommendations: &RecommendationSet) -> String;

    /// Format as JSON
    fn format_json(&self, profile: &SkinProfile, recommendations: &RecommendationSet) -> String;

    /// Format the top pick per step (concise output)
    fn format_summary(&self, profile: &SkinProfile, recommendations: &RecommendationSet)
    -> String;

    /// Dispatch on an output format
    fn render(
        &self,
        format: OutputFormat,
        profile: &SkinProfile,
        recommendations: &RecommendationSet,
    ) -> String {
        match format {
            OutputFormat::Full => self.format(profile, recommendations),
            OutputFormat::Summary => self.format_summary(profile, recommendations),
            OutputFormat::Json => self.format_json(profile, recommendations),
        }
    }
}
