use crate::explanation::types::RecommendationExplanation;
use crate::metrics::format_score;

/// Markdown formatter for explanations
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format explanation as markdown
    pub fn format(explanation: &RecommendationExplanation) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str("# 🌱 Crop Recommendation / फसल अनुशंसा\n\n");
        md.push_str(&format!("**{}**\n\n", explanation.overall.message));
        md.push_str(&format!(
            "*Ranked by:* {}  \n",
            explanation.overall.ranking_display
        ));
        md.push_str(&format!("*Conditions:* {}\n\n", explanation.conditions.message));

        // Recommended crops
        md.push_str("## 🌾 Recommended Crops / अनुशंसित फसलें\n\n");
        md.push_str("| # | Crop | Yield (t/ha) | Profit (₹) | Sustainability |\n");
        md.push_str("|---|------|--------------|------------|----------------|\n");
        for card in &explanation.crops {
            md.push_str(&format!(
                "| {} | {} | {:.1} | {:.0} | {} |\n",
                card.rank, card.name, card.expected_yield, card.expected_profit, card.sustainability
            ));
        }
        md.push('\n');

        // Smart economics
        md.push_str("## 📊 Smart Economics / स्मार्ट अर्थशास्त्र\n\n");
        md.push_str("| Crop | Profit (₹) | Risk | Smart Score |\n");
        md.push_str("|------|------------|------|-------------|\n");
        for card in &explanation.economics {
            md.push_str(&format!(
                "| {} | {:.0} | {} | {} |\n",
                card.name,
                card.expected_profit,
                card.risk_label,
                format_score(card.smart_score)
            ));
        }
        md.push('\n');

        // Rotation planner
        md.push_str("## 🌍 Crop Rotation / फसल चक्र\n\n");
        for card in &explanation.rotation {
            md.push_str(&format!("### 🌱 {}\n\n", card.crop));
            md.push_str(&format!("🔄 {}  \n", card.message));
            md.push_str(&format!("✅ {}\n\n", card.detail));
            md.push_str(&format!("*Why:* {}\n\n", card.rationale));
        }

        // Voice
        if !explanation.voice_prompt.is_empty() {
            md.push_str("## 🔊 Voice Assistant\n\n");
            md.push_str(&format!("> {}\n", explanation.voice_prompt));
        }

        md
    }
}
