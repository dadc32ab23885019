use crate::explanation::types::RecommendationExplanation;
use crate::metrics::format_score;
use html_escape::{encode_double_quoted_attribute, encode_text};
use crate::speech::VoiceClip;

/// HTML formatter for explanations
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format explanation as standalone HTML with embedded CSS
    ///
    /// A voice clip, when given, is embedded as an autoplaying `<audio>`
    /// element with a base64 data URI.
    pub fn format(explanation: &RecommendationExplanation, voice: Option<&VoiceClip>) -> String {
        let mut html = String::with_capacity(4096);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<title>Crop Recommendation</title>\n");
        html.push_str("<style>\n");
        html.push_str("body { font-family: system-ui, sans-serif; max-width: 800px; margin: 40px auto; padding: 20px; line-height: 1.6; background: #121212; color: #ffffff; }\n");
        html.push_str("h1, h2 { color: #ffffff; }\n");
        html.push_str("h2 { border-bottom: 2px solid #333333; padding-bottom: 5px; margin-top: 30px; }\n");
        html.push_str(".rotation { padding: 16px; border-radius: 12px; border: 1px solid #ddd; margin-bottom: 12px; background: #1E1E1E; }\n");
        html.push_str(".rotation h4 { margin: 0; color: #2E7D32; }\n");
        html.push_str(".rotation p { margin: 6px 0; color: #E0E0E0; }\n");
        html.push_str(".rotation .detail { font-size: 13px; }\n");
        html.push_str("table { width: 100%; border-collapse: collapse; margin: 16px 0; }\n");
        html.push_str("th { background: #1565C0; color: white; text-align: left; padding: 12px; font-weight: 600; }\n");
        html.push_str("td { padding: 12px; border-bottom: 1px solid #333333; }\n");
        html.push_str("</style>\n</head>\n<body>\n");

        html.push_str("<h1>🌱 Crop Recommendation</h1>\n");
        html.push_str(&format!("<p><strong>{}</strong></p>\n", encode_text(&explanation.overall.message)));
        html.push_str(&format!("<p>{}</p>\n", encode_text(&explanation.conditions.message)));

        // Recommended crops
        html.push_str("<h2>🌾 Recommended Crops</h2>\n");
        html.push_str("<table>\n<tr><th>#</th><th>Crop</th><th>Yield (t/ha)</th><th>Profit (₹)</th><th>Sustainability</th></tr>\n");
        for card in &explanation.crops {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{:.1}</td><td>{:.0}</td><td>{}</td></tr>\n",
                card.rank,
                encode_text(&card.name),
                card.expected_yield,
                card.expected_profit,
                encode_text(&card.sustainability)
            ));
        }
        html.push_str("</table>\n");

        // Smart economics
        html.push_str("<h2>📊 Smart Economics</h2>\n");
        html.push_str("<table>\n<tr><th>Crop</th><th>Profit (₹)</th><th>Risk</th><th>Smart Score</th></tr>\n");
        for card in &explanation.economics {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{:.0}</td><td>{}</td><td>{}</td></tr>\n",
                encode_text(&card.name),
                card.expected_profit,
                encode_text(&card.risk_label),
                format_score(card.smart_score)
            ));
        }
        html.push_str("</table>\n");

        // Rotation cards
        html.push_str("<h2>🌍 Crop Rotation</h2>\n");
        for card in &explanation.rotation {
            html.push_str("<div class=\"rotation\">\n");
            html.push_str(&format!("<h4>🌱 {}</h4>\n", encode_text(&card.crop)));
            html.push_str(&format!("<p>🔄 {}</p>\n", encode_text(&card.message)));
            html.push_str(&format!("<p class=\"detail\">✅ {}</p>\n", encode_text(&card.detail)));
            html.push_str("</div>\n");
        }

        // Voice
        html.push_str("<h2>🔊 Voice Assistant</h2>\n");
        html.push_str(&format!("<p>{}</p>\n", encode_text(&explanation.voice_prompt)));
        if let Some(clip) = voice {
            html.push_str(&format!(
                "<audio autoplay controls><source src=\"{}\" type=\"{}\"></audio>\n",
                encode_double_quoted_attribute(&clip.to_data_uri()),
                encode_double_quoted_attribute(&clip.mime_type)
            ));
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}
