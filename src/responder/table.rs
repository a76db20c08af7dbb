// Response table: crisis phrases plus emotion categories and a default pool

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Substrings that count as a verifiable hotline reference in a crisis
/// response. Every crisis response must carry at least one.
const HOTLINE_MARKERS: [&str; 2] = ["988", "741741"];

/// One emotion category: a keyword and its candidate responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub responses: Vec<String>,
}

/// Crisis tier: trigger phrases and the single merged response pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisSection {
    pub phrases: Vec<String>,
    pub responses: Vec<String>,
}

/// Immutable response database. Category order matters: the first key that
/// matches a message wins, so `categories` is a list, not a map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTable {
    pub crisis: CrisisSection,
    pub categories: Vec<Category>,
    pub default: Vec<String>,
}

impl ResponseTable {
    /// Load a response table from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read response table file: {}", path.display()))?;

        let table: ResponseTable =
            serde_json::from_str(&contents).context("Failed to parse response table JSON")?;

        table.validate()?;
        Ok(table)
    }

    /// Check the invariants every table must hold before it is served.
    /// A table that passes makes `respond` total: every branch has a
    /// non-empty pool to draw from.
    pub fn validate(&self) -> Result<()> {
        if self.crisis.phrases.is_empty() {
            bail!("Response table has no crisis phrases");
        }
        if self.crisis.responses.is_empty() {
            bail!("Response table has an empty crisis response pool");
        }
        for response in &self.crisis.responses {
            if !HOTLINE_MARKERS.iter().any(|m| response.contains(m)) {
                bail!("Crisis response is missing a hotline reference: {:?}", response);
            }
        }
        for category in &self.categories {
            if category.key.trim().is_empty() {
                bail!("Response table has a category with a blank key");
            }
            if category.responses.is_empty() {
                bail!("Category '{}' has an empty response pool", category.key);
            }
        }
        if self.default.is_empty() {
            bail!("Response table has an empty default pool");
        }
        Ok(())
    }

    /// All emotion keys, in match-priority order (for display purposes)
    pub fn category_keys(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.key.as_str()).collect()
    }
}

impl Default for ResponseTable {
    /// The built-in mental health response database.
    fn default() -> Self {
        fn pool(responses: &[&str]) -> Vec<String> {
            responses.iter().map(|r| r.to_string()).collect()
        }

        fn category(key: &str, responses: &[&str]) -> Category {
            Category {
                key: key.to_string(),
                responses: pool(responses),
            }
        }

        ResponseTable {
            crisis: CrisisSection {
                phrases: pool(&[
                    "suicide",
                    "kill myself",
                    "end it all",
                    "want to die",
                    "harm myself",
                ]),
                responses: pool(&[
                    "I'm really concerned about what you're saying. Please reach out for immediate help: National Suicide Prevention Lifeline: 988 or Crisis Text Line: text HOME to 741741. You matter, and help is available right now. 💙",
                    "I take this very seriously. Please call 988 right now or go to your nearest emergency room. You matter and there are people who want to help you through this. 🆘",
                ]),
            },
            categories: vec![
                category(
                    "sad",
                    &[
                        "I'm really sorry you're feeling down 😔 Remember, it's completely okay to not be okay sometimes. Want to talk about what's going on?",
                        "Aw, sad days can feel so heavy 💙 I'm here for you, and these feelings won't last forever.",
                        "I'm holding space for you right now. You're not carrying this sadness alone 🫂",
                        "Depression lies to us about our worth. You matter, and these feelings are temporary 🌈",
                    ],
                ),
                category(
                    "anxious",
                    &[
                        "Anxiety can feel overwhelming! Let's breathe together for a moment 🌬️ In... and out... You're doing great!",
                        "I get anxious feelings too. Want to try naming 5 things you can see around you? It helps ground me 🎯",
                        "Anxiety is like a false alarm - your body is trying to protect you. Thank it for trying, and let it know you're safe now 🛡️",
                    ],
                ),
                category(
                    "stress",
                    &[
                        "Stress can feel like too much to carry! How about we break things down into tiny steps together? 🧩",
                        "When everything feels overwhelming, focus on just one breath at a time. You've got this 🌬️",
                        "Remember to be kind to yourself - you're dealing with a lot, and you're doing your best 🌿",
                    ],
                ),
                category(
                    "lonely",
                    &[
                        "Loneliness can feel so isolating, but I'm right here with you 💫 You're not as alone as it feels",
                        "So many people feel lonely sometimes, even when it doesn't seem like it. I'm glad you reached out 🌙",
                    ],
                ),
                category(
                    "happy",
                    &[
                        "YAY! 🎉 That's wonderful! I'm so happy for you! Want to celebrate this moment together?",
                        "That's amazing! Happy moments are the best 💫 Tell me more about what's making you smile!",
                        "I love hearing about happy times! Thanks for sharing the joy with me 🌈",
                    ],
                ),
                category(
                    "tired",
                    &[
                        "It's okay to rest, you know 🛋️ Some days are just for recharging. Be gentle with yourself",
                        "Tired days are valid too! How about some quiet time together? No pressure to do anything 💤",
                    ],
                ),
                category(
                    "help",
                    &[
                        "I'm here to help however I can! For immediate support: Crisis Text Line (text HOME to 741741) or call 988 🤝",
                    ],
                ),
            ],
            default: pool(&[
                "I hear you. Thanks for sharing that with me 💙",
                "I'm here with you through this. Want to talk more about it? 🤗",
                "That sounds really tough. I'm listening, no judgment ever 🌟",
                "Thank you for trusting me with that. How can I support you best right now? 💫",
            ]),
        }
    }
}
