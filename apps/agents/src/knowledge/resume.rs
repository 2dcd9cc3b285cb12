//! Skill→role and country-alias facts used by the resume agents.

use super::FactStore;

const SKILL_ROLE: &str = "skill_role";
const COUNTRY_ALIAS: &str = "country_alias";

const SKILL_ROLES: &[(&str, &str)] = &[
    ("react", "frontend engineer"),
    ("javascript", "frontend engineer"),
    ("typescript", "frontend engineer"),
    ("node.js", "backend engineer"),
    ("node", "backend engineer"),
    ("python", "software engineer"),
    ("java", "software engineer"),
    ("aws", "cloud engineer"),
    ("sql", "data engineer"),
    ("rest api", "backend engineer"),
    ("react native", "mobile engineer"),
    ("angular", "frontend engineer"),
    ("vue", "frontend engineer"),
    ("next.js", "frontend engineer"),
    ("graphql", "backend engineer"),
    ("go", "backend engineer"),
    ("golang", "backend engineer"),
    ("kotlin", "android developer"),
    ("swift", "ios developer"),
    ("docker", "devops engineer"),
    ("kubernetes", "devops engineer"),
    ("gcp", "cloud engineer"),
    ("azure", "cloud engineer"),
    ("pandas", "data engineer"),
    ("numpy", "data scientist"),
    ("spark", "data engineer"),
    ("airflow", "data engineer"),
    ("django", "backend engineer"),
    ("flask", "backend engineer"),
    ("express", "backend engineer"),
    ("spring", "backend engineer"),
    ("nestjs", "backend engineer"),
    ("postgresql", "backend engineer"),
    ("mysql", "backend engineer"),
    ("mongodb", "backend engineer"),
    ("tailwindcss", "frontend engineer"),
];

const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("in", "india"),
    ("india", "india"),
    ("bharat", "india"),
    ("bangalore", "india"),
    ("bengaluru", "india"),
    ("mumbai", "india"),
    ("pune", "india"),
    ("delhi", "india"),
    ("new delhi", "india"),
    ("hyderabad", "india"),
    ("chennai", "india"),
    ("noida", "india"),
    ("gurgaon", "india"),
    ("gurugram", "india"),
    ("ahmedabad", "india"),
    ("kolkata", "india"),
    ("us", "united states"),
    ("usa", "united states"),
    ("united states", "united states"),
    ("uk", "united kingdom"),
    ("united kingdom", "united kingdom"),
    ("london", "united kingdom"),
    ("remote", "remote"),
];

/// Aliases that are also ordinary English words; only honoured when they are the whole text.
const AMBIGUOUS_ALIASES: &[&str] = &["in", "us"];

/// Resume/job facts: which role a skill suggests and which country a place names.
#[derive(Debug, Clone)]
pub struct ResumeKnowledge {
    store: FactStore,
}

impl Default for ResumeKnowledge {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ResumeKnowledge {
    pub fn seeded() -> Self {
        let mut store = FactStore::new();
        for (skill, role) in SKILL_ROLES {
            store.add_fact(SKILL_ROLE, skill, role);
        }
        for (alias, country) in COUNTRY_ALIASES {
            store.add_fact(COUNTRY_ALIAS, alias, country);
        }
        Self { store }
    }

    pub fn map_skill_to_role(&self, skill: &str) -> Vec<String> {
        self.store.query(SKILL_ROLE, skill)
    }

    /// Finds the country named by `text`: the whole text first, then each
    /// two-word phrase and word in reading order.
    ///
    /// Inside free text the words "in" and "us" are skipped, so "based in Berlin"
    /// does not resolve to india and "contact us" not to united states. They still
    /// match when they are the entire text.
    pub fn normalize_country(&self, text: &str) -> Option<String> {
        let text = text.to_lowercase();
        if let Some(country) = self.store.query(COUNTRY_ALIAS, &text).into_iter().next() {
            return Some(country);
        }

        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        for (i, token) in tokens.iter().enumerate() {
            if let Some(next) = tokens.get(i + 1) {
                let phrase = format!("{token} {next}");
                if let Some(country) = self.store.query(COUNTRY_ALIAS, &phrase).into_iter().next() {
                    return Some(country);
                }
            }
            if AMBIGUOUS_ALIASES.contains(token) {
                continue;
            }
            if let Some(country) = self.store.query(COUNTRY_ALIAS, token).into_iter().next() {
                return Some(country);
            }
        }

        None
    }

    pub fn experience_bucket(&self, years: u32) -> &'static str {
        match years {
            0 | 1 => "0-1",
            2 => "2",
            3 => "3",
            4 | 5 => "4-5",
            _ => "6+",
        }
    }
}
