//! Repository card view model

use crate::state::RepoCard;

/// Display data for one repository card
#[derive(Debug, Clone)]
pub struct RepoCardViewModel {
    pub title: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub tags: Vec<String>,
    pub stars: String,
    pub homepage: Option<String>,
}

impl RepoCardViewModel {
    pub fn from_card(card: &RepoCard) -> Self {
        Self {
            title: card.record.name.clone(),
            description: card.record.description.clone(),
            language: card.record.language.clone(),
            tags: card.labels.clone(),
            stars: format!("★ {}", card.record.stargazers_count),
            homepage: card.record.homepage.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gh_tech_tags::RepoRecord;

    #[test]
    fn test_from_card() {
        let card = RepoCard {
            record: RepoRecord {
                id: 1,
                name: "portfolio".to_string(),
                description: Some("My site".to_string()),
                language: Some("TypeScript".to_string()),
                topics: vec!["nextjs".to_string()],
                created_at: Utc::now(),
                fork: false,
                private: false,
                stargazers_count: 12,
                html_url: "https://github.com/octocat/portfolio".to_string(),
                homepage: Some("https://octocat.dev".to_string()),
            },
            labels: vec!["Next.js".to_string(), "TypeScript".to_string()],
        };

        let vm = RepoCardViewModel::from_card(&card);
        assert_eq!(vm.title, "portfolio");
        assert_eq!(vm.stars, "★ 12");
        assert_eq!(vm.tags, vec!["Next.js", "TypeScript"]);
        assert_eq!(vm.homepage.as_deref(), Some("https://octocat.dev"));
    }
}
