use crate::shared::search::Searchable;
use serde::{Deserialize, Serialize};

/// External website worth visiting while choosing a major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub url: String,
}

impl Searchable for Resource {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

const RESOURCES: &[(&str, &str, &str)] = &[
    (
        "College Board",
        "Comprehensive information on college planning, SAT, and scholarships.",
        "https://www.collegeboard.org/",
    ),
    (
        "U.S. News Education",
        "Rankings and information on colleges, graduate schools, and global universities.",
        "https://www.usnews.com/education",
    ),
    (
        "Khan Academy",
        "Free online courses, lessons and practice for various subjects and standardized tests.",
        "https://www.khanacademy.org/",
    ),
    (
        "Common App",
        "A single online college application form used by over 900 colleges and universities.",
        "https://www.commonapp.org/",
    ),
    (
        "Federal Student Aid",
        "Information on financial aid programs and how to apply for them.",
        "https://studentaid.gov/",
    ),
];

/// Built-in resource directory.
pub fn default_resources() -> Vec<Resource> {
    RESOURCES
        .iter()
        .enumerate()
        .map(|(i, (name, description, url))| Resource {
            id: i as u32 + 1,
            name: name.to_string(),
            description: description.to_string(),
            url: url.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::search::filter_list;

    #[test]
    fn test_default_resources() {
        let all = default_resources();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[4].name, "Federal Student Aid");
    }

    #[test]
    fn test_filter_matches_name_or_description() {
        let by_name = filter_list(default_resources(), "khan");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Khan Academy");

        let by_description = filter_list(default_resources(), "FINANCIAL AID");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "Federal Student Aid");

        assert!(filter_list(default_resources(), "nothing like this").is_empty());
    }

    #[test]
    fn test_blank_filter_keeps_everything() {
        assert_eq!(filter_list(default_resources(), "  ").len(), 5);
    }
}
