//! Majors highlighted on the landing page. Each entry links to the wall
//! filtered by its category.

use crate::shared::search::{contains_ignore_case, Searchable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedMajor {
    pub id: u32,
    pub name: &'static str,
    pub category_id: &'static str,
}

impl FeaturedMajor {
    pub fn wall_href(&self) -> String {
        format!("/majors?categoryId={}", self.category_id)
    }
}

impl Searchable for FeaturedMajor {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(self.name, filter)
    }
}

const FEATURED: &[(&str, &str)] = &[
    ("哲学", "01"),
    ("逻辑学", "01"),
    ("宗教学", "01"),
    ("伦理学", "01"),
    ("经济学", "02"),
    ("经济统计学", "02"),
    ("国民经济管理", "02"),
    ("资源与环境经济学", "12"),
    ("商务经济学", "02"),
    ("能源经济", "02"),
    ("财政学", "03"),
    ("税收学", "03"),
    ("金融学", "03"),
    ("金融工程", "03"),
    ("保险学", "03"),
    ("投资学", "03"),
    ("金融数学", "03"),
    ("信用管理", "03"),
];

pub fn featured_majors() -> Vec<FeaturedMajor> {
    FEATURED
        .iter()
        .enumerate()
        .map(|(i, &(name, category_id))| FeaturedMajor {
            id: i as u32 + 1,
            name,
            category_id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::search::filter_list;

    #[test]
    fn test_featured_list() {
        let all = featured_majors();
        assert_eq!(all.len(), 18);
        assert_eq!(all[0].name, "哲学");
        assert_eq!(all[0].wall_href(), "/majors?categoryId=01");
    }

    #[test]
    fn test_filter_by_name() {
        let names: Vec<_> = filter_list(featured_majors(), "金融")
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["金融学", "金融工程", "金融数学"]);
    }

    #[test]
    fn test_blank_filter_keeps_all() {
        assert_eq!(filter_list(featured_majors(), "  ").len(), 18);
    }
}
